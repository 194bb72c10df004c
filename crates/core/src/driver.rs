use std::time::Duration;

use crate::error::Result;
use crate::logger;
use crate::script::{ActionStep, TaskScript};
use crate::simulator::Simulator;
use crate::types::ScreenPoint;

/// Execute one script, step by step. The first primitive failure aborts the
/// remainder; side effects of completed steps stay exactly as they are.
pub fn run(sim: &mut dyn Simulator, script: &TaskScript) -> Result<()> {
    logger::register_prefix(&script.name, logger::COLOR_BLUE);
    let total = script.steps.len();
    for (i, step) in script.steps.iter().enumerate() {
        logger::info_p(&script.name, &format!("step {}/{}: {}", i + 1, total, step));
        match step {
            ActionStep::MoveClick { x, y, clicks, interval } => {
                sim.move_and_click(
                    ScreenPoint::new(*x, *y),
                    *clicks,
                    Duration::from_secs_f64(interval.max(0.0)),
                )?;
            }
            ActionStep::TypeText { text, interval } => {
                sim.type_text(text, Duration::from_secs_f64(interval.max(0.0)))?;
            }
            ActionStep::PressCombo { keys } => {
                sim.press_hotkey(keys)?;
            }
            ActionStep::Wait { seconds } => {
                sim.wait(Duration::from_secs_f64(seconds.max(0.0)))?;
            }
        }
    }
    Ok(())
}

/// Execute scripts in order; the first failure aborts everything after it.
/// There is no isolation between tasks and no rollback.
pub fn run_routine(sim: &mut dyn Simulator, scripts: &[TaskScript]) -> Result<()> {
    for script in scripts {
        logger::info(&format!("running task \"{}\"", script.name));
        run(sim, script)?;
    }
    Ok(())
}
