use std::time::Duration;

use deskhand_core::driver;
use deskhand_core::error::{InputError, Result};
use deskhand_core::routine;
use deskhand_core::simulator::Simulator;
use deskhand_core::types::{ScreenGeometry, ScreenPoint};

#[derive(Debug, Clone, PartialEq)]
enum Ev {
    Click(i32, i32, u32),
    Type(String),
    Combo(Vec<String>),
    Wait(f64),
}

fn typed(text: &str) -> Ev {
    Ev::Type(text.to_string())
}

fn combo(keys: &[&str]) -> Ev {
    Ev::Combo(keys.iter().map(|k| k.to_string()).collect())
}

/// Records every primitive call; optionally fails once a call budget is
/// exhausted, standing in for the OS refusing synthetic input mid-run.
#[derive(Default)]
struct Recorder {
    trace: Vec<Ev>,
    fail_at: Option<usize>,
}

impl Recorder {
    fn push(&mut self, ev: Ev) -> Result<()> {
        if self.fail_at == Some(self.trace.len()) {
            return Err(InputError::Unavailable("synthetic input denied".to_string()));
        }
        self.trace.push(ev);
        Ok(())
    }
}

impl Simulator for Recorder {
    fn move_and_click(
        &mut self,
        point: ScreenPoint,
        clicks: u32,
        _interval: Duration,
    ) -> Result<()> {
        self.push(Ev::Click(point.x, point.y, clicks))
    }

    fn type_text(&mut self, text: &str, _interval: Duration) -> Result<()> {
        self.push(Ev::Type(text.to_string()))
    }

    fn press_hotkey(&mut self, keys: &[String]) -> Result<()> {
        self.push(Ev::Combo(keys.to_vec()))
    }

    fn wait(&mut self, delay: Duration) -> Result<()> {
        self.push(Ev::Wait(delay.as_secs_f64()))
    }
}

fn expected_trace(h: i32) -> Vec<Ev> {
    vec![
        // process-email
        Ev::Click(100, h - 5, 1),
        Ev::Wait(2.0),
        Ev::Click(300, 200, 1),
        Ev::Wait(1.0),
        combo(&["ctrl", "r"]),
        Ev::Wait(1.0),
        typed("Thanks for the update. I’ll review and get back to you shortly."),
        combo(&["ctrl", "enter"]),
        Ev::Wait(1.0),
        // schedule-meeting
        combo(&["ctrl", "2"]),
        Ev::Wait(1.0),
        Ev::Click(600, 400, 1),
        Ev::Wait(0.5),
        combo(&["ctrl", "n"]),
        Ev::Wait(1.0),
        typed("Project Sync – Weekly"),
        combo(&["tab"]),
        typed("Discuss progress, blockers, next steps."),
        combo(&["tab"]),
        typed("10:00 AM – 10:30 AM"),
        combo(&["tab"]),
        typed("Conference Room A"),
        Ev::Wait(0.5),
        combo(&["tab"]),
        typed("alice@example.com; bob@example.com; carol@example.com"),
        combo(&["enter"]),
        Ev::Wait(0.5),
        combo(&["ctrl", "s"]),
        Ev::Wait(0.5),
        // update-document
        combo(&["win", "e"]),
        Ev::Wait(1.0),
        typed(r"C:\Projects\Current\StatusReport.docx"),
        combo(&["enter"]),
        Ev::Wait(3.0),
        combo(&["ctrl", "end"]),
        Ev::Wait(0.5),
        combo(&["enter"]),
        typed("- Completed data ingestion; pending model validation."),
        Ev::Wait(0.5),
        combo(&["ctrl", "s"]),
        Ev::Wait(0.5),
        combo(&["alt", "f4"]),
        Ev::Wait(0.5),
        // lock-workstation
        combo(&["win", "l"]),
    ]
}

#[test]
fn the_four_task_pipeline_replays_the_exact_event_trace() {
    let geom = ScreenGeometry::new(1920, 1080, 10);
    let scripts = routine::default_routine(&geom);

    let mut sim = Recorder::default();
    driver::run_routine(&mut sim, &scripts).unwrap();

    assert_eq!(sim.trace, expected_trace(1080));
}

#[test]
fn the_trace_follows_the_authored_display_height() {
    let geom = ScreenGeometry::new(2560, 1440, 10);
    let scripts = routine::default_routine(&geom);

    let mut sim = Recorder::default();
    driver::run_routine(&mut sim, &scripts).unwrap();

    assert_eq!(sim.trace, expected_trace(1440));
}

#[test]
fn a_denied_primitive_truncates_the_trace_at_that_point() {
    let geom = ScreenGeometry::new(1920, 1080, 10);
    let scripts = routine::default_routine(&geom);
    let full = expected_trace(1080);

    // fail at a handful of positions across the pipeline, including the
    // very first call and the final lock
    for fail_at in [0, 4, 9, 29, full.len() - 1] {
        let mut sim = Recorder { trace: Vec::new(), fail_at: Some(fail_at) };
        let err = driver::run_routine(&mut sim, &scripts).unwrap_err();
        assert!(matches!(err, InputError::Unavailable(_)));
        assert_eq!(sim.trace, &full[..fail_at]);
    }
}
