use std::path::PathBuf;

use anyhow::Result;

use deskhand_core::driver;
use deskhand_core::logger;
use deskhand_core::platform;
use deskhand_core::routine;
use deskhand_core::script;
use deskhand_core::simulator::InputSimulator;
use deskhand_core::types::ScreenGeometry;

/// Safety margin kept clear of every display edge.
const EDGE_MARGIN: u32 = 10;

fn main() -> Result<()> {
    let force_stub = std::env::args().any(|a| a == "--stub");

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    logger::init(&cwd.join("logs"));
    logger::info("deskhand started");

    let backend = platform::create_backend(force_stub)?;
    let (w, h) = backend.screen_size()?;
    let geom = ScreenGeometry::new(w, h, EDGE_MARGIN);
    logger::info(&format!("display {}x{}, margin {}", w, h, EDGE_MARGIN));

    // routine.json in the working directory overrides the built-in data
    let routine_path = cwd.join("routine.json");
    let scripts = if routine_path.is_file() {
        logger::info(&format!("loading routine from {}", routine_path.display()));
        script::load_routine(&routine_path)?
    } else {
        routine::default_routine(&geom)
    };

    let mut sim = InputSimulator::new(backend, geom);
    driver::run_routine(&mut sim, &scripts)?;

    logger::info("routine complete");
    Ok(())
}
