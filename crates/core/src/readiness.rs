use std::time::{Duration, Instant};

use crate::sleep;

/// Strategy for "has the target application settled" during a Wait step.
/// The scripts budget a fixed delay per step; a strategy decides how much of
/// that budget to actually spend.
pub trait Readiness: Send {
    /// Block until the step's delay budget is considered spent.
    fn settle(&mut self, budget: Duration);
}

/// Open-loop fallback: sleep the full budget. Never returns early.
pub struct FixedDelay;

impl Readiness for FixedDelay {
    fn settle(&mut self, budget: Duration) {
        sleep::sleep_exact(budget);
    }
}

/// Poll a probe until it reports ready, returning early on success and
/// degrading to the full fixed delay when the probe never fires.
pub struct PollUntil<F> {
    probe: F,
    poll_every: Duration,
}

impl<F> PollUntil<F>
where
    F: FnMut() -> bool + Send,
{
    pub fn new(probe: F) -> Self {
        Self { probe, poll_every: Duration::from_millis(50) }
    }
}

impl<F> Readiness for PollUntil<F>
where
    F: FnMut() -> bool + Send,
{
    fn settle(&mut self, budget: Duration) {
        let deadline = Instant::now() + budget;
        loop {
            if (self.probe)() {
                return;
            }
            let now = Instant::now();
            if now >= deadline {
                return;
            }
            sleep::sleep_exact(self.poll_every.min(deadline - now));
        }
    }
}
