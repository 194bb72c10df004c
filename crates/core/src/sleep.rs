use rand::Rng;
use std::thread;
use std::time::Duration;

/// Sleep for the full duration. Never returns early; may run longer under
/// system load.
pub fn sleep_exact(d: Duration) {
    thread::sleep(d);
}

/// Sleep for `d` plus up to 30% additive jitter. Used between keystrokes so
/// typing cadence does not look mechanical.
pub fn sleep_jitter(d: Duration) {
    if d.is_zero() {
        return;
    }
    let jitter = d.as_secs_f64() * 0.3;
    let actual = d.as_secs_f64() + rand::thread_rng().gen_range(0.0..jitter);
    thread::sleep(Duration::from_secs_f64(actual));
}
