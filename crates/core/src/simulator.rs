use std::time::Duration;

use crate::error::Result;
use crate::keys::Key;
use crate::logger;
use crate::platform::{Backend, Direction};
use crate::readiness::{FixedDelay, Readiness};
use crate::sleep;
use crate::types::{ScreenGeometry, ScreenPoint};

/// Fixed pointer transition duration for every move. Not configurable.
const MOVE_DURATION: Duration = Duration::from_millis(200);
/// Spacing of the interpolated move events inside a transition.
const MOVE_TICK: Duration = Duration::from_millis(16);
/// Hold time between button press and release.
const CLICK_HOLD: Duration = Duration::from_millis(15);
/// Spacing between key presses while building up a combo.
const COMBO_SPACING: Duration = Duration::from_millis(20);

/// The four primitives every task step compiles down to. Tests substitute a
/// recording implementation; production uses [`InputSimulator`].
pub trait Simulator {
    /// Glide the pointer to `point`, then click `clicks` times spaced by
    /// `interval`.
    fn move_and_click(&mut self, point: ScreenPoint, clicks: u32, interval: Duration)
        -> Result<()>;

    /// Emit one keystroke per character of `text`, spaced by `interval`.
    fn type_text(&mut self, text: &str, interval: Duration) -> Result<()>;

    /// Press the named keys in listed order, hold, release in reverse order.
    fn press_hotkey(&mut self, keys: &[String]) -> Result<()>;

    /// Give the target application `delay` to settle.
    fn wait(&mut self, delay: Duration) -> Result<()>;
}

/// Production simulator: a platform backend plus the display geometry
/// computed at startup. Stateless between calls apart from the cursor
/// position the OS itself retains.
pub struct InputSimulator {
    backend: Box<dyn Backend>,
    geom: ScreenGeometry,
    readiness: Box<dyn Readiness>,
    // Position as of the last move we issued. The glide needs a starting
    // point and the OS does not tell us where the cursor is.
    pos: ScreenPoint,
}

impl InputSimulator {
    pub fn new(backend: Box<dyn Backend>, geom: ScreenGeometry) -> Self {
        Self::with_readiness(backend, geom, Box::new(FixedDelay))
    }

    pub fn with_readiness(
        backend: Box<dyn Backend>,
        geom: ScreenGeometry,
        readiness: Box<dyn Readiness>,
    ) -> Self {
        Self { backend, geom, readiness, pos: ScreenPoint::new(0, 0) }
    }

    fn glide_to(&mut self, target: ScreenPoint) -> Result<()> {
        let steps = (MOVE_DURATION.as_millis() / MOVE_TICK.as_millis()).max(1) as i32;
        let (x0, y0) = (self.pos.x, self.pos.y);
        for i in 1..=steps {
            let x = x0 + (target.x - x0) * i / steps;
            let y = y0 + (target.y - y0) * i / steps;
            self.backend.pointer_move(x, y)?;
            if i < steps {
                sleep::sleep_exact(MOVE_TICK);
            }
        }
        self.pos = target;
        Ok(())
    }
}

impl Simulator for InputSimulator {
    fn move_and_click(
        &mut self,
        point: ScreenPoint,
        clicks: u32,
        interval: Duration,
    ) -> Result<()> {
        let target = self.geom.clamp(point);
        if target != point {
            logger::warn(&format!(
                "({}, {}) is outside the usable display area, clamped to ({}, {})",
                point.x, point.y, target.x, target.y
            ));
        }
        self.glide_to(target)?;
        for i in 0..clicks {
            if i > 0 {
                sleep::sleep_exact(interval);
            }
            self.backend.button(Direction::Press)?;
            sleep::sleep_exact(CLICK_HOLD);
            self.backend.button(Direction::Release)?;
        }
        Ok(())
    }

    fn type_text(&mut self, text: &str, interval: Duration) -> Result<()> {
        for ch in text.chars() {
            self.backend.char_key(ch)?;
            sleep::sleep_jitter(interval);
        }
        Ok(())
    }

    fn press_hotkey(&mut self, names: &[String]) -> Result<()> {
        // Resolve every name before touching the keyboard, so a bad combo
        // emits no events at all.
        let keys = names.iter().map(|n| Key::parse(n)).collect::<Result<Vec<_>>>()?;
        for (i, key) in keys.iter().enumerate() {
            if i > 0 {
                sleep::sleep_exact(COMBO_SPACING);
            }
            self.backend.key(*key, Direction::Press)?;
        }
        for key in keys.iter().rev() {
            self.backend.key(*key, Direction::Release)?;
        }
        Ok(())
    }

    fn wait(&mut self, delay: Duration) -> Result<()> {
        self.readiness.settle(delay);
        Ok(())
    }
}
