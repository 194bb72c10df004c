use crate::error::Result;
use crate::keys::Key;
use crate::logger;

use super::{Backend, Direction};

/// Log-only backend: reports a fixed display and injects nothing. Lets the
/// whole routine run harmlessly.
pub struct StubBackend;

impl StubBackend {
    pub fn new() -> Self {
        StubBackend
    }
}

impl Default for StubBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for StubBackend {
    fn screen_size(&self) -> Result<(u32, u32)> {
        Ok((1920, 1080))
    }

    fn pointer_move(&mut self, x: i32, y: i32) -> Result<()> {
        logger::info_p("stub", &format!("pointer_move({}, {})", x, y));
        Ok(())
    }

    fn button(&mut self, dir: Direction) -> Result<()> {
        logger::info_p("stub", &format!("button({:?})", dir));
        Ok(())
    }

    fn key(&mut self, key: Key, dir: Direction) -> Result<()> {
        logger::info_p("stub", &format!("key({:?}, {:?})", key, dir));
        Ok(())
    }

    fn char_key(&mut self, ch: char) -> Result<()> {
        logger::info_p("stub", &format!("char_key({:?})", ch));
        Ok(())
    }
}
