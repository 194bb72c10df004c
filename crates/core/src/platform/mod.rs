pub mod stub;

#[cfg(target_os = "macos")]
pub mod darwin;

#[cfg(target_os = "windows")]
pub mod win32;

use crate::error::Result;
use crate::keys::Key;
use crate::logger;

/// Press or release half of a button / key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Press,
    Release,
}

/// Raw synthetic event injection for one host input subsystem. Implementors
/// do not know which application has focus; events land wherever the OS
/// routes them.
pub trait Backend: Send {
    /// Primary display size in pixels.
    fn screen_size(&self) -> Result<(u32, u32)>;

    /// Move the pointer to absolute (x, y).
    fn pointer_move(&mut self, x: i32, y: i32) -> Result<()>;

    /// Press or release the left mouse button at the current position.
    fn button(&mut self, dir: Direction) -> Result<()>;

    /// Press or release a symbolic key.
    fn key(&mut self, key: Key, dir: Direction) -> Result<()>;

    /// One full keystroke producing `ch`, mapped through the host keyboard
    /// layout. Layout-dependent characters can come out wrong on other
    /// layouts.
    fn char_key(&mut self, ch: char) -> Result<()>;
}

/// Create the backend appropriate for the current OS.
pub fn create_backend(force_stub: bool) -> Result<Box<dyn Backend>> {
    if force_stub {
        logger::register_prefix("stub", logger::COLOR_GRAY);
        return Ok(Box::new(stub::StubBackend::new()));
    }
    #[cfg(target_os = "macos")]
    {
        logger::register_prefix("darwin", logger::COLOR_GRAY);
        return Ok(Box::new(darwin::DarwinBackend::new()?));
    }
    #[cfg(target_os = "windows")]
    {
        logger::register_prefix("win32", logger::COLOR_GRAY);
        return Ok(Box::new(win32::Win32Backend::new()));
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        // No injection backend for this OS; dry-run through the stub.
        logger::register_prefix("stub", logger::COLOR_GRAY);
        return Ok(Box::new(stub::StubBackend::new()));
    }
}
