use core_graphics::display::CGDisplay;
use core_graphics::event::{CGEvent, CGEventTapLocation, CGEventType, CGKeyCode, CGMouseButton};
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};
use core_graphics::geometry::CGPoint;

use crate::error::{InputError, Result};
use crate::keys::Key;

use super::{Backend, Direction};

/// CoreGraphics-backed injection. Events are posted at the HID tap so they
/// land on whatever application currently has focus.
pub struct DarwinBackend {
    source: CGEventSource,
    // Last commanded pointer position; button events must carry coordinates.
    pos: CGPoint,
}

impl DarwinBackend {
    pub fn new() -> Result<Self> {
        let source = CGEventSource::new(CGEventSourceStateID::HIDSystemState).map_err(|_| {
            InputError::Unavailable(
                "cannot create event source — grant Accessibility permission to your terminal"
                    .to_string(),
            )
        })?;
        Ok(Self { source, pos: CGPoint::new(0.0, 0.0) })
    }

    fn post_mouse(&self, ty: CGEventType) -> Result<()> {
        let ev = CGEvent::new_mouse_event(self.source.clone(), ty, self.pos, CGMouseButton::Left)
            .map_err(|_| InputError::Inject("mouse event".to_string()))?;
        ev.post(CGEventTapLocation::HID);
        Ok(())
    }
}

impl Backend for DarwinBackend {
    fn screen_size(&self) -> Result<(u32, u32)> {
        let display = CGDisplay::main();
        Ok((display.pixels_wide() as u32, display.pixels_high() as u32))
    }

    fn pointer_move(&mut self, x: i32, y: i32) -> Result<()> {
        self.pos = CGPoint::new(x as f64, y as f64);
        self.post_mouse(CGEventType::MouseMoved)
    }

    fn button(&mut self, dir: Direction) -> Result<()> {
        let ty = match dir {
            Direction::Press => CGEventType::LeftMouseDown,
            Direction::Release => CGEventType::LeftMouseUp,
        };
        self.post_mouse(ty)
    }

    fn key(&mut self, key: Key, dir: Direction) -> Result<()> {
        let code = key_code(key)
            .ok_or_else(|| InputError::Inject(format!("no virtual keycode for {:?}", key)))?;
        let ev =
            CGEvent::new_keyboard_event(self.source.clone(), code, dir == Direction::Press)
                .map_err(|_| InputError::Inject("keyboard event".to_string()))?;
        ev.post(CGEventTapLocation::HID);
        Ok(())
    }

    fn char_key(&mut self, ch: char) -> Result<()> {
        // Characters with a known ANSI keycode go through it; everything else
        // rides as a unicode payload on a dummy keycode. Non-US layouts can
        // reinterpret the known codes.
        let code = char_code(ch).unwrap_or(0);
        let s = ch.to_string();

        let down = CGEvent::new_keyboard_event(self.source.clone(), code, true)
            .map_err(|_| InputError::Inject("keyboard event".to_string()))?;
        down.set_string(&s);
        down.post(CGEventTapLocation::HID);

        let up = CGEvent::new_keyboard_event(self.source.clone(), code, false)
            .map_err(|_| InputError::Inject("keyboard event".to_string()))?;
        up.post(CGEventTapLocation::HID);
        Ok(())
    }
}

/// ANSI-layout virtual keycode for a printable character.
fn char_code(ch: char) -> Option<CGKeyCode> {
    let code = match ch.to_ascii_lowercase() {
        'a' => 0,
        's' => 1,
        'd' => 2,
        'f' => 3,
        'h' => 4,
        'g' => 5,
        'z' => 6,
        'x' => 7,
        'c' => 8,
        'v' => 9,
        'b' => 11,
        'q' => 12,
        'w' => 13,
        'e' => 14,
        'r' => 15,
        'y' => 16,
        't' => 17,
        '1' => 18,
        '2' => 19,
        '3' => 20,
        '4' => 21,
        '6' => 22,
        '5' => 23,
        '=' => 24,
        '9' => 25,
        '7' => 26,
        '-' => 27,
        '8' => 28,
        '0' => 29,
        ']' => 30,
        'o' => 31,
        'u' => 32,
        '[' => 33,
        'i' => 34,
        'p' => 35,
        'l' => 37,
        'j' => 38,
        '\'' => 39,
        'k' => 40,
        ';' => 41,
        '\\' => 42,
        ',' => 43,
        '/' => 44,
        'n' => 45,
        'm' => 46,
        '.' => 47,
        '`' => 50,
        _ => return None,
    };
    Some(code)
}

/// Virtual keycode for a symbolic key.
fn key_code(key: Key) -> Option<CGKeyCode> {
    let code = match key {
        Key::Ctrl => 59,
        Key::Alt => 58,
        Key::Shift => 56,
        Key::Meta => 55,
        Key::Enter => 36,
        Key::Tab => 48,
        Key::Escape => 53,
        Key::Space => 49,
        Key::Backspace => 51,
        Key::Delete => 117,
        Key::Home => 115,
        Key::End => 119,
        Key::PageUp => 116,
        Key::PageDown => 121,
        Key::Up => 126,
        Key::Down => 125,
        Key::Left => 123,
        Key::Right => 124,
        Key::F1 => 122,
        Key::F2 => 120,
        Key::F3 => 99,
        Key::F4 => 118,
        Key::F5 => 96,
        Key::F6 => 97,
        Key::F7 => 98,
        Key::F8 => 100,
        Key::F9 => 101,
        Key::F10 => 109,
        Key::F11 => 103,
        Key::F12 => 111,
        Key::Char(ch) => return char_code(ch),
    };
    Some(code)
}
