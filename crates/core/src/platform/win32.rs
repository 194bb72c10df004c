use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, INPUT_MOUSE, KEYBDINPUT, KEYBD_EVENT_FLAGS,
    KEYEVENTF_KEYUP, KEYEVENTF_UNICODE, MOUSEEVENTF_ABSOLUTE, MOUSEEVENTF_LEFTDOWN,
    MOUSEEVENTF_LEFTUP, MOUSEEVENTF_MOVE, MOUSEINPUT, VIRTUAL_KEY, VK_BACK, VK_CONTROL,
    VK_DELETE, VK_DOWN, VK_END, VK_ESCAPE, VK_F1, VK_F10, VK_F11, VK_F12, VK_F2, VK_F3, VK_F4,
    VK_F5, VK_F6, VK_F7, VK_F8, VK_F9, VK_HOME, VK_LEFT, VK_LWIN, VK_MENU, VK_NEXT, VK_PRIOR,
    VK_RETURN, VK_RIGHT, VK_SHIFT, VK_SPACE, VK_TAB, VK_UP,
};
use windows::Win32::UI::WindowsAndMessaging::{GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN};

use crate::error::{InputError, Result};
use crate::keys::Key;

use super::{Backend, Direction};

/// SendInput-backed injection. Pointer moves use absolute coordinates
/// normalized to the primary display.
pub struct Win32Backend {
    screen: (i32, i32),
}

impl Win32Backend {
    pub fn new() -> Self {
        let screen = unsafe { (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) };
        Self { screen }
    }

    fn send(&self, inputs: &[INPUT]) -> Result<()> {
        let sent = unsafe { SendInput(inputs, std::mem::size_of::<INPUT>() as i32) };
        if sent as usize != inputs.len() {
            // Blocked input (UIPI against an elevated window, secure desktop)
            return Err(InputError::Unavailable(
                "SendInput was rejected by the OS".to_string(),
            ));
        }
        Ok(())
    }

    fn key_input(&self, vk: VIRTUAL_KEY, scan: u16, flags: KEYBD_EVENT_FLAGS) -> INPUT {
        INPUT {
            r#type: INPUT_KEYBOARD,
            Anonymous: INPUT_0 {
                ki: KEYBDINPUT {
                    wVk: vk,
                    wScan: scan,
                    dwFlags: flags,
                    time: 0,
                    dwExtraInfo: 0,
                },
            },
        }
    }
}

impl Default for Win32Backend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for Win32Backend {
    fn screen_size(&self) -> Result<(u32, u32)> {
        Ok((self.screen.0 as u32, self.screen.1 as u32))
    }

    fn pointer_move(&mut self, x: i32, y: i32) -> Result<()> {
        let (w, h) = self.screen;
        let input = INPUT {
            r#type: INPUT_MOUSE,
            Anonymous: INPUT_0 {
                mi: MOUSEINPUT {
                    dx: x * 65535 / w.max(1),
                    dy: y * 65535 / h.max(1),
                    mouseData: 0,
                    dwFlags: MOUSEEVENTF_MOVE | MOUSEEVENTF_ABSOLUTE,
                    time: 0,
                    dwExtraInfo: 0,
                },
            },
        };
        self.send(&[input])
    }

    fn button(&mut self, dir: Direction) -> Result<()> {
        let flags = match dir {
            Direction::Press => MOUSEEVENTF_LEFTDOWN,
            Direction::Release => MOUSEEVENTF_LEFTUP,
        };
        let input = INPUT {
            r#type: INPUT_MOUSE,
            Anonymous: INPUT_0 {
                mi: MOUSEINPUT {
                    dx: 0,
                    dy: 0,
                    mouseData: 0,
                    dwFlags: flags,
                    time: 0,
                    dwExtraInfo: 0,
                },
            },
        };
        self.send(&[input])
    }

    fn key(&mut self, key: Key, dir: Direction) -> Result<()> {
        let vk = virtual_key(key)
            .ok_or_else(|| InputError::Inject(format!("no virtual key for {:?}", key)))?;
        let flags = match dir {
            Direction::Press => KEYBD_EVENT_FLAGS(0),
            Direction::Release => KEYEVENTF_KEYUP,
        };
        self.send(&[self.key_input(vk, 0, flags)])
    }

    fn char_key(&mut self, ch: char) -> Result<()> {
        // KEYEVENTF_UNICODE sidesteps the layout: each UTF-16 unit goes out
        // as its own down/up pair.
        let mut buf = [0u16; 2];
        for unit in ch.encode_utf16(&mut buf).iter().copied() {
            self.send(&[
                self.key_input(VIRTUAL_KEY(0), unit, KEYEVENTF_UNICODE),
                self.key_input(VIRTUAL_KEY(0), unit, KEYEVENTF_UNICODE | KEYEVENTF_KEYUP),
            ])?;
        }
        Ok(())
    }
}

/// Virtual-key code for a symbolic key.
fn virtual_key(key: Key) -> Option<VIRTUAL_KEY> {
    let vk = match key {
        Key::Ctrl => VK_CONTROL,
        Key::Alt => VK_MENU,
        Key::Shift => VK_SHIFT,
        Key::Meta => VK_LWIN,
        Key::Enter => VK_RETURN,
        Key::Tab => VK_TAB,
        Key::Escape => VK_ESCAPE,
        Key::Space => VK_SPACE,
        Key::Backspace => VK_BACK,
        Key::Delete => VK_DELETE,
        Key::Home => VK_HOME,
        Key::End => VK_END,
        Key::PageUp => VK_PRIOR,
        Key::PageDown => VK_NEXT,
        Key::Up => VK_UP,
        Key::Down => VK_DOWN,
        Key::Left => VK_LEFT,
        Key::Right => VK_RIGHT,
        Key::F1 => VK_F1,
        Key::F2 => VK_F2,
        Key::F3 => VK_F3,
        Key::F4 => VK_F4,
        Key::F5 => VK_F5,
        Key::F6 => VK_F6,
        Key::F7 => VK_F7,
        Key::F8 => VK_F8,
        Key::F9 => VK_F9,
        Key::F10 => VK_F10,
        Key::F11 => VK_F11,
        Key::F12 => VK_F12,
        // Letters and digits map straight onto their ASCII uppercase codes.
        Key::Char(ch) if ch.is_ascii_alphanumeric() => {
            VIRTUAL_KEY(ch.to_ascii_uppercase() as u16)
        }
        Key::Char(_) => return None,
    };
    Some(vk)
}
