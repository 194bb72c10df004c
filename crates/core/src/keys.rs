use crate::error::InputError;

/// One symbolic key in the recognized vocabulary: modifiers, printable
/// characters, and named special keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Ctrl,
    Alt,
    Shift,
    Meta,
    Enter,
    Tab,
    Escape,
    Space,
    Backspace,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    Char(char),
}

impl Key {
    /// Parse a key name as written in script data ("ctrl", "f4", "r", ...).
    /// Names outside the vocabulary are a configuration error, surfaced only
    /// when the combo is actually dispatched.
    pub fn parse(name: &str) -> Result<Key, InputError> {
        let lower = name.to_lowercase();
        let key = match lower.as_str() {
            "ctrl" | "control" => Key::Ctrl,
            "alt" | "option" => Key::Alt,
            "shift" => Key::Shift,
            "win" | "meta" | "cmd" | "super" => Key::Meta,
            "enter" | "return" => Key::Enter,
            "tab" => Key::Tab,
            "esc" | "escape" => Key::Escape,
            "space" => Key::Space,
            "backspace" => Key::Backspace,
            "delete" | "del" => Key::Delete,
            "home" => Key::Home,
            "end" => Key::End,
            "pageup" => Key::PageUp,
            "pagedown" => Key::PageDown,
            "up" => Key::Up,
            "down" => Key::Down,
            "left" => Key::Left,
            "right" => Key::Right,
            "f1" => Key::F1,
            "f2" => Key::F2,
            "f3" => Key::F3,
            "f4" => Key::F4,
            "f5" => Key::F5,
            "f6" => Key::F6,
            "f7" => Key::F7,
            "f8" => Key::F8,
            "f9" => Key::F9,
            "f10" => Key::F10,
            "f11" => Key::F11,
            "f12" => Key::F12,
            s => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_graphic() => Key::Char(c),
                    _ => return Err(InputError::UnrecognizedKey(name.to_string())),
                }
            }
        };
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_keys_case_insensitively() {
        assert_eq!(Key::parse("ctrl").unwrap(), Key::Ctrl);
        assert_eq!(Key::parse("CTRL").unwrap(), Key::Ctrl);
        assert_eq!(Key::parse("win").unwrap(), Key::Meta);
        assert_eq!(Key::parse("cmd").unwrap(), Key::Meta);
        assert_eq!(Key::parse("enter").unwrap(), Key::Enter);
        assert_eq!(Key::parse("f4").unwrap(), Key::F4);
        assert_eq!(Key::parse("pagedown").unwrap(), Key::PageDown);
    }

    #[test]
    fn parses_printable_characters() {
        assert_eq!(Key::parse("r").unwrap(), Key::Char('r'));
        assert_eq!(Key::parse("R").unwrap(), Key::Char('r'));
        assert_eq!(Key::parse("2").unwrap(), Key::Char('2'));
    }

    #[test]
    fn rejects_names_outside_the_vocabulary() {
        assert!(matches!(
            Key::parse("hyperdrive"),
            Err(InputError::UnrecognizedKey(n)) if n == "hyperdrive"
        ));
        assert!(Key::parse("").is_err());
        assert!(Key::parse("ä").is_err());
    }
}
