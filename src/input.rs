//! Input handling - key translation

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A key the editing core acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKey {
    Enter,
    Backspace,
    Tab,
    /// A printable character, as typed
    Char(char),
}

impl EditKey {
    /// Translate a crossterm KeyEvent
    ///
    /// Returns `None` for keys the editing core does not handle, including
    /// characters typed with Control or Alt held.
    pub fn from_key_event(event: KeyEvent) -> Option<Self> {
        let KeyEvent {
            code, modifiers, kind, ..
        } = event;

        // Only process key press events, ignore release and repeat
        if kind != KeyEventKind::Press {
            return None;
        }

        match code {
            KeyCode::Enter => Some(EditKey::Enter),
            KeyCode::Backspace => Some(EditKey::Backspace),
            KeyCode::Tab => Some(EditKey::Tab),
            KeyCode::Char(ch) => {
                if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) || ch.is_control() {
                    None
                } else {
                    Some(EditKey::Char(ch))
                }
            }
            _ => None,
        }
    }
}

impl fmt::Display for EditKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditKey::Enter => f.write_str("RET"),
            EditKey::Backspace => f.write_str("Backspace"),
            EditKey::Tab => f.write_str("TAB"),
            EditKey::Char(' ') => f.write_str("SPC"),
            EditKey::Char(ch) => write!(f, "{ch}"),
        }
    }
}
