//! Translation of crossterm key events into sheet keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gridpad_core::Key;

/// Whether the key should end the program.
pub fn is_quit(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
}

/// Map a terminal key to the key delivered to the sheet.
///
/// Returns `None` for keys the sheet has no use for (function keys,
/// control chords and the like).
pub fn translate(key: KeyEvent) -> Option<Key> {
    let key = match key.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Key::BackTab,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            Key::Char(c)
        }
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_translate_navigation() {
        assert_eq!(translate(press(KeyCode::Down, KeyModifiers::NONE)), Some(Key::Down));
        assert_eq!(translate(press(KeyCode::Esc, KeyModifiers::NONE)), Some(Key::Escape));
        assert_eq!(translate(press(KeyCode::Enter, KeyModifiers::NONE)), Some(Key::Enter));
        assert_eq!(translate(press(KeyCode::BackTab, KeyModifiers::SHIFT)), Some(Key::BackTab));
        assert_eq!(translate(press(KeyCode::Tab, KeyModifiers::SHIFT)), Some(Key::BackTab));
    }

    #[test]
    fn test_translate_text() {
        assert_eq!(translate(press(KeyCode::Char('='), KeyModifiers::NONE)), Some(Key::Char('=')));
        assert_eq!(translate(press(KeyCode::Char('A'), KeyModifiers::SHIFT)), Some(Key::Char('A')));
        assert_eq!(translate(press(KeyCode::Char('a'), KeyModifiers::CONTROL)), None);
        assert_eq!(translate(press(KeyCode::F(2), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit(press(KeyCode::Char('q'), KeyModifiers::CONTROL)));
        assert!(is_quit(press(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(press(KeyCode::Char('q'), KeyModifiers::NONE)));
    }
}
