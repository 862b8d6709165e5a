//! Keymap
//!
//! Key bindings mapped to password field actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by key presses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Text input
    InsertChar(char),
    Paste(String),
    DeleteChar,
    DeleteCharForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ClearLine,
    Submit,

    // Control
    ToggleVisibility,
    Focus,

    // Application
    Quit,

    // No action
    None,
}

impl Action {
    /// Check if the action edits the text buffer
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::InsertChar(_)
                | Self::Paste(_)
                | Self::DeleteChar
                | Self::DeleteCharForward
                | Self::ClearLine
        )
    }
}

/// Map key event to action
pub fn field_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Tab, _) => Action::Focus,
        (KeyCode::Backspace, _) => Action::DeleteChar,
        (KeyCode::Delete, _) => Action::DeleteCharForward,
        (KeyCode::Left, _) => Action::CursorLeft,
        (KeyCode::Right, _) => Action::CursorRight,
        (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => Action::CursorHome,
        (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => Action::CursorEnd,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ClearLine,
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Action::ToggleVisibility,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::InsertChar(c),
        _ => Action::None,
    }
}

/// Key hints for the help bar
pub fn key_hints() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Enter", "commit"),
        ("C-s", "show/hide"),
        ("C-u", "clear"),
        ("Tab", "focus"),
        ("Esc", "quit"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_text_input() {
        assert_eq!(field_action(key(KeyCode::Char('a'))), Action::InsertChar('a'));
        assert_eq!(
            field_action(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Action::InsertChar('A')
        );
        assert_eq!(field_action(key(KeyCode::Backspace)), Action::DeleteChar);
        assert_eq!(field_action(key(KeyCode::Delete)), Action::DeleteCharForward);
        assert_eq!(field_action(key(KeyCode::Enter)), Action::Submit);
        assert_eq!(field_action(key(KeyCode::Esc)), Action::Quit);
    }

    #[test]
    fn test_ctrl_shortcuts() {
        assert_eq!(field_action(key_ctrl(KeyCode::Char('a'))), Action::CursorHome);
        assert_eq!(field_action(key_ctrl(KeyCode::Char('e'))), Action::CursorEnd);
        assert_eq!(field_action(key_ctrl(KeyCode::Char('u'))), Action::ClearLine);
        assert_eq!(field_action(key_ctrl(KeyCode::Char('s'))), Action::ToggleVisibility);
        assert_eq!(field_action(key_ctrl(KeyCode::Char('c'))), Action::Quit);
        assert_eq!(field_action(key_ctrl(KeyCode::Char('x'))), Action::None);
    }

    #[test]
    fn test_is_edit() {
        assert!(Action::InsertChar('x').is_edit());
        assert!(Action::Paste("abc".to_string()).is_edit());
        assert!(Action::ClearLine.is_edit());
        assert!(!Action::Submit.is_edit());
        assert!(!Action::CursorLeft.is_edit());
    }
}
