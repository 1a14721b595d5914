//! Key mapping: crossterm key events to page actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// User action derived from key events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Confirm the input (Enter)
    Submit,
    /// Insert a line break into the input
    Newline,
    /// Insert character
    InsertChar(char),
    /// Delete character before the cursor (Backspace)
    DeleteChar,
    CursorLeft,
    CursorRight,
    CursorStart,
    CursorEnd,
    /// Up arrow: previous suggestion, or scroll one line up
    Previous,
    /// Down arrow: next suggestion, or scroll one line down
    Next,
    /// Scroll one page up
    ScrollUp,
    /// Scroll one page down
    ScrollDown,
    /// Esc: abandon a pending response, or quit when idle
    Cancel,
    /// Quit application
    Quit,
    /// No action
    None,
}

/// Key event handler - maps key events to actions
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(key: KeyEvent) -> Action {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Esc, _) => Action::Cancel,

            (KeyCode::Enter, m)
                if m.contains(KeyModifiers::ALT) || m.contains(KeyModifiers::SHIFT) =>
            {
                Action::Newline
            }
            (KeyCode::Char('j'), KeyModifiers::CONTROL) => Action::Newline,
            (KeyCode::Enter, _) => Action::Submit,

            (KeyCode::Backspace, _) => Action::DeleteChar,
            (KeyCode::Left, _) => Action::CursorLeft,
            (KeyCode::Right, _) => Action::CursorRight,
            (KeyCode::Home, _) => Action::CursorStart,
            (KeyCode::End, _) => Action::CursorEnd,
            (KeyCode::Char('a'), KeyModifiers::CONTROL) => Action::CursorStart,
            (KeyCode::Char('e'), KeyModifiers::CONTROL) => Action::CursorEnd,

            (KeyCode::Up, _) => Action::Previous,
            (KeyCode::Down, _) => Action::Next,
            (KeyCode::PageUp, _) => Action::ScrollUp,
            (KeyCode::PageDown, _) => Action::ScrollDown,

            (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => Action::InsertChar(c),
            _ => Action::None,
        }
    }
}
