//! Keymap
//!
//! Key bindings mapped to actions, per screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by key presses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Focus
    FocusNext,
    FocusPrev,
    EndEditing,

    // Text input
    InsertChar(char),
    DeleteChar,
    DeleteCharForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ClearField,

    // Field controls
    ToggleSecureVisibility,

    // Form
    Submit,

    // Navigation
    Back,

    // Activity log
    ToggleLogs,
    ScrollUp,
    ScrollDown,

    // Application
    Quit,

    // No action
    None,
}

/// Map key event to action on the login screen while a field is focused
pub fn editing_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Action::EndEditing,
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Tab, _) | (KeyCode::Down, _) => Action::FocusNext,
        (KeyCode::BackTab, _) | (KeyCode::Up, _) => Action::FocusPrev,
        (KeyCode::Backspace, _) => Action::DeleteChar,
        (KeyCode::Delete, _) => Action::DeleteCharForward,
        (KeyCode::Left, _) => Action::CursorLeft,
        (KeyCode::Right, _) => Action::CursorRight,
        (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => Action::CursorHome,
        (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => Action::CursorEnd,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ClearField,
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Action::ToggleSecureVisibility,
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => Action::ToggleLogs,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::InsertChar(c),
        _ => Action::None,
    }
}

/// Map key event to action on the login screen with no field focused
pub fn login_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => Action::ToggleLogs,
        (KeyCode::Tab, _) | (KeyCode::Down, _) | (KeyCode::Char('i'), _) => Action::FocusNext,
        (KeyCode::BackTab, _) | (KeyCode::Up, _) => Action::FocusPrev,
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Esc, _) => Action::Back,
        (KeyCode::Char('q'), _) => Action::Quit,
        _ => Action::None,
    }
}

/// Map key event to action on the welcome screen
pub fn welcome_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => Action::ToggleLogs,
        (KeyCode::Enter | KeyCode::Esc | KeyCode::Backspace | KeyCode::Left, _) => Action::Back,
        (KeyCode::Char('b') | KeyCode::Char('h'), _) => Action::Back,
        (KeyCode::Char('q'), _) => Action::Quit,
        _ => Action::None,
    }
}

/// Map key event to action while the activity log popup is open
pub fn logs_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => Action::ToggleLogs,
        (KeyCode::Esc | KeyCode::Char('q'), _) => Action::ToggleLogs,
        (KeyCode::Char('j') | KeyCode::Down, _) => Action::ScrollDown,
        (KeyCode::Char('k') | KeyCode::Up, _) => Action::ScrollUp,
        _ => Action::None,
    }
}
