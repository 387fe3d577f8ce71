//! Input Handler
//!
//! Picks the keymap that applies to the current screen context.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::keymap::{editing_action, login_action, logs_action, welcome_action, Action};
use crate::nav::Route;

/// What the key lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyContext {
    pub route: Route,
    pub editing: bool,
    pub logs_open: bool,
}

/// Input handler that resolves key events based on current context
pub struct InputHandler;

impl InputHandler {
    pub fn resolve(key: KeyEvent, context: KeyContext) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
            return Action::Quit;
        }
        if context.logs_open {
            return logs_action(key);
        }
        match context.route {
            Route::Login if context.editing => editing_action(key),
            Route::Login => login_action(key),
            Route::Welcome => welcome_action(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn context(route: Route, editing: bool, logs_open: bool) -> KeyContext {
        KeyContext { route, editing, logs_open }
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(InputHandler::resolve(ctrl_c, context(Route::Login, true, false)), Action::Quit);
        assert_eq!(InputHandler::resolve(ctrl_c, context(Route::Welcome, false, true)), Action::Quit);
    }

    #[test]
    fn test_q_types_while_editing() {
        let q = key(KeyCode::Char('q'));
        assert_eq!(InputHandler::resolve(q, context(Route::Login, true, false)), Action::InsertChar('q'));
        assert_eq!(InputHandler::resolve(q, context(Route::Login, false, false)), Action::Quit);
    }

    #[test]
    fn test_logs_popup_takes_precedence() {
        let esc = key(KeyCode::Esc);
        assert_eq!(InputHandler::resolve(esc, context(Route::Welcome, false, true)), Action::ToggleLogs);
        assert_eq!(InputHandler::resolve(esc, context(Route::Welcome, false, false)), Action::Back);
    }
}
