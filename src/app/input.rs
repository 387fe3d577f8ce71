use crossterm::event::{KeyEvent, KeyEventKind};

use crate::input::{InputHandler, KeyContext};
use crate::nav::Route;

use super::App;

impl App {
    /// Returns true when the app should exit
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        let action = InputHandler::resolve(key, self.key_context());
        let quit = self.execute_action(action);
        if quit {
            self.should_quit = true;
        }
        quit
    }

    fn key_context(&self) -> KeyContext {
        let route = self.navigator.current();
        KeyContext {
            route,
            editing: route == Route::Login && self.login.form().focused().is_some(),
            logs_open: self.logs_open,
        }
    }
}
