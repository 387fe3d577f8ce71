use crate::activity::ActivityAction;
use crate::form::{FieldId, LoginForm, ResetLink, ResetOutcome};
use crate::input::Action;
use crate::nav::{NavOutcome, Navigation, Route};
use crate::screens::WelcomeScreen;
use crate::ui::components::MessageType;

use super::App;

impl App {
    /// Returns true when the app should exit
    pub fn execute_action(&mut self, action: Action) -> bool {
        match action {
            Action::FocusNext => self.move_focus(LoginForm::focus_next),
            Action::FocusPrev => self.move_focus(LoginForm::focus_prev),
            Action::EndEditing => self.login.form_mut().end_editing(),

            Action::InsertChar(c) => self.edit_focused(|form, id| form.insert_char(id, c)),
            Action::DeleteChar => self.edit_focused(LoginForm::delete_char),
            Action::DeleteCharForward => self.edit_focused(LoginForm::delete_char_forward),
            Action::CursorLeft => self.edit_focused(LoginForm::cursor_left),
            Action::CursorRight => self.edit_focused(LoginForm::cursor_right),
            Action::CursorHome => self.edit_focused(LoginForm::cursor_home),
            Action::CursorEnd => self.edit_focused(LoginForm::cursor_end),
            Action::ClearField => self.clear_focused(),

            Action::ToggleSecureVisibility => self.toggle_secure_visibility(),

            Action::Submit => self.submit(),
            Action::Back => return self.go_back(),

            Action::ToggleLogs => self.toggle_logs(),
            Action::ScrollUp => {
                let max = self.activity.len().saturating_sub(1);
                self.logs_state.scroll_up(1, max);
                self.request_repaint();
            }
            Action::ScrollDown => {
                self.logs_state.scroll_down(1);
                self.request_repaint();
            }

            Action::Quit => return true,
            Action::None => {}
        }

        false
    }

    fn focused_field(&self) -> Option<FieldId> {
        self.login.form().focused()
    }

    fn move_focus(&mut self, op: fn(&mut LoginForm)) {
        op(&mut *self.login.form_mut());
        if let Some(id) = self.focused_field() {
            self.activity.record(ActivityAction::Focus, Some(id.as_str()));
        }
    }

    fn edit_focused(&mut self, op: impl FnOnce(&mut LoginForm, FieldId)) {
        let mut form = self.login.form_mut();
        if let Some(id) = form.focused() {
            op(&mut *form, id);
        }
    }

    fn clear_focused(&mut self) {
        let Some(id) = self.focused_field() else { return };
        self.login.form_mut().tap_clear_control(id);
        self.activity.record(ActivityAction::ClearField, Some(id.as_str()));
    }

    fn toggle_secure_visibility(&mut self) {
        let Some(id) = self.focused_field() else { return };
        self.login.form_mut().toggle_secure_visibility(id);

        let (secure, visible) = {
            let form = self.login.form();
            let field = form.field(id);
            (field.is_secure(), field.secure_visible())
        };
        if secure {
            let action = if visible { ActivityAction::Reveal } else { ActivityAction::Conceal };
            self.activity.record(action, Some(id.as_str()));
        }
    }

    fn submit(&mut self) {
        if self.navigator.current() != Route::Login {
            return;
        }

        // Return key on the identifier moves on to the secret
        if self.focused_field() == Some(FieldId::Identifier) {
            self.move_focus(LoginForm::focus_next);
            return;
        }

        let credentials = self.login.form().submit();
        let Some(credentials) = credentials else {
            self.activity.record(ActivityAction::SubmitIgnored, None);
            self.set_message("Enter both your ID and password", MessageType::Warning);
            return;
        };

        self.login.form_mut().end_editing();
        self.activity.record(ActivityAction::Submit, Some(&credentials.identifier));
        self.set_message(&format!("Signed in as {}", credentials.identifier), MessageType::Success);
        self.welcome = Some(WelcomeScreen::new(
            credentials.identifier,
            ResetLink::to(&self.login),
        ));
        self.navigate(Navigation::Push(Route::Welcome));
    }

    fn go_back(&mut self) -> bool {
        let navigation = match (self.navigator.current(), self.welcome.as_ref()) {
            (Route::Welcome, Some(welcome)) => {
                let (navigation, outcome) = welcome.go_back();
                match outcome {
                    ResetOutcome::Delivered => {
                        self.activity.record(ActivityAction::ResetDelivered, None);
                        self.set_message("Login fields cleared", MessageType::Info);
                    }
                    ResetOutcome::Skipped => self.activity.record(ActivityAction::ResetSkipped, None),
                }
                navigation
            }
            _ => Navigation::Pop,
        };
        self.navigate(navigation)
    }

    fn navigate(&mut self, navigation: Navigation) -> bool {
        match self.navigator.apply(navigation) {
            NavOutcome::Exit => {
                self.activity.record(ActivityAction::Navigate, Some("exit"));
                true
            }
            NavOutcome::Shown(route) => {
                if route == Route::Login {
                    self.welcome = None;
                }
                self.activity.record(ActivityAction::Navigate, Some(route.indicator()));
                self.request_repaint();
                false
            }
            NavOutcome::Stayed => false,
        }
    }

    fn toggle_logs(&mut self) {
        self.logs_open = !self.logs_open;
        self.logs_state.home();
        self.request_repaint();
    }
}
