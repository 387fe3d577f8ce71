//! Screens
//!
//! Login and welcome screen controllers.

use std::cell::{Ref, RefCell, RefMut};

use crate::form::{LoginForm, ResetLink, ResetOutcome, ResetSignal};
use crate::nav::Navigation;

/// Login screen, owner of the login form for its whole lifetime
pub struct LoginScreen {
    form: RefCell<LoginForm>,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new(LoginForm::default())
    }
}

impl LoginScreen {
    pub fn new(form: LoginForm) -> Self {
        Self { form: RefCell::new(form) }
    }

    pub fn form(&self) -> Ref<'_, LoginForm> {
        self.form.borrow()
    }

    pub fn form_mut(&self) -> RefMut<'_, LoginForm> {
        self.form.borrow_mut()
    }
}

impl ResetSignal for LoginScreen {
    /// Ignored while the form is already borrowed, e.g. from inside a form listener
    fn signal_reset(&self) {
        if let Ok(mut form) = self.form.try_borrow_mut() {
            form.reset();
        }
    }
}

/// Welcome screen shown after an accepted login
#[derive(Debug)]
pub struct WelcomeScreen {
    identifier: String,
    link: ResetLink,
}

impl WelcomeScreen {
    pub fn new(identifier: impl Into<String>, link: ResetLink) -> Self {
        Self {
            identifier: identifier.into(),
            link,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn greeting(&self) -> String {
        format!("{}, nice to see you", self.identifier)
    }

    /// Signal the login screen, then ask to pop back to it
    pub fn go_back(&self) -> (Navigation, ResetOutcome) {
        let outcome = self.link.signal();
        (Navigation::Pop, outcome)
    }
}
