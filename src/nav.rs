//! Navigator
//!
//! Screen stack for the login flow.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Welcome,
}

impl Route {
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Login => "LOGIN",
            Self::Welcome => "WELCOME",
        }
    }
}

/// Navigation request produced by a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Stay,
    Push(Route),
    Pop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Stayed,
    Shown(Route),
    /// Pop requested on the root screen
    Exit,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self { stack: vec![Route::Login] }
    }

    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Login)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn apply(&mut self, navigation: Navigation) -> NavOutcome {
        match navigation {
            Navigation::Stay => NavOutcome::Stayed,
            Navigation::Push(route) => {
                self.stack.push(route);
                NavOutcome::Shown(route)
            }
            Navigation::Pop if self.stack.len() > 1 => {
                self.stack.pop();
                NavOutcome::Shown(self.current())
            }
            Navigation::Pop => NavOutcome::Exit,
        }
    }
}
