//! Application State
//!
//! Ties the login form, screens, navigator and activity log together.

mod actions;
mod config;
mod input;

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use ratatui::Frame;

use crate::activity::{ActivityAction, ActivityLog};
use crate::form::LoginForm;
use crate::nav::Navigator;
use crate::screens::{LoginScreen, WelcomeScreen};
use crate::ui::components::{LogsState, MessageType};
use crate::ui::renderer::{Renderer, UiState};

pub use config::{AppConfig, ConfigError, ScreenText};

const MESSAGE_TTL: Duration = Duration::from_secs(5);

pub struct App {
    pub config: AppConfig,
    pub navigator: Navigator,
    pub login: Rc<LoginScreen>,
    pub welcome: Option<WelcomeScreen>,
    pub activity: ActivityLog,
    pub logs_state: LogsState,
    pub logs_open: bool,
    pub message: Option<(String, MessageType, Instant)>,
    pub should_quit: bool,
    repaint: Rc<Cell<bool>>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let repaint = Rc::new(Cell::new(true));

        let mut form = LoginForm::default();
        let flag = Rc::clone(&repaint);
        form.on_state_changed(move |_| flag.set(true));

        let mut activity = ActivityLog::new(config.activity_log_capacity);
        activity.record(ActivityAction::Start, None);

        Self {
            config,
            navigator: Navigator::new(),
            login: Rc::new(LoginScreen::new(form)),
            welcome: None,
            activity,
            logs_state: LogsState::new(),
            logs_open: false,
            message: None,
            should_quit: false,
            repaint,
        }
    }

    /// Consume the pending repaint request
    pub fn take_repaint(&self) -> bool {
        self.repaint.replace(false)
    }

    pub fn request_repaint(&self) {
        self.repaint.set(true);
    }

    pub fn render(&self, frame: &mut Frame) {
        let form = self.login.form();
        let state = UiState {
            route: self.navigator.current(),
            form: &form,
            welcome: self.welcome.as_ref(),
            text: &self.config.text,
            mask: self.config.mask_char,
            message: self.message.as_ref().map(|(m, t, _)| (m.as_str(), *t)),
            activity: &self.activity,
            logs_state: &self.logs_state,
            logs_open: self.logs_open,
        };

        Renderer::render(frame, &state);
    }

    /// Drop the status message once it has been shown long enough
    pub fn tick(&mut self) {
        let expired = self
            .message
            .as_ref()
            .is_some_and(|(_, _, time)| time.elapsed() > MESSAGE_TTL);

        if expired {
            self.message = None;
            self.request_repaint();
        }
    }

    pub fn set_message(&mut self, msg: &str, msg_type: MessageType) {
        self.message = Some((msg.to_string(), msg_type, Instant::now()));
        self.request_repaint();
    }
}
