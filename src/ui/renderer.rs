//! Renderer
//!
//! Main rendering logic for the application.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    Frame,
};

use super::components::{
    ActivityPopup, HelpBar, LoginView, LogsState, MessageType, StatusLine, WelcomeView,
};
use crate::activity::ActivityLog;
use crate::app::ScreenText;
use crate::form::LoginForm;
use crate::nav::Route;
use crate::screens::WelcomeScreen;

pub const MINT_500: u32 = 0x2AC1BC;
pub const GRAY_300: u32 = 0xBDBDBD;
pub const GRAY_700: u32 = 0x7A7A7A;

pub struct UiState<'a> {
    pub route: Route,
    pub form: &'a LoginForm,
    pub welcome: Option<&'a WelcomeScreen>,
    pub text: &'a ScreenText,
    pub mask: char,
    pub message: Option<(&'a str, MessageType)>,
    pub activity: &'a ActivityLog,
    pub logs_state: &'a LogsState,
    pub logs_open: bool,
}

pub struct Renderer;

impl Renderer {
    pub fn hex_color(rgb: u32) -> Color {
        Color::Rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    pub fn render(frame: &mut Frame, state: &UiState) {
        let size = frame.area();
        let chunks = create_main_layout(size);

        render_content(frame, chunks[0], state);
        render_status_line(frame, chunks[1], state);
        render_help_bar(frame, chunks[2], state);
        render_logs_overlay(frame, size, state);
    }
}

fn create_main_layout(size: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size)
}

fn render_content(frame: &mut Frame, area: Rect, state: &UiState) {
    match (state.route, state.welcome) {
        (Route::Welcome, Some(welcome)) => {
            frame.render_widget(WelcomeView::new(welcome, state.text), area);
        }
        _ => frame.render_widget(LoginView::new(state.form, state.text).mask(state.mask), area),
    }
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &UiState) {
    let mut status = StatusLine::new(state.route);

    if let Some((msg, msg_type)) = state.message {
        status = status.message(msg, msg_type);
    }

    if state.route == Route::Login {
        status = status.submit_enabled(state.form.is_submit_enabled());
    }

    frame.render_widget(status, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, state: &UiState) {
    let editing = state.form.focused().is_some();
    frame.render_widget(HelpBar::for_context(state.route, editing, state.logs_open), area);
}

fn render_logs_overlay(frame: &mut Frame, area: Rect, state: &UiState) {
    if !state.logs_open {
        return;
    }
    frame.render_widget(ActivityPopup::new(state.activity, state.logs_state), area);
}
