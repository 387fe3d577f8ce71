//! Status Line Component
//!
//! Displays the screen indicator, transient messages and the submit state.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::nav::Route;

/// Message type for status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Warning,
}

impl MessageType {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::White,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
        }
    }
}

/// Status line widget
pub struct StatusLine<'a> {
    route: Route,
    message: Option<(&'a str, MessageType)>,
    submit_enabled: Option<bool>,
}

impl<'a> StatusLine<'a> {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            message: None,
            submit_enabled: None,
        }
    }

    pub fn message(mut self, msg: &'a str, msg_type: MessageType) -> Self {
        self.message = Some((msg, msg_type));
        self
    }

    pub fn submit_enabled(mut self, enabled: bool) -> Self {
        self.submit_enabled = Some(enabled);
        self
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(Color::DarkGray));

        let mut x = area.x;

        let mode_style = match self.route {
            Route::Login => Style::default().fg(Color::Black).bg(Color::Blue),
            Route::Welcome => Style::default().fg(Color::Black).bg(Color::Green),
        };

        let mode_text = format!(" {} ", self.route.indicator());
        buf.set_string(x, area.y, &mode_text, mode_style.add_modifier(Modifier::BOLD));
        x += mode_text.len() as u16 + 1;

        if let Some((msg, msg_type)) = self.message {
            buf.set_string(x, area.y, msg, Style::default().fg(msg_type.color()).bg(Color::DarkGray));
        }

        if let Some(enabled) = self.submit_enabled {
            let (text, color) = if enabled {
                ("ready", Color::Green)
            } else {
                ("incomplete", Color::Gray)
            };
            let right_x = area.x + area.width.saturating_sub(text.len() as u16 + 1);
            buf.set_string(right_x, area.y, text, Style::default().fg(color).bg(Color::DarkGray));
        }
    }
}

/// Help bar widget
pub struct HelpBar<'a> {
    hints: Vec<(&'a str, &'a str)>,
}

impl<'a> HelpBar<'a> {
    pub fn new(hints: Vec<(&'a str, &'a str)>) -> Self {
        Self { hints }
    }

    pub fn for_context(route: Route, editing: bool, logs_open: bool) -> Self {
        let hints = match (route, editing, logs_open) {
            (_, _, true) => vec![("Esc", "close"), ("j/k", "scroll")],
            (Route::Login, true, _) => vec![
                ("Tab", "next"),
                ("Enter", "login"),
                ("C-u", "clear"),
                ("C-s", "show pwd"),
                ("Esc", "done"),
            ],
            (Route::Login, false, _) => vec![
                ("Tab", "edit"),
                ("Enter", "login"),
                ("C-l", "activity"),
                ("Esc", "back"),
                ("q", "quit"),
            ],
            (Route::Welcome, _, _) => vec![("Enter", "back"), ("C-l", "activity"), ("q", "quit")],
        };
        Self { hints }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, desc)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)));
            spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
        }
        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
