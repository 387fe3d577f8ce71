//! Welcome Screen Component

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Paragraph, Widget, Wrap},
};

use super::login::SubmitButton;
use super::popup::centered_rect_fixed;
use crate::app::ScreenText;
use crate::screens::WelcomeScreen;

pub struct WelcomeView<'a> {
    screen: &'a WelcomeScreen,
    text: &'a ScreenText,
}

impl<'a> WelcomeView<'a> {
    pub fn new(screen: &'a WelcomeScreen, text: &'a ScreenText) -> Self {
        Self { screen, text }
    }
}

impl Widget for WelcomeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panel = centered_rect_fixed(48, area.height, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(3),
            ])
            .split(panel);

        Paragraph::new(self.text.welcome_heading.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .render(rows[0], buf);

        Paragraph::new(self.text.welcome_title.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .render(rows[2], buf);

        Paragraph::new(self.screen.greeting())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD))
            .render(rows[4], buf);

        SubmitButton::new(&self.text.back_label, true).render(rows[6], buf);
    }
}
