//! Login Screen Component
//!
//! Title, the two floating fields, the submit button and the account link.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::field::FloatingField;
use super::popup::centered_rect_fixed;
use crate::app::ScreenText;
use crate::form::{FieldId, LoginForm};
use crate::ui::renderer::{Renderer, GRAY_300, GRAY_700, MINT_500};

const PANEL_WIDTH: u16 = 48;
const PANEL_HEIGHT: u16 = 15;

pub struct LoginView<'a> {
    form: &'a LoginForm,
    text: &'a ScreenText,
    mask: char,
}

impl<'a> LoginView<'a> {
    pub fn new(form: &'a LoginForm, text: &'a ScreenText) -> Self {
        Self { form, text, mask: '•' }
    }

    pub fn mask(mut self, mask: char) -> Self {
        self.mask = mask;
        self
    }
}

/// Submit button, tinted by enablement
pub struct SubmitButton<'a> {
    label: &'a str,
    enabled: bool,
}

impl<'a> SubmitButton<'a> {
    pub fn new(label: &'a str, enabled: bool) -> Self {
        Self { label, enabled }
    }
}

impl Widget for SubmitButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg = if self.enabled {
            Renderer::hex_color(MINT_500)
        } else {
            Renderer::hex_color(GRAY_300)
        };
        let style = Style::default().fg(Color::White).bg(bg).add_modifier(Modifier::BOLD);
        buf.set_style(area, style);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(bg).bg(bg));
        Paragraph::new(self.label)
            .alignment(Alignment::Center)
            .style(style)
            .block(block)
            .render(area, buf);
    }
}

impl Widget for LoginView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panel = centered_rect_fixed(PANEL_WIDTH, PANEL_HEIGHT, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(panel);

        Paragraph::new(self.text.login_title.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .render(rows[0], buf);

        FloatingField::new(self.form.field(FieldId::Identifier), &self.text.identifier_label)
            .mask(self.mask)
            .render(rows[2], buf);
        FloatingField::new(self.form.field(FieldId::Secret), &self.text.secret_label)
            .mask(self.mask)
            .render(rows[4], buf);

        SubmitButton::new(&self.text.submit_label, self.form.is_submit_enabled()).render(rows[6], buf);

        Paragraph::new(self.text.find_account_label.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Renderer::hex_color(GRAY_700)))
            .render(rows[8], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen_text(buf: &Buffer) -> String {
        buf.content.iter().map(|c| c.symbol()).collect()
    }

    fn button_bg(enabled: bool) -> Option<Color> {
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        SubmitButton::new("Log in", enabled).render(area, &mut buf);
        buf.cell((10, 1)).map(|c| c.bg)
    }

    #[test]
    fn test_button_tint_follows_enablement() {
        assert_eq!(button_bg(true), Some(Renderer::hex_color(MINT_500)));
        assert_eq!(button_bg(false), Some(Renderer::hex_color(GRAY_300)));
    }

    #[test]
    fn test_login_view_paints_all_parts() {
        let mut form = LoginForm::default();
        form.set_text(FieldId::Identifier, "a@b.com");
        form.set_text(FieldId::Secret, "pw");
        let text = ScreenText::default();

        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        LoginView::new(&form, &text).render(area, &mut buf);

        let painted = screen_text(&buf);
        assert!(painted.contains(&text.login_title));
        assert!(painted.contains("a@b.com"));
        assert!(painted.contains("••"));
        assert!(!painted.contains("pw"));
        assert!(painted.contains(&text.submit_label));
    }
}
