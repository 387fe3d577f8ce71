//! Floating Field Component
//!
//! Bordered text input whose label sits inside the box while the field is
//! blurred and empty, and floats into the border otherwise.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::form::FormField;

const CLEAR_GLYPH: &str = "✕";
const EYE_OPEN: &str = "◉";
const EYE_CLOSED: &str = "◌";

pub struct FloatingField<'a> {
    field: &'a FormField,
    label: &'a str,
    mask: char,
}

impl<'a> FloatingField<'a> {
    pub fn new(field: &'a FormField, label: &'a str) -> Self {
        Self { field, label, mask: '•' }
    }

    pub fn mask(mut self, mask: char) -> Self {
        self.mask = mask;
        self
    }

    fn controls(&self) -> String {
        let mut controls = Vec::new();
        if self.field.show_clear_control() {
            controls.push(CLEAR_GLYPH);
        }
        if self.field.is_secure() {
            controls.push(if self.field.secure_visible() { EYE_OPEN } else { EYE_CLOSED });
        }
        controls.join(" ")
    }
}

impl Widget for FloatingField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.field.is_focused() { Color::White } else { Color::DarkGray };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));

        if self.field.should_float_label() {
            block = block.title(Span::styled(
                format!(" {} ", self.label),
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            ));
        }

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let controls = self.controls();
        let controls_width = controls.chars().count() as u16;
        let text_width = inner.width.saturating_sub(controls_width + 1) as usize;

        if self.field.should_float_label() {
            let display = self.field.display_value(self.mask);
            let cursor = self.field.cursor();
            // Scroll so the cursor stays in view
            let skip = (cursor + 1).saturating_sub(text_width);
            let visible: String = display.chars().skip(skip).take(text_width).collect();
            buf.set_string(inner.x, inner.y, &visible, Style::default().fg(Color::White));

            let offset = cursor.checked_sub(skip).filter(|o| *o < text_width);
            if let (true, Some(offset)) = (self.field.is_focused(), offset) {
                let cursor_x = inner.x + offset as u16;
                if let Some(cell) = buf.cell_mut((cursor_x, inner.y)) {
                    cell.set_style(Style::default().bg(Color::White).fg(Color::Black));
                }
            }
        } else {
            buf.set_string(inner.x, inner.y, self.label, Style::default().fg(Color::DarkGray));
        }

        if controls_width > 0 {
            let x = inner.x + inner.width.saturating_sub(controls_width);
            buf.set_string(x, inner.y, &controls, Style::default().fg(Color::Gray));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.x + buf.area.width)
            .filter_map(|x| buf.cell((x, y)))
            .map(|c| c.symbol())
            .collect()
    }

    fn render(field: &FormField) -> Buffer {
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        FloatingField::new(field, "Password").render(area, &mut buf);
        buf
    }

    #[test]
    fn test_label_rests_inside_when_blurred_and_empty() {
        let field = FormField::secret();
        let buf = render(&field);

        assert!(!row_text(&buf, 0).contains("Password"));
        assert!(row_text(&buf, 1).contains("Password"));
        assert!(!row_text(&buf, 1).contains(CLEAR_GLYPH));
    }

    #[test]
    fn test_label_floats_when_focused() {
        let mut field = FormField::secret();
        field.focus();
        let buf = render(&field);

        assert!(row_text(&buf, 0).contains("Password"));
        assert!(!row_text(&buf, 1).contains("Password"));
    }

    #[test]
    fn test_secret_is_masked_until_revealed() {
        let mut field = FormField::secret();
        field.set_text("pw");

        let masked = render(&field);
        assert!(row_text(&masked, 1).contains("••"));
        assert!(!row_text(&masked, 1).contains("pw"));
        assert!(row_text(&masked, 1).contains(CLEAR_GLYPH));
        assert!(row_text(&masked, 1).contains(EYE_CLOSED));

        field.toggle_secure_visibility();
        let revealed = render(&field);
        assert!(row_text(&revealed, 1).contains("pw"));
        assert!(row_text(&revealed, 1).contains(EYE_OPEN));
    }

    #[test]
    fn test_identifier_has_no_eye() {
        let mut field = FormField::identifier();
        field.set_text("a@b.com");
        let buf = render(&field);

        let body = row_text(&buf, 1);
        assert!(body.contains("a@b.com"));
        assert!(!body.contains(EYE_OPEN));
        assert!(!body.contains(EYE_CLOSED));
    }

    #[test]
    fn test_long_value_scrolls_to_cursor() {
        let mut field = FormField::identifier();
        field.focus();
        field.set_text("abcdefghijklmnopqrstuvwxyz0123456789");
        let buf = render(&field);

        let body = row_text(&buf, 1);
        assert!(body.contains("789"));
        assert!(!body.contains("abc"));
    }
}
