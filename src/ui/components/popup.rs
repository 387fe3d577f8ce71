//! Popup Components
//!
//! Centering helpers and the activity log overlay.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use crate::activity::{ActivityAction, ActivityLog};

/// Fixed size centered rectangle
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Scroll state of the activity popup, counted in lines from the newest entry
#[derive(Debug, Default)]
pub struct LogsState {
    pub scroll: usize,
}

impl LogsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_up(&mut self, amount: usize, max: usize) {
        self.scroll = (self.scroll + amount).min(max);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll = self.scroll.saturating_sub(amount);
    }

    pub fn home(&mut self) {
        self.scroll = 0;
    }
}

/// Activity log overlay, newest entries at the bottom
pub struct ActivityPopup<'a> {
    log: &'a ActivityLog,
    state: &'a LogsState,
}

impl<'a> ActivityPopup<'a> {
    pub fn new(log: &'a ActivityLog, state: &'a LogsState) -> Self {
        Self { log, state }
    }
}

fn action_color(action: ActivityAction) -> Color {
    match action {
        ActivityAction::Submit | ActivityAction::ResetDelivered => Color::Green,
        ActivityAction::SubmitIgnored | ActivityAction::ResetSkipped => Color::Yellow,
        ActivityAction::Reveal | ActivityAction::Conceal | ActivityAction::ClearField => Color::Cyan,
        ActivityAction::Config => Color::Red,
        _ => Color::Gray,
    }
}

impl Widget for ActivityPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width.saturating_sub(8).clamp(20, 90);
        let height = area.height.saturating_sub(4).clamp(5, 24);
        let popup_area = centered_rect_fixed(width, height, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .title(" Activity ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        if self.log.is_empty() {
            buf.set_string(inner.x, inner.y, "No activity yet", Style::default().fg(Color::DarkGray));
            return;
        }

        let rows = inner.height as usize;
        let entries: Vec<_> = self.log.entries().rev().skip(self.state.scroll).take(rows).collect();
        let top = inner.y + (rows - entries.len()) as u16;

        for (i, entry) in entries.iter().rev().enumerate() {
            let style = Style::default().fg(action_color(entry.action));
            let style = if i + 1 == entries.len() && self.state.scroll == 0 {
                style.add_modifier(Modifier::BOLD)
            } else {
                style
            };
            let line: String = entry.line().chars().take(inner.width as usize).collect();
            buf.set_string(inner.x, top + i as u16, &line, style);
        }
    }
}
