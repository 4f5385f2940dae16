/// StatusBar widget - displays the last status message at the bottom of the screen
///
/// Two lines: a horizontal separator, then the message with a one-column
/// margin. Error messages are drawn in the error color.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use crate::config::DisplayConfig;
use crate::tui::state::StatusLine;
use crate::tui::widgets::RenderableWidget;

#[derive(Debug, Clone)]
pub struct StatusBar {
    pub message: String,
    pub is_error: bool,
}

impl StatusBar {
    pub fn new(status: &StatusLine) -> Self {
        Self {
            message: status.message.clone(),
            is_error: status.is_error,
        }
    }

    fn build_left_text(&self) -> String {
        if self.is_error {
            format!("ERROR: {}", self.message)
        } else {
            self.message.clone()
        }
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        let separator = config.box_chars.horizontal.repeat(area.width as usize);
        buf.set_string(area.x, area.y, &separator, Style::default());

        let style = if self.is_error {
            Style::default().fg(config.error_fg)
        } else {
            Style::default()
        };
        buf.set_stringn(
            area.x + 1,
            area.y + 1,
            self.build_left_text(),
            area.width.saturating_sub(1) as usize,
            style,
        );
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}
