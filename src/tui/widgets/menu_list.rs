/// MenuList widget - renders the settings list or an options list
///
/// Rows are drawn one per line with a selector glyph in front of the cursor
/// row. An options list carries a title (the setting name) underlined above
/// its rows. The list scrolls so the cursor row stays visible.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};
use unicode_width::UnicodeWidthStr;
use crate::config::DisplayConfig;
use crate::tui::adapters::ListRow;
use crate::tui::widgets::RenderableWidget;

/// Left margin before the row label (selector column)
const LABEL_INDENT: u16 = 3;

#[derive(Debug, Clone)]
pub struct MenuList {
    pub title: Option<String>,
    pub rows: Vec<String>,
    pub selected: usize,
    /// Shown in place of rows when the list is empty
    pub empty_text: String,
}

impl MenuList {
    pub fn new(rows: Vec<String>, selected: usize) -> Self {
        Self {
            title: None,
            rows,
            selected,
            empty_text: String::new(),
        }
    }

    pub fn from_rows(rows: &[ListRow], selected: usize) -> Self {
        Self::new(rows.iter().map(|row| row.label.clone()).collect(), selected)
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn with_empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    /// First row index to draw so that `selected` fits in `visible` lines
    fn scroll_offset(&self, visible: usize) -> usize {
        if visible == 0 || self.selected < visible {
            0
        } else {
            self.selected + 1 - visible
        }
    }
}

impl RenderableWidget for MenuList {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width as usize;
        let mut y = area.y;

        if let Some(title) = &self.title {
            let bold = Style::default().add_modifier(Modifier::BOLD);
            buf.set_stringn(area.x + 1, y, title, width.saturating_sub(1), bold);
            y += 1;
            if y < area.bottom() {
                let underline = config.box_chars.horizontal.repeat(title.width());
                let style = Style::default();
                buf.set_stringn(area.x + 1, y, &underline, width.saturating_sub(1), style);
                y += 1;
            }
        }

        if y >= area.bottom() {
            return;
        }

        if self.rows.is_empty() {
            let dim = Style::default().fg(Color::DarkGray);
            buf.set_stringn(
                area.x + LABEL_INDENT,
                y,
                &self.empty_text,
                width.saturating_sub(LABEL_INDENT as usize),
                dim,
            );
            return;
        }

        let visible = (area.bottom() - y) as usize;
        let offset = self.scroll_offset(visible);
        let selected_style = Style::default().fg(config.selection_fg);

        for (index, label) in self.rows.iter().enumerate().skip(offset).take(visible) {
            let style = if index == self.selected {
                let selector = format!(" {} ", config.box_chars.selector);
                buf.set_stringn(area.x, y, &selector, width, selected_style);
                selected_style
            } else {
                Style::default()
            };
            buf.set_stringn(
                area.x + LABEL_INDENT,
                y,
                label,
                width.saturating_sub(LABEL_INDENT as usize),
                style,
            );
            y += 1;
        }
    }
}
