/// TabBar widget - displays the photo / video / general tabs
///
/// Tabs are displayed with separators on the first line and an underline with
/// connectors below the separators on the second. The active tab is
/// highlighted; the whole bar is dimmed while an options list is open.

use ratatui::{buffer::Buffer, layout::Rect, style::{Color, Style}};
use unicode_width::UnicodeWidthStr;
use crate::catalog::Tab;
use crate::config::DisplayConfig;
use crate::formatting::tab_label;
use crate::strings::StringResources;
use crate::tui::widgets::RenderableWidget;

/// Widget for displaying navigation tabs as a horizontal bar
#[derive(Debug, Clone)]
pub struct TabBar {
    /// Tab labels in tab order
    pub labels: Vec<String>,
    /// Index of the active tab
    pub current_tab: usize,
    /// Whether the tab bar is focused (affects styling)
    pub focused: bool,
}

impl TabBar {
    pub fn new(active_tab: Tab, focused: bool, strings: &impl StringResources) -> Self {
        Self {
            labels: Tab::ALL.iter().map(|tab| tab_label(*tab, strings)).collect(),
            current_tab: active_tab.index(),
            focused,
        }
    }

    fn base_style(&self) -> Style {
        if self.focused {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    fn tab_style(&self, index: usize, config: &DisplayConfig) -> Style {
        let base_style = self.base_style();
        if index != self.current_tab {
            return base_style;
        }
        if self.focused {
            base_style.fg(config.selection_fg)
        } else {
            base_style.fg(config.unfocused_selection_fg())
        }
    }

    /// Build the tab line with separators
    fn build_tab_line(&self, config: &DisplayConfig) -> Vec<(String, Style)> {
        let base_style = self.base_style();
        let separator = format!(" {} ", config.box_chars.vertical);
        let mut segments = Vec::new();

        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                segments.push((separator.clone(), base_style));
            }
            segments.push((label.clone(), self.tab_style(i, config)));
        }

        segments
    }

    /// Build the underline with connectors under the separators
    fn build_separator_line(&self, area_width: usize, config: &DisplayConfig) -> String {
        let horizontal = &config.box_chars.horizontal;
        let mut line = String::new();
        let mut pos = 0;

        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                line.push_str(horizontal);
                line.push_str(&config.box_chars.connector);
                line.push_str(horizontal);
                pos += 3;
            }
            let width = label.width();
            line.push_str(&horizontal.repeat(width));
            pos += width;
        }

        if pos < area_width {
            line.push_str(&horizontal.repeat(area_width - pos));
        }
        line
    }
}

impl RenderableWidget for TabBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if self.labels.is_empty() || area.width == 0 || area.height < 2 {
            return;
        }

        let mut x = area.x;
        for (text, style) in self.build_tab_line(config) {
            if x >= area.right() {
                break;
            }
            buf.set_stringn(x, area.y, &text, (area.right() - x) as usize, style);
            x += text.width() as u16;
        }

        let separator = self.build_separator_line(area.width as usize, config);
        buf.set_stringn(area.x, area.y + 1, &separator, area.width as usize, self.base_style());
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strings::StringTable;
    use crate::tui::testing::assert_buffer;
    use crate::tui::widgets::testing::*;

    #[test]
    fn test_tab_bar_basic_rendering() {
        let widget = TabBar::new(Tab::Photo, true, &StringTable::new());
        let buf = render_widget(&widget, 30, 2);

        assert_buffer(&buf, &[
            "Photo │ Video │ General",
            "──────┴───────┴───────────────",
        ]);
    }

    #[test]
    fn test_tab_bar_ascii() {
        let widget = TabBar::new(Tab::Photo, true, &StringTable::new());
        let buf = render_widget_with_config(&widget, 24, 2, &test_config_ascii());

        assert_buffer(&buf, &[
            "Photo | Video | General",
            "------------------------",
        ]);
    }

    #[test]
    fn test_tab_bar_highlights_active_tab() {
        let widget = TabBar::new(Tab::Video, true, &StringTable::new());
        let buf = render_widget(&widget, 30, 2);

        let line = buffer_line(&buf, 0);
        let video_start = line.find("Video").expect("Should contain Video");
        // Byte offset of "Video" includes the 3-byte separator glyph
        let column = line[..video_start].chars().count() as u16;

        let config = test_config();
        assert_eq!(buf[(column, 0)].fg, config.selection_fg);
        assert_ne!(buf[(0, 0)].fg, config.selection_fg);
    }

    #[test]
    fn test_tab_bar_unfocused() {
        let widget = TabBar::new(Tab::Photo, false, &StringTable::new());
        let buf = render_widget(&widget, 30, 2);

        let config = test_config();
        assert_eq!(buf[(0, 0)].fg, config.unfocused_selection_fg());
    }

    #[test]
    fn test_tab_bar_zero_height() {
        let widget = TabBar::new(Tab::Photo, true, &StringTable::new());
        let buf = render_widget(&widget, 30, 0);
        assert_eq!(buf.area.height, 0);
    }

    #[test]
    fn test_tab_bar_narrow_area() {
        let widget = TabBar::new(Tab::General, true, &StringTable::new());
        let buf = render_widget(&widget, 10, 2);

        assert_buffer(&buf, &[
            "Photo │ Vi",
            "──────┴───",
        ]);
    }
}
