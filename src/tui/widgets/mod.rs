/// Widget-based rendering for the camera menu
///
/// Widgets are small, focused pieces that render themselves directly into a
/// ratatui Buffer and can be tested against test buffers.

#[cfg(test)]
pub mod testing;

pub mod menu_list;
pub use menu_list::MenuList;

pub mod status_bar;
pub use status_bar::StatusBar;

pub mod tab_bar;
pub use tab_bar::TabBar;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
};
use crate::config::DisplayConfig;

/// Core trait for renderable widgets
///
/// Widgets render themselves directly to a ratatui Buffer, avoiding string-based
/// intermediate representations.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars, etc.)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}
