use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
};
use unicode_width::UnicodeWidthStr;

use super::app::App;
use super::widgets::{MenuList, RenderableWidget, StatusBar, TabBar};
use crate::config::DisplayConfig;
use crate::session::Session;
use crate::strings::StringResources;

/// Layout constraint for a widget: its preferred height, or the remaining space
fn constraint_for(widget: &impl RenderableWidget) -> Constraint {
    match widget.preferred_height() {
        Some(height) => Constraint::Length(height),
        None => Constraint::Min(0),
    }
}

/// Draw one frame of the menu
///
/// The screen is split into the tab bar, the visible list and the status
/// bar. The tab bar is drawn unfocused while an options list is open.
pub fn render_frame<S: Session>(
    app: &App<S>,
    area: Rect,
    buf: &mut Buffer,
    config: &DisplayConfig,
) {
    let runtime = app.runtime();
    let state = runtime.state();
    let strings = runtime.strings();

    let tab_bar = TabBar::new(state.active_tab, state.options_view.is_none(), strings);
    let list = app.visible_list();
    let title = list.title(strings);
    let has_title = title.is_some();
    let menu = MenuList::from_rows(&list.rows(strings), app.cursor().index)
        .with_title(title)
        .with_empty_text(strings.resolve("ui.empty_list"));
    let status_bar = StatusBar::new(runtime.status());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            constraint_for(&tab_bar),
            constraint_for(&menu),
            constraint_for(&status_bar),
        ])
        .split(area);

    tab_bar.render(chunks[0], buf, config);
    menu.render(chunks[1], buf, config);
    if has_title {
        render_back_hint(chunks[1], buf, &strings.resolve("ui.back_hint"));
    }

    status_bar.render(chunks[2], buf, config);
}

/// Right-aligned hint on the title line of an options list
fn render_back_hint(area: Rect, buf: &mut Buffer, hint: &str) {
    let width = hint.width() as u16;
    if area.height == 0 || width + 2 > area.width {
        return;
    }
    let x = area.right() - width - 1;
    buf.set_string(x, area.y, hint, Style::default().fg(Color::DarkGray));
}
