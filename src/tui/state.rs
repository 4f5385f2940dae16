use crate::catalog::{settings_for, Setting, Tab};

/// Which tab is active and whether an options list covers its settings list
///
/// This is the only mutable state of the menu. It is replaced wholesale by
/// the reducer on every accepted transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub active_tab: Tab,
    /// Setting whose options are shown (None = settings list visible)
    pub options_view: Option<Setting>,
}

impl NavigationState {
    pub fn new(active_tab: Tab) -> Self {
        Self {
            active_tab,
            options_view: None,
        }
    }

    /// What the rendering side should currently show
    pub fn render_signal(&self) -> RenderSignal {
        match self.options_view {
            Some(setting) => RenderSignal::ShowOptionsList(setting),
            None => RenderSignal::ShowSettingsList(self.active_tab),
        }
    }

    /// True when the options view, if any, belongs to the active tab
    pub fn is_consistent(&self) -> bool {
        self.options_view
            .map(|setting| settings_for(self.active_tab).contains(&setting))
            .unwrap_or(true)
    }
}

/// Declarative view signal consumed by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderSignal {
    ShowSettingsList(Tab),
    ShowOptionsList(Setting),
}

/// Default help message shown in the status bar
pub const DEFAULT_STATUS_MESSAGE: &str =
    "Keys: ←→ tabs | ↑↓ move | Enter select | Esc back | 1-3 jump to tab | q quit";

/// Status line text and whether it reports an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
    pub is_error: bool,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: DEFAULT_STATUS_MESSAGE.to_string(),
            is_error: false,
        }
    }
}

impl StatusLine {
    pub fn set_message(&mut self, message: String) {
        self.message = message;
        self.is_error = false;
    }

    pub fn set_error_message(&mut self, message: String) {
        self.message = message;
        self.is_error = true;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Highlighted row of the visible list
///
/// Front-end state only: the navigation reducer never sees it. It is reset
/// whenever the navigation state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListCursor {
    pub index: usize,
}

impl ListCursor {
    pub fn move_up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Move down, staying on the last of `len` rows
    pub fn move_down(&mut self, len: usize) {
        if self.index + 1 < len {
            self.index += 1;
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}
