/// List presentation adapters
///
/// Stateless projections of the catalog for the two lists of the menu. They
/// are rebuilt from `NavigationState` on every render and translate taps into
/// navigation actions.
use crate::catalog::{options_for, settings_for, Choice, Setting, Tab};
use crate::formatting::{label, option_label};
use crate::strings::StringResources;

use super::action::Action;
use super::state::{NavigationState, RenderSignal};

/// One rendered list row and the action tapping it emits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub label: String,
    pub action: Action,
}

/// Settings list of a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsListAdapter {
    pub tab: Tab,
}

impl SettingsListAdapter {
    pub fn new(tab: Tab) -> Self {
        Self { tab }
    }

    fn settings(&self) -> &'static [Setting] {
        settings_for(self.tab)
    }

    pub fn len(&self) -> usize {
        self.settings().len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings().is_empty()
    }

    pub fn rows(&self, strings: &impl StringResources) -> Vec<ListRow> {
        self.settings()
            .iter()
            .map(|setting| ListRow {
                label: label(*setting, strings),
                action: Action::SelectRow(*setting),
            })
            .collect()
    }

    pub fn on_tap(&self, index: usize) -> Option<Action> {
        self.settings().get(index).map(|setting| Action::SelectRow(*setting))
    }
}

/// Options list of the setting whose options view is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionsListAdapter {
    pub setting: Setting,
}

impl OptionsListAdapter {
    pub fn new(setting: Setting) -> Self {
        Self { setting }
    }

    /// Adapter for the open options view, if any
    pub fn for_state(state: &NavigationState) -> Option<Self> {
        state.options_view.map(Self::new)
    }

    fn options(&self) -> Vec<Choice> {
        options_for(self.setting)
    }

    pub fn len(&self) -> usize {
        self.options().len()
    }

    pub fn is_empty(&self) -> bool {
        self.options().is_empty()
    }

    pub fn title(&self, strings: &impl StringResources) -> String {
        label(self.setting, strings)
    }

    pub fn rows(&self, strings: &impl StringResources) -> Vec<ListRow> {
        self.options()
            .into_iter()
            .map(|choice| ListRow {
                label: option_label(choice, strings),
                action: Action::SelectOption(choice),
            })
            .collect()
    }

    pub fn on_tap(&self, index: usize) -> Option<Action> {
        self.options().get(index).map(|choice| Action::SelectOption(*choice))
    }

    pub fn on_back(&self) -> Action {
        Action::CloseOptions
    }
}

/// Whichever list is currently visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAdapter {
    Settings(SettingsListAdapter),
    Options(OptionsListAdapter),
}

impl ListAdapter {
    pub fn for_state(state: &NavigationState) -> Self {
        match state.render_signal() {
            RenderSignal::ShowSettingsList(tab) => {
                Self::Settings(SettingsListAdapter::new(tab))
            }
            RenderSignal::ShowOptionsList(setting) => {
                Self::Options(OptionsListAdapter::new(setting))
            }
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Settings(adapter) => adapter.len(),
            Self::Options(adapter) => adapter.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Title line shown above the rows (options list only)
    pub fn title(&self, strings: &impl StringResources) -> Option<String> {
        match self {
            Self::Settings(_) => None,
            Self::Options(adapter) => Some(adapter.title(strings)),
        }
    }

    pub fn rows(&self, strings: &impl StringResources) -> Vec<ListRow> {
        match self {
            Self::Settings(adapter) => adapter.rows(strings),
            Self::Options(adapter) => adapter.rows(strings),
        }
    }

    pub fn on_tap(&self, index: usize) -> Option<Action> {
        match self {
            Self::Settings(adapter) => adapter.on_tap(index),
            Self::Options(adapter) => adapter.on_tap(index),
        }
    }

    /// Back control, present only on the options list
    pub fn on_back(&self) -> Option<Action> {
        match self {
            Self::Settings(_) => None,
            Self::Options(adapter) => Some(adapter.on_back()),
        }
    }
}
