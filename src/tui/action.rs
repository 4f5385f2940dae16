use crate::catalog::{Choice, Setting, Tab};

/// Navigation events - like Redux actions
///
/// Every change to `NavigationState` happens through one of these.
/// They are emitted by the list adapters and the key map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Switch the active tab (closes an open options list first)
    SelectTab(Tab),
    /// Tap a row of the active tab's settings list
    SelectRow(Setting),
    /// Tap an option of the open options list
    SelectOption(Choice),
    /// Back control of the options list
    CloseOptions,
}

impl Action {
    /// Returns true if an accepted action of this kind can submit a command
    pub fn may_submit(&self) -> bool {
        matches!(self, Self::SelectOption(_))
    }
}
