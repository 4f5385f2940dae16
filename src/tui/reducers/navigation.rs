use tracing::{debug, trace};

use crate::catalog::Tab;
use crate::tui::effects::Effect;
use crate::tui::state::NavigationState;

/// Switch tabs, force-closing an open options list first
///
/// Never rejected: the options list belongs to the tab being left, so it is
/// closed without producing a command.
pub fn reduce_select_tab(state: &NavigationState, tab: Tab) -> (NavigationState, Effect) {
    trace!("Navigating to tab: {:?}", tab);
    let mut new_state = *state;
    if let Some(setting) = new_state.options_view.take() {
        debug!("NAV: Closing options for {:?} before switching tab", setting);
    }
    new_state.active_tab = tab;
    (new_state, Effect::None)
}
