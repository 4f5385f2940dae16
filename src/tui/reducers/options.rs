use tracing::debug;

use crate::catalog::{settings_for, Choice, InteractionStyle, Setting};
use crate::command::build_command;
use crate::error::{MenuError, MenuResult};
use crate::tui::effects::Effect;
use crate::tui::state::NavigationState;

/// Tap a settings-list row
///
/// Choose-one settings open their options list. Toggle and action rows are
/// handled by the row control itself, so they are accepted without a
/// transition.
pub fn reduce_select_row(
    state: &NavigationState,
    setting: Setting,
) -> MenuResult<(NavigationState, Effect)> {
    if let Some(open) = state.options_view {
        return Err(MenuError::OptionsViewOpen(open));
    }
    if !settings_for(state.active_tab).contains(&setting) {
        return Err(MenuError::SettingNotInTab {
            setting,
            tab: state.active_tab,
        });
    }

    match setting.interaction_style() {
        InteractionStyle::ChooseOne => {
            debug!("NAV: Opening options for {:?}", setting);
            let mut new_state = *state;
            new_state.options_view = Some(setting);
            Ok((new_state, Effect::None))
        }
        style => {
            debug!("NAV: {:?} row is {:?}, nothing to open", setting, style);
            Ok((*state, Effect::None))
        }
    }
}

/// Tap an option: build its command and return to the settings list
pub fn reduce_select_option(
    state: &NavigationState,
    choice: Choice,
) -> MenuResult<(NavigationState, Effect)> {
    let setting = state.options_view.ok_or(MenuError::OptionsViewClosed)?;
    let command = build_command(setting, choice)?;
    debug!("NAV: {:?} chosen for {:?}, submitting {}", choice, setting, command);

    let mut new_state = *state;
    new_state.options_view = None;
    Ok((new_state, Effect::Submit(command)))
}

/// Back control of the options list
pub fn reduce_close_options(state: &NavigationState) -> MenuResult<(NavigationState, Effect)> {
    let setting = state.options_view.ok_or(MenuError::OptionsViewClosed)?;
    debug!("NAV: Closing options for {:?}", setting);

    let mut new_state = *state;
    new_state.options_view = None;
    Ok((new_state, Effect::None))
}
