use tracing::{debug, trace};

use super::action::Action;
use super::effects::Effect;
use super::state::NavigationState;
use crate::error::MenuResult;

use crate::tui::reducers::{
    reduce_close_options, reduce_select_option, reduce_select_row, reduce_select_tab,
};

/// Pure navigation reducer - like Redux reducer
///
/// Takes the current state and an action and returns the next state plus the
/// effect to run. This function is PURE: commands are returned as
/// `Effect::Submit` for the runtime to hand to the session.
///
/// A rejected action returns the error and the caller keeps its current
/// state untouched.
pub fn reduce(state: &NavigationState, action: &Action) -> MenuResult<(NavigationState, Effect)> {
    trace!("REDUCE: {:?} on {:?}", action, state);
    let result = match *action {
        Action::SelectTab(tab) => Ok(reduce_select_tab(state, tab)),
        Action::SelectRow(setting) => reduce_select_row(state, setting),
        Action::SelectOption(choice) => reduce_select_option(state, choice),
        Action::CloseOptions => reduce_close_options(state),
    };
    if let Err(e) = &result {
        debug!("REDUCE: Rejected {:?}: {}", action, e);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        settings_for, Choice, PhotoMode, Setting, Tab, VideoResolution, VideoStandard,
    };
    use crate::command::Command;
    use crate::error::MenuError;

    /// Apply actions in order, panicking on the first rejection
    fn run(actions: &[Action]) -> (NavigationState, Vec<Command>) {
        let mut state = NavigationState::default();
        let mut commands = Vec::new();
        for action in actions {
            let (next, effect) = reduce(&state, action)
                .unwrap_or_else(|e| panic!("{:?} rejected: {}", action, e));
            state = next;
            commands.extend(effect.command());
        }
        (state, commands)
    }

    #[test]
    fn test_photo_mode_round_trip() {
        let (state, commands) = run(&[
            Action::SelectTab(Tab::Photo),
            Action::SelectRow(Setting::PhotoMode),
        ]);
        assert_eq!(state.options_view, Some(Setting::PhotoMode));
        assert!(commands.is_empty());

        let (state, effect) =
            reduce(&state, &Action::SelectOption(Choice::PhotoMode(PhotoMode::Hdr))).unwrap();
        assert_eq!(state.options_view, None);
        assert_eq!(effect, Effect::Submit(Command::SetPhotoMode(PhotoMode::Hdr)));
    }

    #[test]
    fn test_video_size_scenario() {
        let state = NavigationState::default();

        let (state, _) = reduce(&state, &Action::SelectTab(Tab::Video)).unwrap();
        assert_eq!(state, NavigationState::new(Tab::Video));

        let (state, _) = reduce(&state, &Action::SelectRow(Setting::VideoSize)).unwrap();
        assert_eq!(
            state,
            NavigationState {
                active_tab: Tab::Video,
                options_view: Some(Setting::VideoSize)
            }
        );

        let choice = Choice::VideoSize(VideoResolution::R1920x1080);
        let (state, effect) = reduce(&state, &Action::SelectOption(choice)).unwrap();
        assert_eq!(
            effect,
            Effect::Submit(Command::SetVideoResolution(VideoResolution::R1920x1080))
        );
        assert_eq!(state, NavigationState::new(Tab::Video));
    }

    #[test]
    fn test_rejection_leaves_state_unchanged() {
        let state = NavigationState::default();
        let result = reduce(&state, &Action::SelectRow(Setting::VideoStandard));

        assert!(matches!(result, Err(MenuError::SettingNotInTab { .. })));
        assert_eq!(state, NavigationState::default());
    }

    #[test]
    fn test_close_options_twice() {
        let (state, _) = run(&[Action::SelectRow(Setting::ImageSize), Action::CloseOptions]);
        assert_eq!(state, NavigationState::default());

        assert_eq!(reduce(&state, &Action::CloseOptions), Err(MenuError::OptionsViewClosed));
    }

    #[test]
    fn test_tab_switch_with_options_open_auto_closes() {
        let (state, commands) = run(&[
            Action::SelectTab(Tab::Video),
            Action::SelectRow(Setting::VideoStandard),
            Action::SelectTab(Tab::Photo),
        ]);
        assert_eq!(state, NavigationState::new(Tab::Photo));
        assert!(commands.is_empty());

        // The closed setting's options are no longer selectable
        let result = reduce(
            &state,
            &Action::SelectOption(Choice::VideoStandard(VideoStandard::Pal)),
        );
        assert_eq!(result, Err(MenuError::OptionsViewClosed));
    }

    #[test]
    fn test_every_row_of_every_tab_opens_and_closes() {
        for tab in Tab::ALL {
            for setting in settings_for(tab) {
                let (state, _) = run(&[Action::SelectTab(tab), Action::SelectRow(*setting)]);
                assert_eq!(state.options_view, Some(*setting));
                assert!(state.is_consistent());

                let (state, _) = reduce(&state, &Action::CloseOptions).unwrap();
                assert_eq!(state, NavigationState::new(tab));
            }
        }
    }

    #[test]
    fn test_general_tab_rejects_every_row() {
        let (state, _) = run(&[Action::SelectTab(Tab::General)]);
        for setting in Setting::ALL {
            assert!(reduce(&state, &Action::SelectRow(setting)).is_err());
        }
    }
}
