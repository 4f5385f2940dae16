/// Keyboard event to input mapping
///
/// This module converts crossterm KeyEvents into menu inputs. Tab keys map
/// straight onto navigation actions; list keys (cursor, Enter, Esc) are
/// resolved against the visible list adapter by the app.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::action::Action;
use super::state::NavigationState;
use crate::catalog::Tab;

/// What a key press asks the menu to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Navigate(Action),
    CursorUp,
    CursorDown,
    /// Tap the row under the cursor
    Activate,
    /// Back control of the visible list
    Back,
    Quit,
}

/// Handle direct tab switching via number keys (1-3)
fn handle_number_keys(key_code: KeyCode) -> Option<Input> {
    let tab = match key_code {
        KeyCode::Char('1') => Tab::Photo,
        KeyCode::Char('2') => Tab::Video,
        KeyCode::Char('3') => Tab::General,
        _ => return None,
    };
    Some(Input::Navigate(Action::SelectTab(tab)))
}

pub fn key_to_input(key: KeyEvent, state: &NavigationState) -> Option<Input> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Input::Quit);
    }

    if let Some(input) = handle_number_keys(key.code) {
        return Some(input);
    }

    let input = match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Input::Quit,
        KeyCode::Left => Input::Navigate(Action::SelectTab(state.active_tab.previous())),
        KeyCode::Right | KeyCode::Tab => {
            Input::Navigate(Action::SelectTab(state.active_tab.next()))
        }
        KeyCode::Up | KeyCode::Char('k') => Input::CursorUp,
        KeyCode::Down | KeyCode::Char('j') => Input::CursorDown,
        KeyCode::Enter | KeyCode::Char(' ') => Input::Activate,
        KeyCode::Esc | KeyCode::Backspace => Input::Back,
        _ => {
            debug!("KEY: Unhandled key {:?}", key.code);
            return None;
        }
    };
    Some(input)
}
