use tracing::{debug, trace, warn};

use super::action::Action;
use super::effects::Effect;
use super::reducer::reduce;
use super::state::{NavigationState, StatusLine};
use crate::command::Command;
use crate::error::{MenuError, MenuResult};
use crate::formatting::{label, option_label};
use crate::session::Session;
use crate::strings::StringTable;

/// Result of an accepted action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub state: NavigationState,
    /// Command handed to the session, if the action chose an option
    pub submitted: Option<Command>,
}

/// Menu runtime - owns the navigation state and the device session
///
/// The Runtime is responsible for:
/// - Holding the current `NavigationState`
/// - Dispatching actions through the reducer
/// - Executing the returned effect against the session
/// - Reporting rejections and session failures to the caller and the status line
pub struct Runtime<S: Session> {
    state: NavigationState,
    session: S,
    strings: StringTable,
    status: StatusLine,
}

impl<S: Session> Runtime<S> {
    pub fn new(session: S) -> Self {
        Self::with_state(NavigationState::default(), session)
    }

    pub fn with_state(state: NavigationState, session: S) -> Self {
        Self {
            state,
            session,
            strings: StringTable::new(),
            status: StatusLine::default(),
        }
    }

    /// Use `strings` for labels in status messages
    pub fn with_strings(mut self, strings: StringTable) -> Self {
        self.strings = strings;
        self
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn strings(&self) -> &StringTable {
        &self.strings
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    /// Dispatch an action through the reducer and run its effect
    ///
    /// A rejected action leaves the state untouched. A session failure is
    /// reported after the transition is applied: the options list stays
    /// closed and the caller decides what to do next.
    pub fn dispatch(&mut self, action: Action) -> MenuResult<DispatchOutcome> {
        trace!("ACTION: Dispatching {:?}", action);

        let (new_state, effect) = match reduce(&self.state, &action) {
            Ok(result) => result,
            Err(e) => {
                self.status.set_error_message(e.to_string());
                return Err(e);
            }
        };
        self.state = new_state;

        let submitted = self.execute_effect(effect)?;
        if !action.may_submit() && self.status.is_error {
            self.status.reset();
        }

        Ok(DispatchOutcome {
            state: self.state,
            submitted,
        })
    }

    fn execute_effect(&mut self, effect: Effect) -> MenuResult<Option<Command>> {
        match effect {
            Effect::None => Ok(None),
            Effect::Submit(command) => {
                debug!("EFFECT: Submitting {}", command);
                match self.session.submit(command) {
                    Ok(()) => {
                        let message = format!(
                            "{}: {}",
                            label(command.setting(), &self.strings),
                            option_label(command.choice(), &self.strings)
                        );
                        self.status.set_message(message);
                        Ok(Some(command))
                    }
                    Err(e) => {
                        warn!("EFFECT: Session refused {}: {}", command, e);
                        let error = MenuError::from(e);
                        self.status.set_error_message(error.to_string());
                        Err(error)
                    }
                }
            }
        }
    }
}
