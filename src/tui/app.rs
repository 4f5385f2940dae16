use crossterm::event::KeyEvent;
use tracing::debug;

use super::adapters::ListAdapter;
use super::keys::{key_to_input, Input};
use super::runtime::Runtime;
use super::state::ListCursor;
use crate::session::Session;

/// Whether the event loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Terminal front-end state: the runtime plus the list cursor
pub struct App<S: Session> {
    runtime: Runtime<S>,
    cursor: ListCursor,
}

impl<S: Session> App<S> {
    pub fn new(runtime: Runtime<S>) -> Self {
        Self {
            runtime,
            cursor: ListCursor::default(),
        }
    }

    pub fn runtime(&self) -> &Runtime<S> {
        &self.runtime
    }

    pub fn cursor(&self) -> ListCursor {
        self.cursor
    }

    /// Adapter of the list currently on screen
    pub fn visible_list(&self) -> ListAdapter {
        ListAdapter::for_state(self.runtime.state())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        match key_to_input(key, self.runtime.state()) {
            Some(input) => self.handle_input(input),
            None => Flow::Continue,
        }
    }

    pub fn handle_input(&mut self, input: Input) -> Flow {
        let list = self.visible_list();
        let action = match input {
            Input::Quit => return Flow::Quit,
            Input::CursorUp => {
                self.cursor.move_up();
                return Flow::Continue;
            }
            Input::CursorDown => {
                self.cursor.move_down(list.len());
                return Flow::Continue;
            }
            Input::Navigate(action) => Some(action),
            Input::Activate => list.on_tap(self.cursor.index),
            Input::Back => list.on_back(),
        };

        let Some(action) = action else {
            debug!("APP: {:?} has nothing to act on", input);
            return Flow::Continue;
        };

        let before = *self.runtime.state();
        // Rejections and session failures are already on the status line
        if let Err(e) = self.runtime.dispatch(action) {
            debug!("APP: {:?} failed: {}", action, e);
        }
        if *self.runtime.state() != before {
            self.cursor.reset();
        }
        Flow::Continue
    }
}
