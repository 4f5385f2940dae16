/// Device session abstraction, implemented by real camera links and the recording session
use thiserror::Error;
use tracing::{info, warn};

use crate::command::Command;

/// Failure of the device session to apply a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("camera is not connected")]
    Disconnected,

    #[error("camera refused `{command}`: {reason}")]
    Rejected { command: Command, reason: String },
}

/// Anything that can apply camera commands
pub trait Session {
    /// Apply one command to the connected camera
    fn submit(&mut self, command: Command) -> Result<(), SessionError>;
}

impl<S: Session + ?Sized> Session for Box<S> {
    fn submit(&mut self, command: Command) -> Result<(), SessionError> {
        (**self).submit(command)
    }
}

/// Session that records commands instead of talking to a camera
///
/// Used by the terminal front-end and by tests. It can be told to fail
/// submissions to exercise error reporting.
#[derive(Debug, Default)]
pub struct RecordingSession {
    submitted: Vec<Command>,
    failure: Option<SessionError>,
}

impl RecordingSession {
    pub fn new() -> Self {
        info!("Creating RecordingSession");
        Self::default()
    }

    /// Make every following submission fail with `error`
    pub fn failing_with(error: SessionError) -> Self {
        Self {
            submitted: Vec::new(),
            failure: Some(error),
        }
    }

    pub fn set_failure(&mut self, failure: Option<SessionError>) {
        self.failure = failure;
    }

    /// Commands accepted so far, oldest first
    pub fn submitted(&self) -> &[Command] {
        &self.submitted
    }
}

impl Session for RecordingSession {
    fn submit(&mut self, command: Command) -> Result<(), SessionError> {
        if let Some(error) = &self.failure {
            warn!("RecordingSession: refusing {}: {}", command, error);
            return Err(error.clone());
        }
        info!("RecordingSession: {}", command);
        self.submitted.push(command);
        Ok(())
    }
}
