use crate::command::Command;

/// Side effects requested by the reducer, executed by the runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Hand the command to the device session
    Submit(Command),
}

impl Effect {
    pub fn command(&self) -> Option<Command> {
        match self {
            Effect::None => None,
            Effect::Submit(command) => Some(*command),
        }
    }
}
