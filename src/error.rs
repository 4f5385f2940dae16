use thiserror::Error;

use crate::catalog::{Choice, Setting, Tab};
use crate::session::SessionError;

/// Rejections and failures reported by the camera menu
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("option {choice:?} does not belong to setting {setting:?}")]
    InvalidPairing { setting: Setting, choice: Choice },

    /// A row outside the active tab was tapped; a pairing error like
    /// `InvalidPairing`, between a setting and a tab
    #[error("setting {setting:?} is not shown in the {tab:?} tab")]
    SettingNotInTab { setting: Setting, tab: Tab },

    #[error("setting {0:?} does not offer a list of options")]
    NotChooseOne(Setting),

    #[error("options for {0:?} are already open")]
    OptionsViewOpen(Setting),

    #[error("no options list is open")]
    OptionsViewClosed,

    #[error("camera rejected the command: {0}")]
    SessionSubmission(#[from] SessionError),
}

/// Result type for menu operations
pub type MenuResult<T> = Result<T, MenuError>;
