use crate::catalog::{
    Choice, ImageFormat, ImageSize, InteractionStyle, PhotoMode, Setting, VideoFormat,
    VideoResolution, VideoStandard, WhiteBalance,
};
use crate::error::{MenuError, MenuResult};

/// Camera configuration instruction handed to a device session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetPhotoMode(PhotoMode),
    SetImageSize(ImageSize),
    SetImageFormat(ImageFormat),
    SetWhiteBalance(WhiteBalance),
    SetVideoResolution(VideoResolution),
    SetVideoFormat(VideoFormat),
    SetVideoStandard(VideoStandard),
}

impl Command {
    /// The setting this command configures
    pub fn setting(&self) -> Setting {
        match self {
            Command::SetPhotoMode(_) => Setting::PhotoMode,
            Command::SetImageSize(_) => Setting::ImageSize,
            Command::SetImageFormat(_) => Setting::ImageFormat,
            Command::SetWhiteBalance(_) => Setting::WhiteBalance,
            Command::SetVideoResolution(_) => Setting::VideoSize,
            Command::SetVideoFormat(_) => Setting::VideoFormat,
            Command::SetVideoStandard(_) => Setting::VideoStandard,
        }
    }

    /// The option value carried by this command
    pub fn choice(&self) -> Choice {
        match *self {
            Command::SetPhotoMode(v) => Choice::PhotoMode(v),
            Command::SetImageSize(v) => Choice::ImageSize(v),
            Command::SetImageFormat(v) => Choice::ImageFormat(v),
            Command::SetWhiteBalance(v) => Choice::WhiteBalance(v),
            Command::SetVideoResolution(v) => Choice::VideoSize(v),
            Command::SetVideoFormat(v) => Choice::VideoFormat(v),
            Command::SetVideoStandard(v) => Choice::VideoStandard(v),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "set {} = {}", self.setting().id(), self.choice().id())
    }
}

/// Build the command for choosing `choice` in `setting`'s option list
///
/// Unknown sentinel values are passed through unchanged; whether the device
/// accepts them is the session's business.
pub fn build_command(setting: Setting, choice: Choice) -> MenuResult<Command> {
    if setting.interaction_style() != InteractionStyle::ChooseOne {
        return Err(MenuError::NotChooseOne(setting));
    }
    match (setting, choice) {
        (Setting::PhotoMode, Choice::PhotoMode(v)) => Ok(Command::SetPhotoMode(v)),
        (Setting::ImageSize, Choice::ImageSize(v)) => Ok(Command::SetImageSize(v)),
        (Setting::ImageFormat, Choice::ImageFormat(v)) => Ok(Command::SetImageFormat(v)),
        (Setting::WhiteBalance, Choice::WhiteBalance(v)) => Ok(Command::SetWhiteBalance(v)),
        (Setting::VideoSize, Choice::VideoSize(v)) => Ok(Command::SetVideoResolution(v)),
        (Setting::VideoFormat, Choice::VideoFormat(v)) => Ok(Command::SetVideoFormat(v)),
        (Setting::VideoStandard, Choice::VideoStandard(v)) => Ok(Command::SetVideoStandard(v)),
        _ => Err(MenuError::InvalidPairing { setting, choice }),
    }
}
