use crate::catalog::{Choice, Setting, Tab};
use crate::config::DisplayConfig;
use crate::strings::StringResources;

/// Box-drawing characters for separators and selection markers
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub connector: String,
    pub selector: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            connector: "┴".to_string(),
            selector: "►".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            connector: "-".to_string(),
            selector: ">".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

impl Default for BoxChars {
    fn default() -> Self {
        BoxChars::unicode()
    }
}

/// String-resource key for a tab label
pub fn tab_key(tab: Tab) -> &'static str {
    match tab {
        Tab::Photo => "tab.photo",
        Tab::Video => "tab.video",
        Tab::General => "tab.general",
    }
}

/// String-resource key for a setting label
pub fn setting_key(setting: Setting) -> &'static str {
    match setting {
        Setting::PhotoMode => "setting.photo_mode",
        Setting::ImageSize => "setting.image_size",
        Setting::ImageFormat => "setting.image_format",
        Setting::WhiteBalance => "setting.white_balance",
        Setting::VideoSize => "setting.video_size",
        Setting::VideoFormat => "setting.video_format",
        Setting::VideoStandard => "setting.video_standard",
    }
}

/// String-resource key for an option label, scoped by its setting
pub fn option_key(choice: Choice) -> String {
    format!("{}.{}", choice.setting().id(), choice.id())
}

pub fn tab_label(tab: Tab, strings: &impl StringResources) -> String {
    strings.resolve(tab_key(tab))
}

pub fn label(setting: Setting, strings: &impl StringResources) -> String {
    strings.resolve(setting_key(setting))
}

pub fn option_label(choice: Choice, strings: &impl StringResources) -> String {
    strings.resolve(&option_key(choice))
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `display` - Display configuration to determine unicode vs ASCII
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.chars().count()))
}
