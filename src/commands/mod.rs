pub mod catalog;
pub mod set;

use anyhow::{anyhow, Result};

use crate::catalog::{options_for, Choice, Setting};

/// Parse a setting identifier given on the command line
///
/// Accepts ids such as `photo_mode` or `white-balance`. Returns an error
/// listing the valid ids if the setting is not known.
pub fn parse_setting(id: &str) -> Result<Setting> {
    Setting::from_id(id).ok_or_else(|| {
        let valid: Vec<&str> = Setting::ALL.iter().map(|s| s.id()).collect();
        anyhow!("Unknown setting '{}'. Valid settings: {}", id, valid.join(", "))
    })
}

/// Parse an option identifier for `setting`
pub fn parse_choice(setting: Setting, id: &str) -> Result<Choice> {
    Choice::parse(setting, id).ok_or_else(|| {
        let valid: Vec<&str> = options_for(setting).iter().map(|c| c.id()).collect();
        anyhow!(
            "Unknown option '{}' for {}. Valid options: {}",
            id,
            setting.id(),
            valid.join(", ")
        )
    })
}
