/// String resources for menu labels
///
/// Labels are looked up by stable keys produced by `crate::formatting`.
/// The built-in table carries English text; the config file may override any
/// key through its `[strings]` table.
use std::collections::HashMap;

use phf::phf_map;
use tracing::warn;

/// Resolves a string-resource key into display text
pub trait StringResources {
    fn resolve(&self, key: &str) -> String;
}

static ENGLISH: phf::Map<&'static str, &'static str> = phf_map! {
    "tab.photo" => "Photo",
    "tab.video" => "Video",
    "tab.general" => "General",

    "setting.photo_mode" => "Photo Mode",
    "setting.image_size" => "Image Size",
    "setting.image_format" => "Image Format",
    "setting.white_balance" => "White Balance",
    "setting.video_size" => "Video Size",
    "setting.video_format" => "Video Format",
    "setting.video_standard" => "Video Standard",

    "photo_mode.single" => "Single Shot",
    "photo_mode.hdr" => "HDR",
    "photo_mode.burst" => "Burst",
    "photo_mode.aeb" => "AEB",
    "photo_mode.interval" => "Interval",
    "photo_mode.panorama" => "Panorama",
    "photo_mode.unknown" => "Unknown",

    "image_size.4x3" => "4:3",
    "image_size.16x9" => "16:9",
    "image_size.3x2" => "3:2",
    "image_size.unknown" => "Unknown",

    "image_format.raw" => "RAW",
    "image_format.jpeg" => "JPEG",
    "image_format.raw_and_jpeg" => "RAW + JPEG",
    "image_format.unknown" => "Unknown",

    "white_balance.auto" => "Auto",
    "white_balance.sunny" => "Sunny",
    "white_balance.cloudy" => "Cloudy",
    "white_balance.water_surface" => "Water Surface",
    "white_balance.indoor_incandescent" => "Incandescent",
    "white_balance.indoor_fluorescent" => "Fluorescent",
    "white_balance.custom" => "Custom",
    "white_balance.unknown" => "Unknown",

    "video_size.1280x720" => "1280x720",
    "video_size.1920x1080" => "1920x1080",
    "video_size.2704x1520" => "2704x1520",
    "video_size.3840x2160" => "3840x2160",
    "video_size.4096x2160" => "4096x2160",
    "video_size.unknown" => "Unknown",

    "video_format.mov" => "MOV",
    "video_format.mp4" => "MP4",
    "video_format.unknown" => "Unknown",

    "video_standard.pal" => "PAL",
    "video_standard.ntsc" => "NTSC",
    "video_standard.unknown" => "Unknown",

    "ui.empty_list" => "No settings",
    "ui.back_hint" => "Esc: back",
};

/// Built-in English strings layered under user overrides
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    overrides: HashMap<String, String>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    /// True if the built-in table has an entry for `key`
    pub fn has_builtin(key: &str) -> bool {
        ENGLISH.contains_key(key)
    }
}

impl StringResources for StringTable {
    fn resolve(&self, key: &str) -> String {
        if let Some(text) = self.overrides.get(key) {
            return text.clone();
        }
        match ENGLISH.get(key) {
            Some(text) => text.to_string(),
            None => {
                warn!("STRINGS: Missing string resource: {}", key);
                key.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_builtin() {
        let table = StringTable::new();
        assert_eq!(table.resolve("setting.white_balance"), "White Balance");
        assert_eq!(table.resolve("image_format.raw_and_jpeg"), "RAW + JPEG");
    }

    #[test]
    fn test_override_wins() {
        let mut overrides = HashMap::new();
        overrides.insert("setting.white_balance".to_string(), "Balance des blancs".to_string());
        let table = StringTable::with_overrides(overrides);

        assert_eq!(table.resolve("setting.white_balance"), "Balance des blancs");
        assert_eq!(table.resolve("setting.photo_mode"), "Photo Mode");
    }

    #[test]
    fn test_missing_key_resolves_to_itself() {
        let table = StringTable::new();
        assert_eq!(table.resolve("setting.iso"), "setting.iso");
    }
}
