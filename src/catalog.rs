/// Static catalog of camera settings
///
/// This module defines which settings exist, which tab owns each of them,
/// how the user interacts with each one, and the enumerated option domain of
/// every choose-one setting. Everything here is plain data.

/// Top-level tabs of the camera menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Photo,
    Video,
    General,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Photo, Tab::Video, Tab::General];

    /// Position of the tab in the tab bar
    pub fn index(self) -> usize {
        match self {
            Tab::Photo => 0,
            Tab::Video => 1,
            Tab::General => 2,
        }
    }

    pub fn next(self) -> Tab {
        match self {
            Tab::Photo => Tab::Video,
            Tab::Video => Tab::General,
            Tab::General => Tab::Photo,
        }
    }

    pub fn previous(self) -> Tab {
        match self {
            Tab::Photo => Tab::General,
            Tab::Video => Tab::Photo,
            Tab::General => Tab::Video,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Tab::Photo => "photo",
            Tab::Video => "video",
            Tab::General => "general",
        }
    }
}

/// How a setting row reacts when tapped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionStyle {
    /// Opens a list of mutually exclusive options
    ChooseOne,
    /// On/off switch handled by the row itself
    Toggle,
    /// Fire-once action handled by the row itself
    Action,
}

/// A configurable camera parameter category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    PhotoMode,
    ImageSize,
    ImageFormat,
    WhiteBalance,
    VideoSize,
    VideoFormat,
    VideoStandard,
}

const PHOTO_SETTINGS: [Setting; 4] = [
    Setting::PhotoMode,
    Setting::ImageSize,
    Setting::ImageFormat,
    Setting::WhiteBalance,
];

const VIDEO_SETTINGS: [Setting; 3] = [
    Setting::VideoSize,
    Setting::VideoFormat,
    Setting::VideoStandard,
];

const GENERAL_SETTINGS: [Setting; 0] = [];

/// Ordered settings shown in a tab's settings list
pub fn settings_for(tab: Tab) -> &'static [Setting] {
    match tab {
        Tab::Photo => &PHOTO_SETTINGS,
        Tab::Video => &VIDEO_SETTINGS,
        Tab::General => &GENERAL_SETTINGS,
    }
}

/// Ordered options of a choose-one setting (empty for any other style)
pub fn options_for(setting: Setting) -> Vec<Choice> {
    if setting.interaction_style() != InteractionStyle::ChooseOne {
        return Vec::new();
    }
    match setting {
        Setting::PhotoMode => PhotoMode::ALL.map(Choice::PhotoMode).to_vec(),
        Setting::ImageSize => ImageSize::ALL.map(Choice::ImageSize).to_vec(),
        Setting::ImageFormat => ImageFormat::ALL.map(Choice::ImageFormat).to_vec(),
        Setting::WhiteBalance => WhiteBalance::ALL.map(Choice::WhiteBalance).to_vec(),
        Setting::VideoSize => VideoResolution::ALL.map(Choice::VideoSize).to_vec(),
        Setting::VideoFormat => VideoFormat::ALL.map(Choice::VideoFormat).to_vec(),
        Setting::VideoStandard => VideoStandard::ALL.map(Choice::VideoStandard).to_vec(),
    }
}

impl Setting {
    pub const ALL: [Setting; 7] = [
        Setting::PhotoMode,
        Setting::ImageSize,
        Setting::ImageFormat,
        Setting::WhiteBalance,
        Setting::VideoSize,
        Setting::VideoFormat,
        Setting::VideoStandard,
    ];

    pub fn interaction_style(self) -> InteractionStyle {
        match self {
            Setting::PhotoMode
            | Setting::ImageSize
            | Setting::ImageFormat
            | Setting::WhiteBalance
            | Setting::VideoSize
            | Setting::VideoFormat
            | Setting::VideoStandard => InteractionStyle::ChooseOne,
        }
    }

    /// The tab whose settings list contains this setting
    pub fn tab(self) -> Tab {
        match self {
            Setting::PhotoMode
            | Setting::ImageSize
            | Setting::ImageFormat
            | Setting::WhiteBalance => Tab::Photo,
            Setting::VideoSize | Setting::VideoFormat | Setting::VideoStandard => Tab::Video,
        }
    }

    /// Stable identifier, also used for string-resource keys
    pub fn id(self) -> &'static str {
        match self {
            Setting::PhotoMode => "photo_mode",
            Setting::ImageSize => "image_size",
            Setting::ImageFormat => "image_format",
            Setting::WhiteBalance => "white_balance",
            Setting::VideoSize => "video_size",
            Setting::VideoFormat => "video_format",
            Setting::VideoStandard => "video_standard",
        }
    }

    /// Parse a stable identifier (accepts `-` in place of `_`)
    pub fn from_id(id: &str) -> Option<Setting> {
        let normalized = id.trim().to_lowercase().replace('-', "_");
        Setting::ALL.into_iter().find(|s| s.id() == normalized)
    }
}

/// Photo shooting mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhotoMode {
    Single,
    Hdr,
    Burst,
    Aeb,
    Interval,
    Panorama,
    Unknown,
}

impl PhotoMode {
    pub const ALL: [PhotoMode; 7] = [
        PhotoMode::Single,
        PhotoMode::Hdr,
        PhotoMode::Burst,
        PhotoMode::Aeb,
        PhotoMode::Interval,
        PhotoMode::Panorama,
        PhotoMode::Unknown,
    ];

    pub fn id(self) -> &'static str {
        match self {
            PhotoMode::Single => "single",
            PhotoMode::Hdr => "hdr",
            PhotoMode::Burst => "burst",
            PhotoMode::Aeb => "aeb",
            PhotoMode::Interval => "interval",
            PhotoMode::Panorama => "panorama",
            PhotoMode::Unknown => "unknown",
        }
    }
}

/// Photo aspect ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSize {
    Ratio4x3,
    Ratio16x9,
    Ratio3x2,
    Unknown,
}

impl ImageSize {
    pub const ALL: [ImageSize; 4] = [
        ImageSize::Ratio4x3,
        ImageSize::Ratio16x9,
        ImageSize::Ratio3x2,
        ImageSize::Unknown,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ImageSize::Ratio4x3 => "4x3",
            ImageSize::Ratio16x9 => "16x9",
            ImageSize::Ratio3x2 => "3x2",
            ImageSize::Unknown => "unknown",
        }
    }
}

/// Photo file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Raw,
    Jpeg,
    RawAndJpeg,
    Unknown,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 4] = [
        ImageFormat::Raw,
        ImageFormat::Jpeg,
        ImageFormat::RawAndJpeg,
        ImageFormat::Unknown,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ImageFormat::Raw => "raw",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::RawAndJpeg => "raw_and_jpeg",
            ImageFormat::Unknown => "unknown",
        }
    }
}

/// White balance preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WhiteBalance {
    Auto,
    Sunny,
    Cloudy,
    WaterSurface,
    IndoorIncandescent,
    IndoorFluorescent,
    Custom,
    Unknown,
}

impl WhiteBalance {
    pub const ALL: [WhiteBalance; 8] = [
        WhiteBalance::Auto,
        WhiteBalance::Sunny,
        WhiteBalance::Cloudy,
        WhiteBalance::WaterSurface,
        WhiteBalance::IndoorIncandescent,
        WhiteBalance::IndoorFluorescent,
        WhiteBalance::Custom,
        WhiteBalance::Unknown,
    ];

    pub fn id(self) -> &'static str {
        match self {
            WhiteBalance::Auto => "auto",
            WhiteBalance::Sunny => "sunny",
            WhiteBalance::Cloudy => "cloudy",
            WhiteBalance::WaterSurface => "water_surface",
            WhiteBalance::IndoorIncandescent => "indoor_incandescent",
            WhiteBalance::IndoorFluorescent => "indoor_fluorescent",
            WhiteBalance::Custom => "custom",
            WhiteBalance::Unknown => "unknown",
        }
    }
}

/// Video frame size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoResolution {
    R1280x720,
    R1920x1080,
    R2704x1520,
    R3840x2160,
    R4096x2160,
    Unknown,
}

impl VideoResolution {
    pub const ALL: [VideoResolution; 6] = [
        VideoResolution::R1280x720,
        VideoResolution::R1920x1080,
        VideoResolution::R2704x1520,
        VideoResolution::R3840x2160,
        VideoResolution::R4096x2160,
        VideoResolution::Unknown,
    ];

    pub fn id(self) -> &'static str {
        match self {
            VideoResolution::R1280x720 => "1280x720",
            VideoResolution::R1920x1080 => "1920x1080",
            VideoResolution::R2704x1520 => "2704x1520",
            VideoResolution::R3840x2160 => "3840x2160",
            VideoResolution::R4096x2160 => "4096x2160",
            VideoResolution::Unknown => "unknown",
        }
    }
}

/// Video container format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoFormat {
    Mov,
    Mp4,
    Unknown,
}

impl VideoFormat {
    pub const ALL: [VideoFormat; 3] = [VideoFormat::Mov, VideoFormat::Mp4, VideoFormat::Unknown];

    pub fn id(self) -> &'static str {
        match self {
            VideoFormat::Mov => "mov",
            VideoFormat::Mp4 => "mp4",
            VideoFormat::Unknown => "unknown",
        }
    }
}

/// Analog video standard (drives the available frame rates)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoStandard {
    Pal,
    Ntsc,
    Unknown,
}

impl VideoStandard {
    pub const ALL: [VideoStandard; 3] = [
        VideoStandard::Pal,
        VideoStandard::Ntsc,
        VideoStandard::Unknown,
    ];

    pub fn id(self) -> &'static str {
        match self {
            VideoStandard::Pal => "pal",
            VideoStandard::Ntsc => "ntsc",
            VideoStandard::Unknown => "unknown",
        }
    }
}

/// One concrete option value, tagged with the setting whose domain it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    PhotoMode(PhotoMode),
    ImageSize(ImageSize),
    ImageFormat(ImageFormat),
    WhiteBalance(WhiteBalance),
    VideoSize(VideoResolution),
    VideoFormat(VideoFormat),
    VideoStandard(VideoStandard),
}

impl Choice {
    /// The setting whose option list contains this choice
    pub fn setting(self) -> Setting {
        match self {
            Choice::PhotoMode(_) => Setting::PhotoMode,
            Choice::ImageSize(_) => Setting::ImageSize,
            Choice::ImageFormat(_) => Setting::ImageFormat,
            Choice::WhiteBalance(_) => Setting::WhiteBalance,
            Choice::VideoSize(_) => Setting::VideoSize,
            Choice::VideoFormat(_) => Setting::VideoFormat,
            Choice::VideoStandard(_) => Setting::VideoStandard,
        }
    }

    /// Stable identifier of the value within its domain
    pub fn id(self) -> &'static str {
        match self {
            Choice::PhotoMode(v) => v.id(),
            Choice::ImageSize(v) => v.id(),
            Choice::ImageFormat(v) => v.id(),
            Choice::WhiteBalance(v) => v.id(),
            Choice::VideoSize(v) => v.id(),
            Choice::VideoFormat(v) => v.id(),
            Choice::VideoStandard(v) => v.id(),
        }
    }

    /// True for the sentinel standing in for an unrecognized device value
    pub fn is_unknown(self) -> bool {
        self.id() == "unknown"
    }

    /// Look up an option of `setting` by its stable identifier
    pub fn parse(setting: Setting, id: &str) -> Option<Choice> {
        let normalized = id.trim().to_lowercase().replace('-', "_");
        options_for(setting)
            .into_iter()
            .find(|choice| choice.id() == normalized)
    }
}
