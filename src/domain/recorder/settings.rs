//! Resolved recorder settings and their closed option sets

use serde::Serialize;

/// Default sample rate (44.1 kHz)
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Default channel count (stereo)
pub const DEFAULT_CHANNELS: u16 = 2;

/// Default encoder bit rate (128 kbit/s)
pub const DEFAULT_BITRATE: u32 = 128_000;

/// Supported recording formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    #[default]
    Aac,
    Mp4,
    Ogg,
    Webm,
    Amr,
}

impl AudioFormat {
    /// Get the format identifier used on the scripting side
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Aac => "aac",
            Self::Mp4 => "mp4",
            Self::Ogg => "ogg",
            Self::Webm => "webm",
            Self::Amr => "amr",
        }
    }

    /// Get the canonical file extension
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Aac => "aac",
            Self::Mp4 => "mp4",
            Self::Ogg => "ogg",
            Self::Webm => "webm",
            Self::Amr => "amr",
        }
    }

    /// Parse a scripting-side format string, case-insensitively.
    /// Unrecognized values yield `None` so the caller can substitute the
    /// default instead of failing.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "aac" => Some(Self::Aac),
            "mp4" => Some(Self::Mp4),
            "ogg" => Some(Self::Ogg),
            "webm" => Some(Self::Webm),
            "amr" => Some(Self::Amr),
            _ => None,
        }
    }
}

/// Encoder quality steps, from smallest output to best fidelity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioQuality {
    Min,
    Low,
    #[default]
    Medium,
    High,
    Max,
}

impl AudioQuality {
    /// Get the quality identifier used on the scripting side
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Max => "max",
        }
    }

    /// Numeric encoder quality level handed to the platform recorder
    pub const fn level(&self) -> u8 {
        match self {
            Self::Min => 0,
            Self::Low => 32,
            Self::Medium => 64,
            Self::High => 96,
            Self::Max => 127,
        }
    }

    /// Parse a scripting-side quality string, case-insensitively.
    /// Unrecognized values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "min" => Some(Self::Min),
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "max" => Some(Self::Max),
            _ => None,
        }
    }
}

/// Resolved, platform-ready configuration for a recording session.
/// Every field is populated; missing options have already been replaced by
/// the documented defaults. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecorderSettings {
    pub format: AudioFormat,
    pub quality: AudioQuality,
    pub sample_rate: u32,
    pub channels: u16,
    pub bitrate: u32,
    pub metering_enabled: bool,
}

impl Default for RecorderSettings {
    fn default() -> Self {
        Self {
            format: AudioFormat::default(),
            quality: AudioQuality::default(),
            sample_rate: DEFAULT_SAMPLE_RATE,
            channels: DEFAULT_CHANNELS,
            bitrate: DEFAULT_BITRATE,
            metering_enabled: false,
        }
    }
}
