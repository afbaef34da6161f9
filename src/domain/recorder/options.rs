//! Recorder options value object

use serde::Deserialize;
use serde_json::Value;

use crate::domain::recorder::settings::{
    AudioFormat, AudioQuality, RecorderSettings, DEFAULT_BITRATE, DEFAULT_CHANNELS,
    DEFAULT_SAMPLE_RATE,
};

/// Recorder options as supplied by the scripting layer.
/// All fields are optional to support partial option mappings and merging;
/// keys are camelCase on the wire. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecorderOptions {
    pub format: Option<String>,
    pub quality: Option<String>,
    pub sample_rate: Option<u32>,
    pub channels: Option<u16>,
    pub bitrate: Option<u32>,
    pub metering_enabled: Option<bool>,
}

impl RecorderOptions {
    /// Create an empty options mapping (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decode a raw options mapping handed across the plugin boundary.
    ///
    /// Field-wise and lenient: unknown keys are skipped, and a value of the
    /// wrong shape is treated the same as an absent one. Non-object input
    /// yields the empty options. This never fails; the caller always gets
    /// something `resolve` can fill in with defaults.
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::empty();
        };

        Self {
            format: map.get("format").and_then(Value::as_str).map(str::to_owned),
            quality: map
                .get("quality")
                .and_then(Value::as_str)
                .map(str::to_owned),
            sample_rate: map
                .get("sampleRate")
                .and_then(Value::as_u64)
                .and_then(|v| u32::try_from(v).ok()),
            channels: map
                .get("channels")
                .and_then(Value::as_u64)
                .and_then(|v| u16::try_from(v).ok()),
            bitrate: map
                .get("bitrate")
                .and_then(Value::as_u64)
                .and_then(|v| u32::try_from(v).ok()),
            metering_enabled: map.get("meteringEnabled").and_then(Value::as_bool),
        }
    }

    /// Merge this options mapping with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            format: other.format.or(self.format),
            quality: other.quality.or(self.quality),
            sample_rate: other.sample_rate.or(self.sample_rate),
            channels: other.channels.or(self.channels),
            bitrate: other.bitrate.or(self.bitrate),
            metering_enabled: other.metering_enabled.or(self.metering_enabled),
        }
    }

    /// Get format as parsed AudioFormat, or the default if not set/unrecognized
    pub fn format_or_default(&self) -> AudioFormat {
        self.format
            .as_deref()
            .and_then(AudioFormat::parse)
            .unwrap_or_default()
    }

    /// Get quality as parsed AudioQuality, or the default if not set/unrecognized
    pub fn quality_or_default(&self) -> AudioQuality {
        self.quality
            .as_deref()
            .and_then(AudioQuality::parse)
            .unwrap_or_default()
    }

    /// Get sample rate, or 44100 Hz if not set
    pub fn sample_rate_or_default(&self) -> u32 {
        self.sample_rate.unwrap_or(DEFAULT_SAMPLE_RATE)
    }

    /// Get channel count, or 2 if not set
    pub fn channels_or_default(&self) -> u16 {
        self.channels.unwrap_or(DEFAULT_CHANNELS)
    }

    /// Get bit rate, or 128000 bit/s if not set
    pub fn bitrate_or_default(&self) -> u32 {
        self.bitrate.unwrap_or(DEFAULT_BITRATE)
    }

    /// Get metering flag, or false if not set
    pub fn metering_enabled_or_default(&self) -> bool {
        self.metering_enabled.unwrap_or(false)
    }

    /// Resolve into a fully-populated settings mapping, substituting the
    /// documented default for every missing or unrecognized option.
    pub fn resolve(&self) -> RecorderSettings {
        RecorderSettings {
            format: self.format_or_default(),
            quality: self.quality_or_default(),
            sample_rate: self.sample_rate_or_default(),
            channels: self.channels_or_default(),
            bitrate: self.bitrate_or_default(),
            metering_enabled: self.metering_enabled_or_default(),
        }
    }
}
