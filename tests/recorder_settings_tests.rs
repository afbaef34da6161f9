//! Recorder options translation tests
//!
//! Exercises the full bridge-side flow: a raw JSON options mapping in, a
//! resolved settings mapping out.

use audio_toolkit_support::domain::{AudioFormat, AudioQuality, RecorderOptions, RecorderSettings};
use serde_json::json;

#[test]
fn empty_mapping_resolves_to_documented_defaults() {
    let settings = RecorderOptions::from_value(&json!({})).resolve();

    assert_eq!(settings.format, AudioFormat::Aac);
    assert_eq!(settings.quality, AudioQuality::Medium);
    assert_eq!(settings.sample_rate, 44_100);
    assert_eq!(settings.channels, 2);
    assert_eq!(settings.bitrate, 128_000);
    assert!(!settings.metering_enabled);
}

#[test]
fn each_missing_key_gets_its_default() {
    let settings = RecorderOptions::from_value(&json!({
        "sampleRate": 16000,
    }))
    .resolve();

    // Supplied key is honored, everything else is defaulted
    assert_eq!(settings.sample_rate, 16000);
    assert_eq!(settings.format, AudioFormat::Aac);
    assert_eq!(settings.quality, AudioQuality::Medium);
    assert_eq!(settings.channels, 2);
    assert_eq!(settings.bitrate, 128_000);
}

#[test]
fn unknown_keys_do_not_affect_output() {
    let plain = RecorderOptions::from_value(&json!({
        "format": "webm",
        "channels": 1,
    }));
    let noisy = RecorderOptions::from_value(&json!({
        "format": "webm",
        "channels": 1,
        "autoDestroy": true,
        "partialUpdate": {"nested": "mapping"},
        "onProgress": null,
    }));

    assert_eq!(plain.resolve(), noisy.resolve());
}

#[test]
fn unknown_keys_never_reach_the_serialized_settings() {
    let settings = RecorderOptions::from_value(&json!({
        "autoDestroy": true,
    }))
    .resolve();

    let value = serde_json::to_value(&settings).unwrap();
    let map = value.as_object().unwrap();
    assert!(!map.contains_key("autoDestroy"));
    assert_eq!(map.len(), 6);
}

#[test]
fn scripting_layer_defaults_merge_under_call_options() {
    // The bridge keeps per-player defaults and merges call-site options on top
    let player_defaults = RecorderOptions::from_value(&json!({
        "format": "mp4",
        "bitrate": 96000,
    }));
    let call_options = RecorderOptions::from_value(&json!({
        "bitrate": 64000,
        "meteringEnabled": true,
    }));

    let settings = player_defaults.merge(call_options).resolve();
    assert_eq!(settings.format, AudioFormat::Mp4);
    assert_eq!(settings.bitrate, 64000);
    assert!(settings.metering_enabled);
}

#[test]
fn resolved_settings_are_equal_for_equal_inputs() {
    let a = RecorderOptions::from_value(&json!({"quality": "max"})).resolve();
    let b = RecorderOptions::from_value(&json!({"quality": "max"})).resolve();
    assert_eq!(a, b);
}

#[test]
fn defaults_constant_matches_resolution_of_empty_options() {
    assert_eq!(RecorderOptions::empty().resolve(), RecorderSettings::default());
}
