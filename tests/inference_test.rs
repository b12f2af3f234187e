//! Filename-based configuration inference tests
//!
//! Inference scans the final path component for sample-rate, bit-depth and
//! channel tokens in either Chinese or English, falling back to CD quality
//! for any field that has no token.

use pcmkit::error::Error;
use pcmkit::probe::infer_from_filename;

// ============================================================================
// Token recognition
// ============================================================================

#[test]
fn test_inference_token_table() {
    let cases: &[(&str, u32, u16, u16)] = &[
        ("test_48k16bit双声道.pcm", 48_000, 2, 16),
        ("audio_8k16bit单声道.pcm", 8_000, 1, 16),
        ("浪花一朵朵片段8k16bit单声道.pcm", 8_000, 1, 16),
        ("北京北京8k16bits单声道.pcm", 8_000, 1, 16),
        ("voice_16k_1ch_16bit.pcm", 16_000, 1, 16),
        ("audio_96k_2ch_24bit.pcm", 96_000, 2, 24),
        ("music_22k_mono_8bit.pcm", 22_000, 1, 8),
        ("test_44.1k_stereo.pcm", 44_100, 2, 16),
        ("tone_8000hz.pcm", 8_000, 2, 16),
        ("studio_44100hz_32bit_立体声.pcm", 44_100, 2, 32),
        ("radio_16khz_mono.pcm", 16_000, 1, 16),
        ("sample.pcm", 44_100, 2, 16),
    ];

    for &(name, rate, channels, bits) in cases {
        let config = infer_from_filename(name)
            .unwrap_or_else(|e| panic!("inference failed for {:?}: {}", name, e));
        assert_eq!(config.sample_rate(), rate, "sample rate for {:?}", name);
        assert_eq!(config.channels(), channels, "channels for {:?}", name);
        assert_eq!(config.bits_per_sample(), bits, "bit depth for {:?}", name);
    }
}

#[test]
fn test_inference_is_case_insensitive() {
    let config = infer_from_filename("VOICE_16K_MONO_8BIT.PCM").unwrap();
    assert_eq!(config.sample_rate(), 16_000);
    assert_eq!(config.channels(), 1);
    assert_eq!(config.bits_per_sample(), 8);
}

#[test]
fn test_inference_defaults_apply_per_field() {
    // Only the rate is named; channels and depth fall back to CD quality.
    let config = infer_from_filename("capture_8k.pcm").unwrap();
    assert_eq!(config.sample_rate(), 8_000);
    assert_eq!(config.channels(), 2);
    assert_eq!(config.bits_per_sample(), 16);

    // Only the channel layout is named.
    let config = infer_from_filename("capture_单声道.pcm").unwrap();
    assert_eq!(config.sample_rate(), 44_100);
    assert_eq!(config.channels(), 1);
    assert_eq!(config.bits_per_sample(), 16);
}

#[test]
fn test_inference_last_token_wins() {
    let config = infer_from_filename("old_8k_new_16k.pcm").unwrap();
    assert_eq!(config.sample_rate(), 16_000);

    let config = infer_from_filename("mono_then_stereo.pcm").unwrap();
    assert_eq!(config.channels(), 2);

    let config = infer_from_filename("take_24bit_final_16bit.pcm").unwrap();
    assert_eq!(config.bits_per_sample(), 16);
}

#[test]
fn test_inference_ignores_bitrate_tokens() {
    // "320kbps" is a bitrate, not a sample rate, and "128k" inside it must
    // not be misread either.
    let config = infer_from_filename("song_320kbps.pcm").unwrap();
    assert_eq!(config.sample_rate(), 44_100);

    // "bitrate" must not satisfy the depth pattern; the default applies.
    let config = infer_from_filename("clip_24bitrate.pcm").unwrap();
    assert_eq!(config.bits_per_sample(), 16);
    assert_eq!(config.sample_rate(), 44_100);
}

#[test]
fn test_inference_skips_invalid_tokens() {
    // A zero rate is not a usable token; the default applies.
    let config = infer_from_filename("broken_0k.pcm").unwrap();
    assert_eq!(config.sample_rate(), 44_100);

    // An absurd rate is skipped and an earlier valid token survives.
    let config = infer_from_filename("take_16k_then_99999999999k.pcm").unwrap();
    assert_eq!(config.sample_rate(), 16_000);

    // Unsupported depths are skipped.
    let config = infer_from_filename("odd_12bit.pcm").unwrap();
    assert_eq!(config.bits_per_sample(), 16);
}

// ============================================================================
// Path handling and errors
// ============================================================================

#[test]
fn test_inference_scans_only_final_component() {
    let config = infer_from_filename("/captures/48k_session/voice_8k16bit单声道.pcm").unwrap();
    assert_eq!(config.sample_rate(), 8_000);
    assert_eq!(config.channels(), 1);
}

#[test]
fn test_inference_rejects_empty_name() {
    let err = infer_from_filename("").unwrap_err();
    assert!(matches!(err, Error::Inference(_)));
}

#[test]
fn test_inference_rejects_missing_extension() {
    let err = infer_from_filename("recording_16k_mono").unwrap_err();
    assert!(matches!(err, Error::Inference(_)));

    // A leading dot alone is a hidden file, not an extension.
    let err = infer_from_filename(".pcm").unwrap_err();
    assert!(matches!(err, Error::Inference(_)));
}
