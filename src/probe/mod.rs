//! Input Probing and Parameter Inference
//!
//! Raw PCM carries no header, so the only clues about its layout live in the
//! file name. Recording tools commonly bake the parameters into names such as
//! `test_48k16bit双声道.pcm` or `voice_16k_1ch_16bit.pcm`, mixing English and
//! Chinese tokens. This module recovers a [`PcmConfig`] from those tokens and
//! classifies configurations into coarse quality tiers used to pick MP3
//! presets on the automatic conversion path.
//!
//! # Usage
//!
//! ```rust
//! use pcmkit::probe;
//!
//! let config = probe::infer_from_filename("浪花一朵朵片段8k16bit单声道.pcm")?;
//! assert_eq!(config.sample_rate(), 8_000);
//! assert_eq!(config.channels(), 1);
//! # Ok::<(), pcmkit::error::Error>(())
//! ```

pub mod filename;

pub use filename::infer_from_filename;

use crate::codec::pcm::PcmConfig;

/// Coarse classification of a PCM source, used to pick encoding presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityTier {
    /// Telephony-grade material (up to 16 kHz)
    Phone,
    /// Consumer-grade material (above 16 kHz, below 48 kHz)
    Cd,
    /// High-rate captures (48 kHz and above)
    Studio,
}

impl QualityTier {
    /// Classify a PCM configuration by its sample rate
    pub fn classify(config: &PcmConfig) -> Self {
        if config.sample_rate() <= 16_000 {
            QualityTier::Phone
        } else if config.sample_rate() >= 48_000 {
            QualityTier::Studio
        } else {
            QualityTier::Cd
        }
    }
}
