//! PCM (Pulse Code Modulation) input handling
//!
//! PCM is uncompressed audio, the simplest and most straightforward layout.
//! This module describes raw headerless PCM byte streams and converts them
//! into the signed 16-bit samples the MP3 engine consumes. The streams
//! themselves are never resampled or transformed.

pub mod decoder;

pub use decoder::{PcmDecoder, SampleBuffer};

use crate::error::{Error, Result};

/// Bit depths accepted for raw PCM input
pub const SUPPORTED_BIT_DEPTHS: [u16; 4] = [8, 16, 24, 32];

/// Raw PCM stream configuration
///
/// Describes the layout of an existing byte stream. Values are checked at
/// construction, so a held `PcmConfig` is always internally consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmConfig {
    sample_rate: u32,
    channels: u16,
    bits_per_sample: u16,
}

impl PcmConfig {
    /// Create a PCM configuration, rejecting out-of-range fields
    pub fn new(sample_rate: u32, channels: u16, bits_per_sample: u16) -> Result<Self> {
        if sample_rate == 0 {
            return Err(Error::validation("Invalid sample rate: 0"));
        }
        if channels != 1 && channels != 2 {
            return Err(Error::validation(format!(
                "Invalid channel count: {} (must be 1 or 2)",
                channels
            )));
        }
        if !SUPPORTED_BIT_DEPTHS.contains(&bits_per_sample) {
            return Err(Error::validation(format!(
                "Invalid bit depth: {} (must be 8, 16, 24 or 32)",
                bits_per_sample
            )));
        }
        Ok(PcmConfig {
            sample_rate,
            channels,
            bits_per_sample,
        })
    }

    /// Default layout: CD quality (44.1 kHz, stereo, 16-bit)
    pub fn default_config() -> Self {
        PcmConfig {
            sample_rate: 44_100,
            channels: 2,
            bits_per_sample: 16,
        }
    }

    /// Telephony layout (8 kHz, mono, 16-bit)
    pub fn phone_quality() -> Self {
        PcmConfig {
            sample_rate: 8_000,
            channels: 1,
            bits_per_sample: 16,
        }
    }

    /// CD layout (44.1 kHz, stereo, 16-bit)
    pub fn cd_quality() -> Self {
        Self::default_config()
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of interleaved channels
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Bits per single-channel sample
    pub fn bits_per_sample(&self) -> u16 {
        self.bits_per_sample
    }

    /// Bytes per single-channel sample
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per frame (one sample across all channels)
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Bytes per second of audio, checked against u32 overflow
    pub fn byte_rate(&self) -> Result<u32> {
        self.sample_rate
            .checked_mul(u32::from(self.block_align()))
            .ok_or_else(|| {
                Error::validation(format!(
                    "Byte rate overflows u32 for {} Hz x {} bytes per frame",
                    self.sample_rate,
                    self.block_align()
                ))
            })
    }
}

impl Default for PcmConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_configs() {
        for rate in [8_000, 16_000, 22_050, 44_100, 48_000, 96_000] {
            for channels in [1, 2] {
                for bits in SUPPORTED_BIT_DEPTHS {
                    assert!(PcmConfig::new(rate, channels, bits).is_ok());
                }
            }
        }
    }

    #[test]
    fn test_rejects_zero_sample_rate() {
        let err = PcmConfig::new(0, 2, 16).unwrap_err();
        assert!(err.to_string().contains("sample rate"));
    }

    #[test]
    fn test_rejects_bad_channel_count() {
        assert!(PcmConfig::new(44_100, 0, 16).is_err());
        assert!(PcmConfig::new(44_100, 3, 16).is_err());
        assert!(PcmConfig::new(44_100, 6, 16).is_err());
    }

    #[test]
    fn test_rejects_bad_bit_depth() {
        assert!(PcmConfig::new(44_100, 2, 0).is_err());
        assert!(PcmConfig::new(44_100, 2, 12).is_err());
        assert!(PcmConfig::new(44_100, 2, 64).is_err());
    }

    #[test]
    fn test_byte_math() {
        let config = PcmConfig::new(44_100, 2, 16).unwrap();
        assert_eq!(config.bytes_per_sample(), 2);
        assert_eq!(config.block_align(), 4);
        assert_eq!(config.byte_rate().unwrap(), 176_400);

        let config = PcmConfig::new(48_000, 1, 24).unwrap();
        assert_eq!(config.block_align(), 3);
        assert_eq!(config.byte_rate().unwrap(), 144_000);
    }

    #[test]
    fn test_byte_rate_overflow() {
        let config = PcmConfig::new(u32::MAX, 2, 32).unwrap();
        assert!(config.byte_rate().is_err());
    }

    #[test]
    fn test_presets() {
        let cd = PcmConfig::default_config();
        assert_eq!(cd.sample_rate(), 44_100);
        assert_eq!(cd.channels(), 2);
        assert_eq!(cd.bits_per_sample(), 16);
        assert_eq!(cd, PcmConfig::cd_quality());
        assert_eq!(cd, PcmConfig::default());

        let phone = PcmConfig::phone_quality();
        assert_eq!(phone.sample_rate(), 8_000);
        assert_eq!(phone.channels(), 1);
        assert_eq!(phone.bits_per_sample(), 16);
    }
}
