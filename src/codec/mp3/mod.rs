//! MP3 audio encoding through the LAME engine
//!
//! MP3 (MPEG-1 Audio Layer III) is a widely-used lossy audio codec.
//! All MP3 patents have expired worldwide as of 2017, so encoding is
//! freely usable without licensing fees.
//!
//! ## Features
//! - **Bitrates**: 64, 128, 192, 256 and 320 kbps (constant bitrate)
//! - **Quality levels**: 0 (fastest) to 3 (best fidelity)
//! - **Modes**: mono and stereo
//!
//! ## Usage
//!
//! ```no_run
//! use pcmkit::codec::mp3::{Mp3Config, Mp3Encoder};
//! use pcmkit::codec::pcm::SampleBuffer;
//!
//! let config = Mp3Config::standard();
//! let mut encoder = Mp3Encoder::new(&config)?;
//!
//! let samples = SampleBuffer::Stereo {
//!     left: vec![0i16; 44_100],
//!     right: vec![0i16; 44_100],
//! };
//! let mut out = Vec::new();
//! encoder.encode(&samples, &mut out)?;
//! encoder.finish(&mut out)?;
//! # Ok::<(), pcmkit::error::Error>(())
//! ```

pub mod encoder;

pub use encoder::Mp3Encoder;

use crate::codec::pcm::PcmConfig;
use crate::error::{Error, Result};
use crate::probe::QualityTier;

/// Constant bitrates accepted for MP3 output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mp3Bitrate {
    Kbps64,
    Kbps128,
    Kbps192,
    Kbps256,
    Kbps320,
}

impl Mp3Bitrate {
    /// Parse a bitrate given in kbps, rejecting values outside the ladder
    pub fn from_kbps(kbps: u32) -> Result<Self> {
        match kbps {
            64 => Ok(Mp3Bitrate::Kbps64),
            128 => Ok(Mp3Bitrate::Kbps128),
            192 => Ok(Mp3Bitrate::Kbps192),
            256 => Ok(Mp3Bitrate::Kbps256),
            320 => Ok(Mp3Bitrate::Kbps320),
            other => Err(Error::validation(format!(
                "Invalid MP3 bitrate: {} kbps (must be 64, 128, 192, 256 or 320)",
                other
            ))),
        }
    }

    /// Bitrate in kbps
    pub fn kbps(self) -> u32 {
        match self {
            Mp3Bitrate::Kbps64 => 64,
            Mp3Bitrate::Kbps128 => 128,
            Mp3Bitrate::Kbps192 => 192,
            Mp3Bitrate::Kbps256 => 256,
            Mp3Bitrate::Kbps320 => 320,
        }
    }
}

/// MP3 encoding quality, trading encoding speed against fidelity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mp3Quality {
    /// Level 0: smallest effort, fastest
    Low,
    /// Level 1
    Medium,
    /// Level 2
    High,
    /// Level 3: best fidelity, slowest
    Best,
}

impl Mp3Quality {
    /// Parse a quality level in 0 (lowest) to 3 (best)
    pub fn from_level(level: u8) -> Result<Self> {
        match level {
            0 => Ok(Mp3Quality::Low),
            1 => Ok(Mp3Quality::Medium),
            2 => Ok(Mp3Quality::High),
            3 => Ok(Mp3Quality::Best),
            other => Err(Error::validation(format!(
                "Invalid MP3 quality level: {} (must be 0 to 3)",
                other
            ))),
        }
    }

    /// Numeric level, 0 (lowest) to 3 (best)
    pub fn level(self) -> u8 {
        match self {
            Mp3Quality::Low => 0,
            Mp3Quality::Medium => 1,
            Mp3Quality::High => 2,
            Mp3Quality::Best => 3,
        }
    }
}

/// MP3 encoding configuration
///
/// Checked at construction: the bitrate and quality types only hold ladder
/// values, and the channel count must be 1 or 2. The sample rate and channel
/// count also describe the raw input handed to the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mp3Config {
    sample_rate: u32,
    channels: u8,
    bitrate: Mp3Bitrate,
    quality: Mp3Quality,
}

impl Mp3Config {
    /// Create an MP3 configuration, rejecting out-of-range fields
    pub fn new(
        sample_rate: u32,
        channels: u8,
        bitrate: Mp3Bitrate,
        quality: Mp3Quality,
    ) -> Result<Self> {
        if sample_rate == 0 {
            return Err(Error::validation("Invalid sample rate: 0"));
        }
        if channels != 1 && channels != 2 {
            return Err(Error::validation(format!(
                "Invalid channel count: {} (must be 1 or 2)",
                channels
            )));
        }
        Ok(Mp3Config {
            sample_rate,
            channels,
            bitrate,
            quality,
        })
    }

    /// High quality preset: 44.1 kHz stereo at 320 kbps, best fidelity
    pub fn high_quality() -> Self {
        Mp3Config {
            sample_rate: 44_100,
            channels: 2,
            bitrate: Mp3Bitrate::Kbps320,
            quality: Mp3Quality::Best,
        }
    }

    /// Standard preset: 44.1 kHz stereo at 192 kbps
    pub fn standard() -> Self {
        Mp3Config {
            sample_rate: 44_100,
            channels: 2,
            bitrate: Mp3Bitrate::Kbps192,
            quality: Mp3Quality::High,
        }
    }

    /// Compressed preset: 22.05 kHz mono at 128 kbps, for voice notes
    pub fn compressed() -> Self {
        Mp3Config {
            sample_rate: 22_050,
            channels: 1,
            bitrate: Mp3Bitrate::Kbps128,
            quality: Mp3Quality::Medium,
        }
    }

    /// Pick encoding parameters for a known PCM source
    ///
    /// The sample rate and channel count are copied from the source; the
    /// bitrate and quality follow its [`QualityTier`].
    pub fn for_source(source: &PcmConfig) -> Self {
        let (bitrate, quality) = match QualityTier::classify(source) {
            QualityTier::Phone => (Mp3Bitrate::Kbps128, Mp3Quality::Medium),
            QualityTier::Cd => (Mp3Bitrate::Kbps192, Mp3Quality::High),
            QualityTier::Studio => (Mp3Bitrate::Kbps320, Mp3Quality::Best),
        };
        Mp3Config {
            sample_rate: source.sample_rate(),
            channels: source.channels() as u8,
            bitrate,
            quality,
        }
    }

    /// Sample rate of the input in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of channels (1 or 2)
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Target constant bitrate
    pub fn bitrate(&self) -> Mp3Bitrate {
        self.bitrate
    }

    /// Encoding quality level
    pub fn quality(&self) -> Mp3Quality {
        self.quality
    }
}

impl Default for Mp3Config {
    fn default() -> Self {
        Self::standard()
    }
}
