//! # pcmkit - Raw PCM Conversion Toolkit
//!
//! pcmkit wraps headerless PCM audio into canonical WAV containers, encodes
//! it to MP3 through the LAME engine, and can recover the PCM layout from
//! tokens embedded in file names, including mixed Chinese/English names
//! such as `浪花一朵朵片段8k16bit单声道.pcm`.
//!
//! ## Features
//!
//! - **WAV writing**: byte-exact canonical 44-byte RIFF/WAVE header, with
//!   the PCM payload copied untouched
//! - **MP3 encoding**: constant-bitrate LAME encoding for 8/16/24/32-bit
//!   mono and stereo input
//! - **Filename inference**: tokens like `8k`, `44.1khz`, `16bit`,
//!   `单声道`, `stereo` select the PCM layout automatically
//! - **C ABI**: the [`ffi`] module exposes every operation for embedding
//!   in mobile and native applications
//!
//! ## Architecture
//!
//! - [`codec`]: PCM input handling and MP3 encoding
//! - [`format`]: output targets and WAV container writing
//! - [`probe`]: filename-based inference and quality tiers
//! - [`convert`]: the conversion entry points
//! - [`ffi`]: C-compatible bindings
//! - [`error`]: error types
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use pcmkit::{convert, AudioFormat};
//!
//! // Wrap a phone recording, inferring 8 kHz mono 16-bit from the name
//! let config = convert::auto_convert(
//!     Path::new("call_8k16bit单声道.pcm"),
//!     Path::new("call.wav"),
//!     AudioFormat::Wav,
//! )?;
//! assert_eq!(config.sample_rate(), 8_000);
//! # Ok::<(), pcmkit::Error>(())
//! ```

pub mod codec;
pub mod convert;
pub mod error;
pub mod ffi;
pub mod format;
pub mod probe;

pub use codec::mp3::{Mp3Bitrate, Mp3Config, Mp3Quality};
pub use codec::pcm::PcmConfig;
pub use error::{Error, Result};
pub use format::AudioFormat;
pub use probe::QualityTier;

/// pcmkit version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const VERSION_MAJOR: u32 = 0;
pub const VERSION_MINOR: u32 = 1;
pub const VERSION_PATCH: u32 = 0;

/// Configuration for the pcmkit library
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Enable verbose logging
    pub verbose: bool,
    /// Enable debug output
    pub debug: bool,
}

/// Initialize library logging with the given configuration
///
/// Call at most once per process; embedding applications that install
/// their own `tracing` subscriber can skip this entirely.
pub fn init(config: Config) -> Result<()> {
    if config.verbose || config.debug {
        let level = if config.debug { "debug" } else { "info" };
        tracing_subscriber::fmt()
            .with_env_filter(level)
            .try_init()
            .map_err(|e| Error::init(format!("Failed to install subscriber: {}", e)))?;
    }
    Ok(())
}
