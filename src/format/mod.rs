//! Container format handling
//!
//! This module names the output targets a conversion can produce and holds
//! the WAV container implementation. MP3 output is a bare bitstream with no
//! container of its own, so only WAV needs writing support here.

pub mod wav;

pub use wav::{WavHeader, WavMuxer};

use std::fmt;

/// Output targets for a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    /// RIFF/WAVE container wrapping the PCM untouched
    Wav,
    /// MP3 bitstream encoded through LAME
    Mp3,
}

impl AudioFormat {
    /// Conventional file extension for the format
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Wav => "wav",
            AudioFormat::Mp3 => "mp3",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
