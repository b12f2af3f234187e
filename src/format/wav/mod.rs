//! WAV audio format support
//!
//! This module implements canonical RIFF/WAV writing for raw PCM payloads.
//! WAV is a simple uncompressed audio container widely used for interchange;
//! wrapping PCM only prepends a fixed 44-byte header, the samples themselves
//! are copied untouched.

pub mod header;
pub mod muxer;

pub use header::WavHeader;
pub use muxer::WavMuxer;

/// WAV format magic numbers
pub const RIFF_MAGIC: &[u8; 4] = b"RIFF";
pub const WAVE_MAGIC: &[u8; 4] = b"WAVE";
pub const FMT_CHUNK: &[u8; 4] = b"fmt ";
pub const DATA_CHUNK: &[u8; 4] = b"data";

/// Length of the canonical header in bytes
pub const HEADER_LEN: u32 = 44;
