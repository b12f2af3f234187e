//! PCM decoder implementation
//!
//! Converts raw PCM bytes of any supported width into the planar signed
//! 16-bit samples the MP3 engine consumes. Widths above 16 bits keep their
//! top 16 bits, 8-bit input is offset-binary and shifted up.

use tracing::debug;

use super::PcmConfig;

/// Planar signed 16-bit samples produced from a raw PCM stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleBuffer {
    /// Single channel
    Mono(Vec<i16>),
    /// Two channels split out of the interleaved stream
    Stereo { left: Vec<i16>, right: Vec<i16> },
}

impl SampleBuffer {
    /// Number of sample frames (per-channel samples)
    pub fn frames(&self) -> usize {
        match self {
            SampleBuffer::Mono(samples) => samples.len(),
            SampleBuffer::Stereo { left, .. } => left.len(),
        }
    }

    /// Number of channels
    pub fn channels(&self) -> u16 {
        match self {
            SampleBuffer::Mono(_) => 1,
            SampleBuffer::Stereo { .. } => 2,
        }
    }
}

/// PCM decoder
pub struct PcmDecoder {
    config: PcmConfig,
}

impl PcmDecoder {
    /// Create a new PCM decoder for the given stream layout
    pub fn new(config: PcmConfig) -> Self {
        PcmDecoder { config }
    }

    /// Decode raw PCM bytes into planar 16-bit samples
    ///
    /// Trailing bytes that do not fill a whole frame are dropped.
    pub fn decode(&self, data: &[u8]) -> SampleBuffer {
        let block = self.config.block_align() as usize;
        let bytes_per_sample = self.config.bytes_per_sample() as usize;
        let remainder = data.len() % block;
        if remainder != 0 {
            debug!(
                "Dropping {} trailing bytes that do not fill a {}-byte frame",
                remainder, block
            );
        }

        let frames = data.len() / block;
        if self.config.channels() == 1 {
            let mut samples = Vec::with_capacity(frames);
            for frame in data.chunks_exact(block) {
                samples.push(sample_to_i16(&frame[..bytes_per_sample]));
            }
            SampleBuffer::Mono(samples)
        } else {
            let mut left = Vec::with_capacity(frames);
            let mut right = Vec::with_capacity(frames);
            for frame in data.chunks_exact(block) {
                left.push(sample_to_i16(&frame[..bytes_per_sample]));
                right.push(sample_to_i16(&frame[bytes_per_sample..block]));
            }
            SampleBuffer::Stereo { left, right }
        }
    }
}

/// Convert one little-endian sample of 1, 2, 3 or 4 bytes to i16
fn sample_to_i16(bytes: &[u8]) -> i16 {
    match bytes.len() {
        // Offset-binary: 0x80 is silence
        1 => (i16::from(bytes[0]) - 128) << 8,
        2 => i16::from_le_bytes([bytes[0], bytes[1]]),
        3 => {
            let value = (i32::from(bytes[2] as i8) << 16)
                | (i32::from(bytes[1]) << 8)
                | i32::from(bytes[0]);
            (value >> 8) as i16
        }
        _ => {
            let value = i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
            (value >> 16) as i16
        }
    }
}
