//! MP3 encoder implementation
//!
//! Drives a LAME session in fixed-size frames and streams the encoded
//! bitstream to a writer as it is produced.

use std::io::Write;

use mp3lame_encoder::{Builder, DualPcm, FlushNoGap, MonoPcm};

use super::{Mp3Bitrate, Mp3Config, Mp3Quality};
use crate::codec::pcm::SampleBuffer;
use crate::error::{Error, Result};

/// Samples per channel handed to the engine per call, one MPEG audio frame
pub const SAMPLES_PER_FRAME: usize = 1152;

impl Mp3Bitrate {
    fn to_lame(self) -> mp3lame_encoder::Bitrate {
        match self {
            Mp3Bitrate::Kbps64 => mp3lame_encoder::Bitrate::Kbps64,
            Mp3Bitrate::Kbps128 => mp3lame_encoder::Bitrate::Kbps128,
            Mp3Bitrate::Kbps192 => mp3lame_encoder::Bitrate::Kbps192,
            Mp3Bitrate::Kbps256 => mp3lame_encoder::Bitrate::Kbps256,
            Mp3Bitrate::Kbps320 => mp3lame_encoder::Bitrate::Kbps320,
        }
    }
}

impl Mp3Quality {
    fn to_lame(self) -> mp3lame_encoder::Quality {
        match self {
            Mp3Quality::Low => mp3lame_encoder::Quality::Worst,
            Mp3Quality::Medium => mp3lame_encoder::Quality::Good,
            Mp3Quality::High => mp3lame_encoder::Quality::NearBest,
            Mp3Quality::Best => mp3lame_encoder::Quality::Best,
        }
    }
}

/// MP3 encoder wrapping a configured LAME session
///
/// The session holds engine state across [`encode`](Mp3Encoder::encode)
/// calls; [`finish`](Mp3Encoder::finish) drains it and ends the stream.
pub struct Mp3Encoder {
    encoder: mp3lame_encoder::Encoder,
    channels: u8,
    scratch: Vec<u8>,
}

impl Mp3Encoder {
    /// Create an encoder session for the given configuration
    pub fn new(config: &Mp3Config) -> Result<Self> {
        let mut builder =
            Builder::new().ok_or_else(|| Error::encoding("Failed to create LAME encoder"))?;
        builder
            .set_sample_rate(config.sample_rate())
            .map_err(|e| Error::encoding(format!("Failed to set sample rate: {:?}", e)))?;
        builder
            .set_num_channels(config.channels())
            .map_err(|e| Error::encoding(format!("Failed to set channel count: {:?}", e)))?;
        builder
            .set_brate(config.bitrate().to_lame())
            .map_err(|e| Error::encoding(format!("Failed to set bitrate: {:?}", e)))?;
        builder
            .set_quality(config.quality().to_lame())
            .map_err(|e| Error::encoding(format!("Failed to set quality: {:?}", e)))?;
        let encoder = builder
            .build()
            .map_err(|e| Error::encoding(format!("Failed to build encoder: {:?}", e)))?;

        Ok(Mp3Encoder {
            encoder,
            channels: config.channels(),
            scratch: Vec::with_capacity(mp3lame_encoder::max_required_buffer_size(
                SAMPLES_PER_FRAME,
            )),
        })
    }

    /// Encode samples, streaming finished frames to `writer` in order
    ///
    /// Returns the number of bitstream bytes written. The engine buffers
    /// partial frames internally, so this can legitimately write nothing
    /// for short inputs until [`finish`](Mp3Encoder::finish).
    pub fn encode<W: Write>(&mut self, samples: &SampleBuffer, writer: &mut W) -> Result<u64> {
        if samples.channels() != u16::from(self.channels) {
            return Err(Error::encoding(format!(
                "Channel mismatch: encoder configured for {} channels, got {}",
                self.channels,
                samples.channels()
            )));
        }

        let mut written = 0u64;
        match samples {
            SampleBuffer::Mono(mono) => {
                for chunk in mono.chunks(SAMPLES_PER_FRAME) {
                    self.scratch.clear();
                    self.encoder
                        .encode_to_vec(MonoPcm(chunk), &mut self.scratch)
                        .map_err(|e| {
                            Error::encoding(format!("Failed to encode mono audio: {:?}", e))
                        })?;
                    writer.write_all(&self.scratch)?;
                    written += self.scratch.len() as u64;
                }
            }
            SampleBuffer::Stereo { left, right } => {
                for (l, r) in left
                    .chunks(SAMPLES_PER_FRAME)
                    .zip(right.chunks(SAMPLES_PER_FRAME))
                {
                    self.scratch.clear();
                    self.encoder
                        .encode_to_vec(DualPcm { left: l, right: r }, &mut self.scratch)
                        .map_err(|e| {
                            Error::encoding(format!("Failed to encode stereo audio: {:?}", e))
                        })?;
                    writer.write_all(&self.scratch)?;
                    written += self.scratch.len() as u64;
                }
            }
        }
        Ok(written)
    }

    /// Drain buffered engine state and end the stream
    ///
    /// Returns the number of trailing bitstream bytes written.
    pub fn finish<W: Write>(mut self, writer: &mut W) -> Result<u64> {
        self.scratch.clear();
        self.encoder
            .flush_to_vec::<FlushNoGap>(&mut self.scratch)
            .map_err(|e| Error::encoding(format!("Failed to flush encoder: {:?}", e)))?;
        writer.write_all(&self.scratch)?;
        Ok(self.scratch.len() as u64)
    }
}
