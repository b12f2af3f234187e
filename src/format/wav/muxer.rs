//! WAV file muxer implementation

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::header::WavHeader;
use crate::codec::pcm::PcmConfig;
use crate::error::Result;

/// Single-pass WAV muxer
///
/// The whole PCM payload is available when muxing starts, so the header is
/// written with final sizes in one pass and no backpatching seek is needed.
/// The payload bytes are copied verbatim after the header.
pub struct WavMuxer {
    config: PcmConfig,
}

impl WavMuxer {
    /// Create a WAV muxer for the given PCM layout
    pub fn new(config: PcmConfig) -> Self {
        WavMuxer { config }
    }

    /// Write a complete WAV stream to `writer`, returning total bytes written
    pub fn mux<W: Write>(&self, pcm: &[u8], writer: &mut W) -> Result<u64> {
        let header = WavHeader::for_pcm(&self.config, pcm.len() as u64)?;
        header.write_to(writer)?;
        writer.write_all(pcm)?;
        Ok(header.file_size())
    }

    /// Write a complete WAV file at `path`, returning total bytes written
    pub fn mux_file(&self, pcm: &[u8], path: &Path) -> Result<u64> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        let written = self.mux(pcm, &mut writer)?;
        writer.flush()?;
        Ok(written)
    }
}
