//! WAV file header layout and serialization

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use super::{DATA_CHUNK, FMT_CHUNK, HEADER_LEN, RIFF_MAGIC, WAVE_MAGIC};
use crate::codec::pcm::PcmConfig;
use crate::error::{Error, Result};

/// Format tag for integer PCM in the fmt chunk
const FORMAT_TAG_PCM: u16 = 0x0001;
/// fmt chunk payload size for plain PCM
const FMT_CHUNK_SIZE: u32 = 16;

/// Canonical 44-byte RIFF/WAVE header for an integer PCM payload
///
/// Field order matches the on-disk layout: a RIFF chunk wrapping a 16-byte
/// fmt chunk and a data chunk. No other chunks are ever written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Number of channels (1 = mono, 2 = stereo)
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Average bytes per second
    pub byte_rate: u32,
    /// Bytes per frame across all channels
    pub block_align: u16,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Data chunk size in bytes
    pub data_size: u32,
}

impl WavHeader {
    /// Build a header for a PCM payload of `data_len` bytes
    ///
    /// Fails when the payload would overflow the 32-bit RIFF size fields,
    /// which caps WAV output just under 4 GiB.
    pub fn for_pcm(config: &PcmConfig, data_len: u64) -> Result<Self> {
        let max = u64::from(u32::MAX) - u64::from(HEADER_LEN);
        if data_len > max {
            return Err(Error::TooLarge {
                size: data_len,
                max,
            });
        }

        Ok(WavHeader {
            channels: config.channels(),
            sample_rate: config.sample_rate(),
            byte_rate: config.byte_rate()?,
            block_align: config.block_align(),
            bits_per_sample: config.bits_per_sample(),
            data_size: data_len as u32,
        })
    }

    /// RIFF chunk size field: total file size minus the 8-byte chunk header
    pub fn riff_size(&self) -> u32 {
        HEADER_LEN - 8 + self.data_size
    }

    /// Total size of the output file, header included
    pub fn file_size(&self) -> u64 {
        u64::from(HEADER_LEN) + u64::from(self.data_size)
    }

    /// Calculate expected byte rate from the other fields
    pub fn calculate_byte_rate(&self) -> u32 {
        self.sample_rate.wrapping_mul(u32::from(self.block_align))
    }

    /// Calculate expected block alignment from the other fields
    pub fn calculate_block_align(&self) -> u16 {
        self.channels.wrapping_mul(self.bits_per_sample / 8)
    }

    /// Validate internal consistency of the derived fields
    pub fn validate(&self) -> Result<()> {
        if self.channels == 0 {
            return Err(Error::invalid_input("Invalid channel count: 0"));
        }

        if self.sample_rate == 0 {
            return Err(Error::invalid_input("Invalid sample rate: 0"));
        }

        if self.bits_per_sample == 0 || self.bits_per_sample % 8 != 0 {
            return Err(Error::invalid_input(format!(
                "Invalid bits per sample: {}",
                self.bits_per_sample
            )));
        }

        let expected_block_align = self.calculate_block_align();
        if self.block_align != expected_block_align {
            return Err(Error::invalid_input(format!(
                "Block align mismatch: expected {}, got {}",
                expected_block_align, self.block_align
            )));
        }

        let expected_byte_rate = self.calculate_byte_rate();
        if self.byte_rate != expected_byte_rate {
            return Err(Error::invalid_input(format!(
                "Byte rate mismatch: expected {}, got {}",
                expected_byte_rate, self.byte_rate
            )));
        }

        Ok(())
    }

    /// Write the 44 header bytes
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(RIFF_MAGIC)?;
        writer.write_u32::<LittleEndian>(self.riff_size())?;
        writer.write_all(WAVE_MAGIC)?;

        writer.write_all(FMT_CHUNK)?;
        writer.write_u32::<LittleEndian>(FMT_CHUNK_SIZE)?;
        writer.write_u16::<LittleEndian>(FORMAT_TAG_PCM)?;
        writer.write_u16::<LittleEndian>(self.channels)?;
        writer.write_u32::<LittleEndian>(self.sample_rate)?;
        writer.write_u32::<LittleEndian>(self.byte_rate)?;
        writer.write_u16::<LittleEndian>(self.block_align)?;
        writer.write_u16::<LittleEndian>(self.bits_per_sample)?;

        writer.write_all(DATA_CHUNK)?;
        writer.write_u32::<LittleEndian>(self.data_size)?;
        Ok(())
    }

    /// Read and parse a canonical header
    ///
    /// The reader must be positioned at the start of the file. Only the
    /// canonical layout written by [`write_to`](WavHeader::write_to) is
    /// accepted, with no extra chunks before fmt or data.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut magic = [0u8; 4];

        reader.read_exact(&mut magic)?;
        if &magic != RIFF_MAGIC {
            return Err(Error::invalid_input("Not a valid RIFF file"));
        }
        let riff_size = reader.read_u32::<LittleEndian>()?;

        reader.read_exact(&mut magic)?;
        if &magic != WAVE_MAGIC {
            return Err(Error::invalid_input("Not a valid WAVE file"));
        }

        reader.read_exact(&mut magic)?;
        if &magic != FMT_CHUNK {
            return Err(Error::invalid_input("fmt chunk not found"));
        }
        let fmt_size = reader.read_u32::<LittleEndian>()?;
        if fmt_size != FMT_CHUNK_SIZE {
            return Err(Error::invalid_input(format!(
                "Unexpected fmt chunk size: {}",
                fmt_size
            )));
        }
        let format_tag = reader.read_u16::<LittleEndian>()?;
        if format_tag != FORMAT_TAG_PCM {
            return Err(Error::invalid_input(format!(
                "Unsupported format tag: {:#06x}",
                format_tag
            )));
        }

        let channels = reader.read_u16::<LittleEndian>()?;
        let sample_rate = reader.read_u32::<LittleEndian>()?;
        let byte_rate = reader.read_u32::<LittleEndian>()?;
        let block_align = reader.read_u16::<LittleEndian>()?;
        let bits_per_sample = reader.read_u16::<LittleEndian>()?;

        reader.read_exact(&mut magic)?;
        if &magic != DATA_CHUNK {
            return Err(Error::invalid_input("data chunk not found"));
        }
        let data_size = reader.read_u32::<LittleEndian>()?;

        let header = WavHeader {
            channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample,
            data_size,
        };
        header.validate()?;

        if riff_size != header.riff_size() {
            return Err(Error::invalid_input(format!(
                "RIFF size mismatch: expected {}, got {}",
                header.riff_size(),
                riff_size
            )));
        }

        Ok(header)
    }

    /// Get duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        let total_frames = f64::from(self.data_size) / f64::from(self.block_align);
        total_frames / f64::from(self.sample_rate)
    }
}
