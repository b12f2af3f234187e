//! Common test utilities for pcmkit integration tests
//!
//! Helpers for generating raw PCM inputs with meaningful file names and for
//! reading back the fixed 44-byte header of generated WAV files.

#![allow(dead_code)]

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, ReadBytesExt};

// ============================================================================
// PCM Input Generation
// ============================================================================

/// Generate 16-bit interleaved sine-tone PCM
pub fn generate_sine_pcm16(frames: usize, channels: u16, sample_rate: u32, freq: f32) -> Vec<u8> {
    let mut data = Vec::with_capacity(frames * channels as usize * 2);
    for i in 0..frames {
        let t = i as f32 / sample_rate as f32;
        let sample = ((t * freq * 2.0 * std::f32::consts::PI).sin() * 12_000.0) as i16;
        for _ in 0..channels {
            data.extend_from_slice(&sample.to_le_bytes());
        }
    }
    data
}

/// Write raw PCM bytes under `dir` with the given file name
///
/// The name matters: the automatic conversion path infers the PCM layout
/// from tokens embedded in it.
pub fn write_pcm_file(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, data).expect("write test PCM input");
    path
}

// ============================================================================
// WAV Output Verification
// ============================================================================

/// Fields of a canonical WAV header as laid out on disk
pub struct WavFields {
    pub riff_size: u32,
    pub format_tag: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub data_size: u32,
    pub file_len: u64,
}

/// Read back the fixed 44-byte header of a generated WAV file
pub fn read_wav_fields(path: &Path) -> WavFields {
    let mut file = fs::File::open(path).expect("open WAV output");
    let file_len = file.metadata().expect("stat WAV output").len();

    let mut magic = [0u8; 4];
    file.read_exact(&mut magic).expect("read RIFF magic");
    assert_eq!(&magic, b"RIFF", "missing RIFF magic");
    let riff_size = file.read_u32::<LittleEndian>().expect("read RIFF size");

    file.read_exact(&mut magic).expect("read WAVE magic");
    assert_eq!(&magic, b"WAVE", "missing WAVE magic");

    file.read_exact(&mut magic).expect("read fmt chunk id");
    assert_eq!(&magic, b"fmt ", "missing fmt chunk");
    let fmt_size = file.read_u32::<LittleEndian>().expect("read fmt size");
    assert_eq!(fmt_size, 16, "unexpected fmt chunk size");

    let format_tag = file.read_u16::<LittleEndian>().expect("read format tag");
    let channels = file.read_u16::<LittleEndian>().expect("read channels");
    let sample_rate = file.read_u32::<LittleEndian>().expect("read sample rate");
    let byte_rate = file.read_u32::<LittleEndian>().expect("read byte rate");
    let block_align = file.read_u16::<LittleEndian>().expect("read block align");
    let bits_per_sample = file
        .read_u16::<LittleEndian>()
        .expect("read bits per sample");

    file.read_exact(&mut magic).expect("read data chunk id");
    assert_eq!(&magic, b"data", "missing data chunk");
    let data_size = file.read_u32::<LittleEndian>().expect("read data size");

    WavFields {
        riff_size,
        format_tag,
        channels,
        sample_rate,
        byte_rate,
        block_align,
        bits_per_sample,
        data_size,
        file_len,
    }
}

/// Assert that a file starts with an MPEG audio frame sync word
pub fn assert_mp3_sync(path: &Path) {
    let data = fs::read(path).expect("read MP3 output");
    assert!(data.len() > 4, "MP3 output too short: {} bytes", data.len());
    assert_eq!(data[0], 0xFF, "missing MPEG sync byte");
    assert_eq!(data[1] & 0xE0, 0xE0, "missing MPEG sync bits");
}
