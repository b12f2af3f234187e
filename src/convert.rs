//! Conversion entry points
//!
//! Ties probing, WAV muxing and MP3 encoding together into the three
//! operations the library exposes: wrap PCM into WAV, encode PCM to MP3,
//! and the automatic path that infers the PCM layout from the file name.
//!
//! All entry points share the same hygiene: the input must carry a `.pcm`
//! extension, the input handle is closed before the output is opened, and
//! a partially written output file is removed before an error propagates.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::codec::mp3::{Mp3Config, Mp3Encoder};
use crate::codec::pcm::{PcmConfig, PcmDecoder};
use crate::error::{Error, Result};
use crate::format::wav::WavMuxer;
use crate::format::AudioFormat;
use crate::probe;

/// Extension required on conversion input paths
const PCM_EXTENSION: &str = "pcm";

/// Wrap a raw PCM file into a canonical WAV file
///
/// `config` describes the layout of the input; `None` uses the CD-quality
/// default (44.1 kHz, stereo, 16-bit). The PCM payload is copied untouched.
pub fn pcm_to_wav(input: &Path, output: &Path, config: Option<PcmConfig>) -> Result<()> {
    let request = ConversionRequest::new(input, output)?;
    let config = config.unwrap_or_default();
    debug!("PCM -> WAV with {:?}", config);

    let written = mux_wav_file(&request, &config)?;
    info!(
        "Converted {} -> {} ({} bytes WAV)",
        input.display(),
        output.display(),
        written
    );
    Ok(())
}

/// Encode a raw PCM file to MP3
///
/// `config` selects the bitrate and quality and describes the input, which
/// is taken to be 16-bit PCM at the configured rate and channel count;
/// `None` uses the standard preset (44.1 kHz stereo at 192 kbps).
pub fn pcm_to_mp3(input: &Path, output: &Path, config: Option<Mp3Config>) -> Result<()> {
    let request = ConversionRequest::new(input, output)?;
    let config = config.unwrap_or_default();
    debug!("PCM -> MP3 with {:?}", config);

    let layout = PcmConfig::new(config.sample_rate(), u16::from(config.channels()), 16)?;
    let written = encode_mp3_file(&request, &layout, &config)?;
    info!(
        "Converted {} -> {} ({} bytes MP3 at {} kbps)",
        input.display(),
        output.display(),
        written,
        config.bitrate().kbps()
    );
    Ok(())
}

/// Convert a raw PCM file, inferring its layout from the file name
///
/// The inferred [`PcmConfig`] drives the conversion and is returned so the
/// caller can see what was assumed. For MP3 output the bitrate and quality
/// follow the source's quality tier.
pub fn auto_convert(input: &Path, output: &Path, format: AudioFormat) -> Result<PcmConfig> {
    let request = ConversionRequest::new(input, output)?;
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            Error::invalid_input(format!("Invalid input path: {}", input.display()))
        })?;
    let inferred = probe::infer_from_filename(&name)?;
    debug!("Auto conversion to {} using {:?}", format, inferred);

    let written = match format {
        AudioFormat::Wav => mux_wav_file(&request, &inferred)?,
        AudioFormat::Mp3 => {
            let config = Mp3Config::for_source(&inferred);
            encode_mp3_file(&request, &inferred, &config)?
        }
    };
    info!(
        "Converted {} -> {} ({} bytes {})",
        input.display(),
        output.display(),
        written,
        format
    );
    Ok(inferred)
}

/// One validated conversion call
struct ConversionRequest<'a> {
    input: &'a Path,
    output: &'a Path,
}

impl<'a> ConversionRequest<'a> {
    fn new(input: &'a Path, output: &'a Path) -> Result<Self> {
        let is_pcm = input
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case(PCM_EXTENSION))
            .unwrap_or(false);
        if !is_pcm {
            return Err(Error::invalid_input(format!(
                "Input is not a .pcm file: {}",
                input.display()
            )));
        }
        Ok(ConversionRequest { input, output })
    }

    /// Read the whole input; the handle is dropped before the output opens
    fn read_input(&self) -> Result<Vec<u8>> {
        let mut file = File::open(self.input)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        Ok(data)
    }
}

/// Removes a partially written output on drop unless disarmed
struct OutputGuard<'a> {
    path: &'a Path,
    armed: bool,
}

impl<'a> OutputGuard<'a> {
    fn new(path: &'a Path) -> Self {
        OutputGuard { path, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for OutputGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            let _ = fs::remove_file(self.path);
        }
    }
}

fn mux_wav_file(request: &ConversionRequest<'_>, config: &PcmConfig) -> Result<u64> {
    let pcm = request.read_input()?;

    let guard = OutputGuard::new(request.output);
    let written = WavMuxer::new(*config).mux_file(&pcm, request.output)?;
    guard.disarm();
    Ok(written)
}

fn encode_mp3_file(
    request: &ConversionRequest<'_>,
    layout: &PcmConfig,
    config: &Mp3Config,
) -> Result<u64> {
    let pcm = request.read_input()?;
    let samples = PcmDecoder::new(*layout).decode(&pcm);
    let mut encoder = Mp3Encoder::new(config)?;

    let guard = OutputGuard::new(request.output);
    let file = File::create(request.output)?;
    let mut writer = BufWriter::new(file);
    let mut written = encoder.encode(&samples, &mut writer)?;
    written += encoder.finish(&mut writer)?;
    writer.flush()?;
    guard.disarm();
    Ok(written)
}
