//! Filename-based PCM parameter inference

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::codec::pcm::{PcmConfig, SUPPORTED_BIT_DEPTHS};
use crate::error::{Error, Result};

static SAMPLE_RATE_REGEX: OnceLock<Regex> = OnceLock::new();
static BIT_DEPTH_REGEX: OnceLock<Regex> = OnceLock::new();
static CHANNEL_REGEX: OnceLock<Regex> = OnceLock::new();

fn sample_rate_regex() -> &'static Regex {
    SAMPLE_RATE_REGEX
        .get_or_init(|| Regex::new(r"(\d+(?:\.\d+)?)(khz|hz|k)").expect("invalid regex pattern"))
}

fn bit_depth_regex() -> &'static Regex {
    BIT_DEPTH_REGEX.get_or_init(|| Regex::new(r"(\d+)bits?").expect("invalid regex pattern"))
}

fn channel_regex() -> &'static Regex {
    CHANNEL_REGEX.get_or_init(|| {
        Regex::new(r"单声道|mono|双声道|立体声|stereo|1ch|2ch").expect("invalid regex pattern")
    })
}

/// Infer a PCM layout from tokens embedded in a file name
///
/// Recognized tokens (case-insensitive, last occurrence wins per field):
/// - sample rate: a number followed by `k`/`khz` (kilohertz) or `hz`,
///   such as `8k`, `44.1khz` or `8000hz`
/// - bit depth: `8bit`, `16bit`, `24bit` or `32bit` (plural `bits` too)
/// - channels: `单声道`, `mono` or `1ch` for mono; `双声道`, `立体声`,
///   `stereo` or `2ch` for stereo
///
/// Directory components are ignored. Fields without a recognized token fall
/// back to CD quality (44.1 kHz, stereo, 16-bit); only an empty name or a
/// name without an extension is an error. Tokens that would produce an
/// out-of-range value, such as `0k`, are skipped.
pub fn infer_from_filename(filename: &str) -> Result<PcmConfig> {
    let name = Path::new(filename)
        .file_name()
        .ok_or_else(|| Error::inference(format!("Invalid file name: {:?}", filename)))?
        .to_string_lossy()
        .into_owned();
    if Path::new(&name).extension().is_none() {
        return Err(Error::inference(format!(
            "File name has no extension: {:?}",
            name
        )));
    }

    let lowered = name.to_lowercase();
    let fallback = PcmConfig::cd_quality();
    let sample_rate = last_sample_rate(&lowered).unwrap_or(fallback.sample_rate());
    let channels = last_channels(&lowered).unwrap_or(fallback.channels());
    let bits_per_sample = last_bit_depth(&lowered).unwrap_or(fallback.bits_per_sample());

    debug!(
        "Inferred {} Hz, {} ch, {} bit from {:?}",
        sample_rate, channels, bits_per_sample, name
    );
    PcmConfig::new(sample_rate, channels, bits_per_sample)
}

/// True when the byte at `pos` extends a token into a longer word,
/// as in `128kbps` or `16bitrate`
fn token_continues(bytes: &[u8], pos: usize) -> bool {
    bytes.get(pos).is_some_and(|b| b.is_ascii_alphabetic())
}

fn last_sample_rate(name: &str) -> Option<u32> {
    let bytes = name.as_bytes();
    let mut rate = None;
    for caps in sample_rate_regex().captures_iter(name) {
        let (whole, number, unit) = match (caps.get(0), caps.get(1), caps.get(2)) {
            (Some(w), Some(n), Some(u)) => (w, n, u),
            _ => continue,
        };
        if token_continues(bytes, whole.end()) {
            continue;
        }
        let value: f64 = match number.as_str().parse() {
            Ok(v) => v,
            Err(_) => continue,
        };
        let hz = match unit.as_str() {
            "hz" => value.round(),
            _ => (value * 1000.0).round(),
        };
        if hz >= 1.0 && hz <= f64::from(u32::MAX) {
            rate = Some(hz as u32);
        }
    }
    rate
}

fn last_bit_depth(name: &str) -> Option<u16> {
    let bytes = name.as_bytes();
    let mut depth = None;
    for caps in bit_depth_regex().captures_iter(name) {
        let (whole, number) = match (caps.get(0), caps.get(1)) {
            (Some(w), Some(n)) => (w, n),
            _ => continue,
        };
        if token_continues(bytes, whole.end()) {
            continue;
        }
        let value: u16 = match number.as_str().parse() {
            Ok(v) => v,
            Err(_) => continue,
        };
        if SUPPORTED_BIT_DEPTHS.contains(&value) {
            depth = Some(value);
        }
    }
    depth
}

fn last_channels(name: &str) -> Option<u16> {
    let mut channels = None;
    for token in channel_regex().find_iter(name) {
        channels = Some(match token.as_str() {
            "单声道" | "mono" | "1ch" => 1,
            _ => 2,
        });
    }
    channels
}
