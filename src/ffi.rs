//! C ABI for embedding in mobile and native applications
//!
//! Every conversion entry point is mirrored here with C-compatible types.
//! Functions return 0 on success and -1 on failure; the failure message is
//! recorded in a per-thread slot and retrieved with [`get_last_error`].
//! Strings returned by this module are owned by the caller and must be
//! released with [`free_string`].

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};
use std::path::Path;

use crate::codec::mp3::{Mp3Bitrate, Mp3Config, Mp3Quality};
use crate::codec::pcm::PcmConfig;
use crate::convert;
use crate::error::{Error, Result};
use crate::format::AudioFormat;
use crate::probe;

/// Return code for success
pub const FFI_OK: c_int = 0;
/// Return code for failure; details via [`get_last_error`]
pub const FFI_ERROR: c_int = -1;

thread_local! {
    /// Last failure recorded on this thread
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// C-compatible PCM configuration
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CPcmConfig {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels (1 = mono, 2 = stereo)
    pub channels: u16,
    /// Bits per sample
    pub bits_per_sample: u16,
}

/// C-compatible MP3 configuration
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CMp3Config {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels (1 = mono, 2 = stereo)
    pub channels: u8,
    /// Bitrate in kbps (64, 128, 192, 256 or 320)
    pub bitrate: u32,
    /// Quality level, 0 (lowest) to 3 (best)
    pub quality: u8,
}

/// C-compatible output format selector
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CAudioFormat {
    Wav = 0,
    Mp3 = 1,
}

impl TryFrom<CPcmConfig> for PcmConfig {
    type Error = Error;

    fn try_from(config: CPcmConfig) -> Result<Self> {
        PcmConfig::new(config.sample_rate, config.channels, config.bits_per_sample)
    }
}

impl From<PcmConfig> for CPcmConfig {
    fn from(config: PcmConfig) -> Self {
        CPcmConfig {
            sample_rate: config.sample_rate(),
            channels: config.channels(),
            bits_per_sample: config.bits_per_sample(),
        }
    }
}

impl TryFrom<CMp3Config> for Mp3Config {
    type Error = Error;

    fn try_from(config: CMp3Config) -> Result<Self> {
        Mp3Config::new(
            config.sample_rate,
            config.channels,
            Mp3Bitrate::from_kbps(config.bitrate)?,
            Mp3Quality::from_level(config.quality)?,
        )
    }
}

impl From<CAudioFormat> for AudioFormat {
    fn from(format: CAudioFormat) -> Self {
        match format {
            CAudioFormat::Wav => AudioFormat::Wav,
            CAudioFormat::Mp3 => AudioFormat::Mp3,
        }
    }
}

fn set_last_error(err: &Error) {
    let msg = CString::new(err.to_string()).unwrap_or_default();
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some(msg));
}

fn report<T>(result: Result<T>) -> c_int {
    match result {
        Ok(_) => FFI_OK,
        Err(err) => {
            set_last_error(&err);
            FFI_ERROR
        }
    }
}

/// # Safety
/// `ptr` must be null or point to a NUL-terminated string valid for reads.
unsafe fn c_str_to_string(ptr: *const c_char) -> Result<String> {
    if ptr.is_null() {
        return Err(Error::invalid_input("Null pointer provided"));
    }
    let c_str = unsafe { CStr::from_ptr(ptr) };
    Ok(c_str
        .to_str()
        .map_err(|_| Error::invalid_input("Path is not valid UTF-8"))?
        .to_owned())
}

/// Convert a raw PCM file to WAV
///
/// Passing a null `config` uses the default layout (44.1 kHz, stereo,
/// 16-bit). Returns 0 on success, -1 on failure.
///
/// # Safety
/// `input_path` and `output_path` must be NUL-terminated strings valid for
/// reads; `config` must be null or point to a valid [`CPcmConfig`].
#[no_mangle]
pub unsafe extern "C" fn pcm_to_wav(
    input_path: *const c_char,
    output_path: *const c_char,
    config: *const CPcmConfig,
) -> c_int {
    let result = (|| -> Result<()> {
        let input = unsafe { c_str_to_string(input_path)? };
        let output = unsafe { c_str_to_string(output_path)? };
        let config = if config.is_null() {
            None
        } else {
            Some(PcmConfig::try_from(unsafe { *config })?)
        };
        convert::pcm_to_wav(Path::new(&input), Path::new(&output), config)
    })();
    report(result)
}

/// Convert a raw PCM file to MP3
///
/// Passing a null `config` uses the standard preset (44.1 kHz stereo at
/// 192 kbps). Returns 0 on success, -1 on failure.
///
/// # Safety
/// `input_path` and `output_path` must be NUL-terminated strings valid for
/// reads; `config` must be null or point to a valid [`CMp3Config`].
#[no_mangle]
pub unsafe extern "C" fn pcm_to_mp3(
    input_path: *const c_char,
    output_path: *const c_char,
    config: *const CMp3Config,
) -> c_int {
    let result = (|| -> Result<()> {
        let input = unsafe { c_str_to_string(input_path)? };
        let output = unsafe { c_str_to_string(output_path)? };
        let config = if config.is_null() {
            None
        } else {
            Some(Mp3Config::try_from(unsafe { *config })?)
        };
        convert::pcm_to_mp3(Path::new(&input), Path::new(&output), config)
    })();
    report(result)
}

/// Convert a raw PCM file, inferring its layout from the file name
///
/// Returns 0 on success, -1 on failure.
///
/// # Safety
/// `input_path` and `output_path` must be NUL-terminated strings valid for
/// reads.
#[no_mangle]
pub unsafe extern "C" fn auto_convert_audio(
    input_path: *const c_char,
    output_path: *const c_char,
    format: CAudioFormat,
) -> c_int {
    let result = (|| -> Result<()> {
        let input = unsafe { c_str_to_string(input_path)? };
        let output = unsafe { c_str_to_string(output_path)? };
        convert::auto_convert(Path::new(&input), Path::new(&output), format.into())?;
        Ok(())
    })();
    report(result)
}

/// Infer a PCM configuration from a file name, writing it to `config`
///
/// Returns 0 on success, -1 on failure.
///
/// # Safety
/// `filename` must be a NUL-terminated string valid for reads; `config`
/// must point to a [`CPcmConfig`] valid for writes.
#[no_mangle]
pub unsafe extern "C" fn infer_config_from_filename(
    filename: *const c_char,
    config: *mut CPcmConfig,
) -> c_int {
    let result = (|| -> Result<()> {
        let name = unsafe { c_str_to_string(filename)? };
        if config.is_null() {
            return Err(Error::invalid_input("Null config pointer provided"));
        }
        let inferred = probe::infer_from_filename(&name)?;
        unsafe {
            *config = CPcmConfig::from(inferred);
        }
        Ok(())
    })();
    report(result)
}

/// Take the message of the last failure on this thread
///
/// Returns an owned string to be released with [`free_string`], or null
/// when no failure has been recorded since the last call.
#[no_mangle]
pub extern "C" fn get_last_error() -> *mut c_char {
    LAST_ERROR.with(|slot| match slot.borrow_mut().take() {
        Some(msg) => msg.into_raw(),
        None => std::ptr::null_mut(),
    })
}

/// Release a string returned by this library
///
/// Accepts null as a no-op.
///
/// # Safety
/// `ptr` must be null or a pointer previously returned by
/// [`get_last_error`] or [`get_version`], and must not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(unsafe { CString::from_raw(ptr) });
    }
}

/// Get the library version as an owned string
///
/// Release the result with [`free_string`].
#[no_mangle]
pub extern "C" fn get_version() -> *mut c_char {
    match CString::new(crate::VERSION) {
        Ok(version) => version.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}
