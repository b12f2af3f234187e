//! Error types for pcmkit

use thiserror::Error;

/// Result type alias for pcmkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for pcmkit
#[derive(Error, Debug)]
pub enum Error {
    /// IO error from reading input or writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration field lies outside its allowed set
    #[error("Validation error: {0}")]
    Validation(String),

    /// The encoding engine rejected its parameters or failed mid-stream
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Filename inference could not run at all
    #[error("Inference error: {0}")]
    Inference(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Payload too large for the WAV 32-bit size fields
    #[error("Payload too large: {size} bytes exceeds the WAV limit of {max}")]
    TooLarge { size: u64, max: u64 },

    /// Initialization error
    #[error("Initialization error: {0}")]
    Init(String),
}

impl Error {
    /// Create a validation error
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Error::Validation(msg.into())
    }

    /// Create an encoding error
    pub fn encoding<S: Into<String>>(msg: S) -> Self {
        Error::Encoding(msg.into())
    }

    /// Create an inference error
    pub fn inference<S: Into<String>>(msg: S) -> Self {
        Error::Inference(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Create an initialization error
    pub fn init<S: Into<String>>(msg: S) -> Self {
        Error::Init(msg.into())
    }
}
