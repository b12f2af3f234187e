//! Codec implementations (PCM input, MP3 output)

pub mod mp3;
pub mod pcm;

pub use mp3::{Mp3Bitrate, Mp3Config, Mp3Encoder, Mp3Quality};
pub use pcm::{PcmConfig, PcmDecoder, SampleBuffer};
