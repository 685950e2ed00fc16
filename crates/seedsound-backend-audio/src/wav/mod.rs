//! Deterministic WAV file writer.
//!
//! This module writes 16-bit PCM WAV files with a `LIST/INFO` tag chunk and
//! no timestamps, so equal input always yields equal bytes.

mod encoder;
mod format;
mod writer;


pub use encoder::WavEncoder;
pub use format::WavFormat;
pub use writer::{extract_pcm_data, write_wav, write_wav_to_vec, InfoTag};
