//! Reference [`Encoder`] producing tagged 16-bit WAV files.

use crate::encode::{EncodeError, EncodeResult, Encoder, TagRecord};
use crate::pcm::Pcm16;

use super::format::WavFormat;
use super::writer::{write_wav_to_vec, InfoTag};

/// Lossless mono WAV encoder.
///
/// Tags go into a `LIST/INFO` chunk: `INAM` title, `IART` artist,
/// `IPRD` album, `ICRD` year.
#[derive(Debug, Clone, Copy, Default)]
pub struct WavEncoder;

impl WavEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Encoder for WavEncoder {
    fn name(&self) -> &'static str {
        "wav"
    }

    fn extension(&self) -> &'static str {
        "wav"
    }

    fn encode(&self, pcm: &Pcm16, tags: &TagRecord) -> EncodeResult<Vec<u8>> {
        if pcm.sample_rate == 0 {
            return Err(EncodeError::failed(self.name(), "sample rate must be > 0"));
        }

        let year = tags.year.to_string();
        let info = [
            InfoTag::new(b"INAM", &tags.title),
            InfoTag::new(b"IART", &tags.artist),
            InfoTag::new(b"IPRD", &tags.album),
            InfoTag::new(b"ICRD", &year),
        ];

        let format = WavFormat::mono(pcm.sample_rate);
        Ok(write_wav_to_vec(&format, &pcm.to_le_bytes(), &info)?)
    }
}
