//! Encoder contract.
//!
//! An encoder turns PCM audio plus a tag record into a distributable file.
//! The crate ships [`WavEncoder`](crate::wav::WavEncoder); compressed
//! formats plug in through the same trait.

use std::io;

use seedsound_spec::{BackendError, Song};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pcm::Pcm16;

/// Result type for encoding.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Errors raised by encoders.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The encoder rejected its input or failed internally.
    #[error("{encoder} encoder failed: {message}")]
    Failed {
        /// Encoder name.
        encoder: &'static str,
        /// Error message.
        message: String,
    },

    /// I/O error while writing the container.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl EncodeError {
    /// Creates an encoder failure.
    pub fn failed(encoder: &'static str, message: impl Into<String>) -> Self {
        Self::Failed {
            encoder,
            message: message.into(),
        }
    }
}

impl BackendError for EncodeError {
    fn code(&self) -> &'static str {
        match self {
            EncodeError::Failed { .. } => "ENCODE_001",
            EncodeError::Io(_) => "ENCODE_002",
        }
    }

    fn category(&self) -> &'static str {
        "encode"
    }
}

/// Metadata embedded in an encoded file.
///
/// `year` is always supplied by the caller, never read from the clock, so
/// re-encoding the same song yields the same bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: u16,
}

impl TagRecord {
    /// Tags for a generated song.
    pub fn for_song(song: &Song, year: u16) -> Self {
        Self {
            title: song.title.clone(),
            artist: song.artist.clone(),
            album: song.album.clone(),
            year,
        }
    }
}

/// Turns PCM plus tags into file bytes.
///
/// Implementations must be deterministic: equal inputs give equal bytes.
pub trait Encoder: Send + Sync {
    /// Short name for logs and errors.
    fn name(&self) -> &'static str;

    /// File extension without the dot, e.g. `"wav"`.
    fn extension(&self) -> &'static str;

    /// Encodes one song.
    fn encode(&self, pcm: &Pcm16, tags: &TagRecord) -> EncodeResult<Vec<u8>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = EncodeError::failed("mp3", "bitrate unsupported");
        assert_eq!(err.code(), "ENCODE_001");
        assert_eq!(err.to_string(), "mp3 encoder failed: bitrate unsupported");

        let err = EncodeError::from(io::Error::new(io::ErrorKind::Other, "disk"));
        assert_eq!(err.code(), "ENCODE_002");
        assert_eq!(err.category(), "encode");
    }
}
