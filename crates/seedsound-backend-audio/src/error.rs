//! Error types for audio backend.

use std::fmt;

use seedsound_spec::BackendError;
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Track of a score an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Melody,
    Drums,
    Bass,
    /// Properties of the score as a whole.
    Score,
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Track::Melody => "melody",
            Track::Drums => "drums",
            Track::Bass => "bass",
            Track::Score => "score",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during audio rendering.
#[derive(Debug, Error)]
pub enum AudioError {
    /// A malformed event reached the renderer.
    #[error("invalid composition: {track} event {index}: {message}")]
    InvalidComposition {
        /// Track holding the event.
        track: Track,
        /// Position of the event within its track.
        index: usize,
        /// What is wrong with it.
        message: String,
    },
}

impl AudioError {
    /// Creates an invalid composition error.
    pub fn invalid_composition(track: Track, index: usize, message: impl Into<String>) -> Self {
        Self::InvalidComposition {
            track,
            index,
            message: message.into(),
        }
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidComposition { .. } => "AUDIO_001",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_composition_helper() {
        let err = AudioError::invalid_composition(Track::Bass, 3, "duration must be > 0");
        assert_eq!(
            err.to_string(),
            "invalid composition: bass event 3: duration must be > 0"
        );
        assert_eq!(err.code(), "AUDIO_001");
        assert_eq!(err.category(), "audio");
    }
}
