//! Catalog error types.

use seedsound_backend_audio::{AudioError, EncodeError};
use seedsound_spec::{BackendError, SpecError};
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors surfaced by generation and export.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request was rejected before any generation ran.
    #[error(transparent)]
    InvalidArgument(#[from] SpecError),

    /// A generated score failed validation in the renderer.
    #[error("song {index}: {source}")]
    InvalidComposition {
        /// Catalog index of the song.
        index: u32,
        #[source]
        source: AudioError,
    },

    /// The encoder failed for one song.
    #[error("song {index}: encoding failed: {source}")]
    EncodingFailed {
        /// Catalog index of the song.
        index: u32,
        #[source]
        source: EncodeError,
    },
}

impl BackendError for CatalogError {
    fn code(&self) -> &'static str {
        match self {
            CatalogError::InvalidArgument(_) => "CATALOG_001",
            CatalogError::InvalidComposition { .. } => "CATALOG_002",
            CatalogError::EncodingFailed { .. } => "CATALOG_003",
        }
    }

    fn category(&self) -> &'static str {
        "catalog"
    }
}
