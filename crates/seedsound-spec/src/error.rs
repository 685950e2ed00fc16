//! Error types shared across the SeedSound backends.

use thiserror::Error;

/// Result type for request validation.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors raised while validating a generation request.
///
/// The core rejects out-of-range arguments instead of clamping them; clamping
/// is the job of whatever boundary (CLI, HTTP layer) builds the request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecError {
    /// An argument is outside its valid domain.
    #[error("invalid argument '{name}': {message}")]
    InvalidArgument {
        /// Argument name.
        name: &'static str,
        /// What is wrong with it.
        message: String,
    },
}

impl SpecError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            message: message.into(),
        }
    }
}

impl BackendError for SpecError {
    fn code(&self) -> &'static str {
        match self {
            SpecError::InvalidArgument { .. } => "SPEC_001",
        }
    }

    fn category(&self) -> &'static str {
        "request"
    }
}

/// Common trait for backend errors.
///
/// This trait provides a unified interface for error reporting across all
/// backends. Each backend error type implements this trait to enable:
/// - Consistent error codes for reporting
/// - Human-readable messages for users
/// - Grouping by category in batch summaries
///
/// # Example
///
/// ```ignore
/// use seedsound_spec::error::BackendError;
///
/// fn handle_error<E: BackendError>(err: E) {
///     eprintln!("[{}] {}", err.code(), err.message());
/// }
/// ```
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "AUDIO_001" or "CATALOG_002".
    /// These codes are stable and can be used for programmatic
    /// error handling.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    ///
    /// Returns a category like "request", "audio", "encode", "catalog".
    fn category(&self) -> &'static str;
}
