//! Generation requests and their validation.
//!
//! Requests are plain serde structs so callers can load them from JSON. The
//! core validates and rejects; it never clamps.

use serde::{Deserialize, Serialize};

use crate::error::{SpecError, SpecResult};
use crate::song::Song;

/// Locale used when a request does not name one.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Upper bound of the likes scale.
pub const MAX_LIKES: f64 = 10.0;

/// Request for a single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongRequest {
    /// Locale code; unknown codes fall back to the default pack.
    #[serde(default = "default_locale")]
    pub locale: String,
    pub seed: i64,
    /// Target mean of the likes distribution, in `[0, 10]`.
    pub average_likes: f64,
    /// 1-based catalog index.
    pub index: u32,
    /// Overrides the drawn genre when present.
    #[serde(default)]
    pub genre: Option<String>,
}

impl SongRequest {
    /// Creates a request with no genre hint.
    pub fn new(locale: impl Into<String>, seed: i64, average_likes: f64, index: u32) -> Self {
        Self {
            locale: locale.into(),
            seed,
            average_likes,
            index,
            genre: None,
        }
    }

    /// Sets the genre hint.
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Checks index and likes bounds.
    pub fn validate(&self) -> SpecResult<()> {
        validate_index(self.index)?;
        validate_average_likes(self.average_likes)
    }
}

/// Request for a page of consecutive catalog entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_locale")]
    pub locale: String,
    pub seed: i64,
    pub average_likes: f64,
    /// 1-based page number.
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    /// Checks page, page size and likes bounds.
    pub fn validate(&self) -> SpecResult<()> {
        if self.page < 1 {
            return Err(SpecError::invalid_argument(
                "page",
                format!("must be at least 1, got {}", self.page),
            ));
        }
        if self.page_size < 1 {
            return Err(SpecError::invalid_argument(
                "page_size",
                format!("must be at least 1, got {}", self.page_size),
            ));
        }
        self.first_index()?;
        validate_average_likes(self.average_likes)
    }

    /// Catalog index of the first entry on this page.
    pub fn first_index(&self) -> SpecResult<u32> {
        (self.page as u64)
            .checked_sub(1)
            .and_then(|pages_before| pages_before.checked_mul(self.page_size as u64))
            .and_then(|offset| offset.checked_add(self.page_size as u64))
            .filter(|&last| last <= u32::MAX as u64)
            .map(|last| (last - self.page_size as u64 + 1) as u32)
            .ok_or_else(|| {
                SpecError::invalid_argument(
                    "page",
                    format!(
                        "page {} of size {} runs past the last catalog index",
                        self.page, self.page_size
                    ),
                )
            })
    }

    /// The single-song request for catalog entry `index`.
    pub fn song_request(&self, index: u32) -> SongRequest {
        SongRequest::new(self.locale.clone(), self.seed, self.average_likes, index)
    }
}

/// A page of generated songs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongPage {
    pub songs: Vec<Song>,
    pub page: u32,
    pub page_size: u32,
    /// Always true: the catalog is unbounded.
    pub has_more: bool,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

/// Rejects index 0.
pub fn validate_index(index: u32) -> SpecResult<()> {
    if index < 1 {
        return Err(SpecError::invalid_argument(
            "index",
            format!("must be at least 1, got {index}"),
        ));
    }
    Ok(())
}

/// Rejects likes targets outside `[0, 10]`, including NaN.
pub fn validate_average_likes(average_likes: f64) -> SpecResult<()> {
    if !(0.0..=MAX_LIKES).contains(&average_likes) {
        return Err(SpecError::invalid_argument(
            "average_likes",
            format!("must be within [0, 10], got {average_likes}"),
        ));
    }
    Ok(())
}
