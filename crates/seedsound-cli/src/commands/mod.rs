//! CLI command implementations

pub mod export;
pub mod locales;
pub mod page;
pub mod song;

use anyhow::{Context, Result};
use seedsound_spec::{PageRequest, MAX_LIKES};
use serde::Serialize;

/// Largest page the CLI will request.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Clamps the likes target into the range the core accepts.
///
/// NaN passes through so the core can reject it.
pub fn clamp_likes(likes: f64) -> f64 {
    likes.clamp(0.0, MAX_LIKES)
}

/// Clamps a page size to `1..=MAX_PAGE_SIZE`.
pub fn clamp_page_size(page_size: u32) -> u32 {
    page_size.clamp(1, MAX_PAGE_SIZE)
}

/// Builds a page request with boundary clamping applied.
pub fn page_request(locale: &str, seed: i64, likes: f64, page: u32, page_size: u32) -> PageRequest {
    PageRequest {
        locale: locale.to_string(),
        seed,
        average_likes: clamp_likes(likes),
        page,
        page_size: clamp_page_size(page_size),
    }
}

/// Serializes a value for stdout.
pub(crate) fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("Failed to serialize output")
}
