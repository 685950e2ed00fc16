//! Song command implementation
//!
//! Generates a single catalog entry and prints it as JSON.

use std::process::ExitCode;

use anyhow::{Context, Result};
use seedsound_catalog::generate_song;
use seedsound_spec::SongRequest;

use super::{clamp_likes, to_json};

/// Run the song command
///
/// # Arguments
/// * `locale` - Locale code
/// * `seed` - Base seed
/// * `likes` - Average likes, clamped to [0, 10]
/// * `index` - 1-based catalog index
/// * `genre` - Optional genre override
/// * `pretty` - Pretty-print the JSON
///
/// # Returns
/// Exit code: 0 success
pub fn run(
    locale: &str,
    seed: i64,
    likes: f64,
    index: u32,
    genre: Option<&str>,
    pretty: bool,
) -> Result<ExitCode> {
    println!("{}", render(locale, seed, likes, index, genre, pretty)?);
    Ok(ExitCode::SUCCESS)
}

/// Generates the song and returns its JSON text.
pub fn render(
    locale: &str,
    seed: i64,
    likes: f64,
    index: u32,
    genre: Option<&str>,
    pretty: bool,
) -> Result<String> {
    let mut request = SongRequest::new(locale, seed, clamp_likes(likes), index);
    if let Some(genre) = genre {
        request = request.with_genre(genre);
    }

    let song = generate_song(&request)
        .with_context(|| format!("Failed to generate song {index}"))?;
    to_json(&song, pretty)
}
