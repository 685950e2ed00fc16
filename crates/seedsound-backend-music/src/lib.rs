//! SeedSound Music Backend - Deterministic Song Composition
//!
//! Turns a music sub-seed and a genre name into a [`MusicData`] score:
//! tempo, key, a melody, a drum pattern and a bass line over 16 bars of 4/4.
//!
//! # Determinism
//!
//! [`compose`] draws from a single PCG32 stream in a fixed order (see the
//! [`compose`](mod@compose) module docs). Genre settings come from a static
//! table, so the same `(seed, genre)` pair always yields the same score.
//!
//! # Example
//!
//! ```
//! use seedsound_backend_music::compose;
//!
//! let music = compose(506_204, "Rock");
//! assert!((110..=140).contains(&music.tempo));
//! assert!(!music.notes.is_empty());
//! ```
//!
//! [`MusicData`]: seedsound_spec::MusicData

pub mod compose;
pub mod genre;
pub mod note;
pub mod scale;

pub use compose::{compose, compose_with_traits};
pub use genre::{
    find_genre, genre_traits, known_genres, DrumStyle, GenreTraits, MAX_TEMPO, MIN_TEMPO,
};
pub use note::{midi_to_freq, note_name, transpose};
pub use scale::{Progression, Scale, CHORD_PROGRESSIONS};

/// Crate version for backend identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
