//! SeedSound Canonical Song Library
//!
//! This crate provides the value types, request validation, seed derivation and
//! the pinned random stream shared by every SeedSound backend.
//!
//! # Overview
//!
//! A song is addressed by `(seed, index, locale)`. The seed and index are mixed
//! into four independent sub-seeds ([`seed::derive_song_seeds`]); each sub-seed
//! drives its own [`rng::StreamRng`]. The backends consume these streams in a
//! fixed order, so identical inputs always reproduce identical songs.
//!
//! # Example
//!
//! ```
//! use seedsound_spec::{derive_song_seeds, SongRequest, StreamRng};
//!
//! let request = SongRequest::new("en_US", 12345, 5.0, 1);
//! request.validate().unwrap();
//!
//! let seeds = derive_song_seeds(request.seed, request.index);
//! let mut text_rng = StreamRng::new(seeds.text);
//! let first = text_rng.below(5);
//! assert!(first < 5);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Request errors and the [`BackendError`] reporting trait
//! - [`request`]: Song and page requests
//! - [`rng`]: PCG32 stream with pinned draw primitives
//! - [`seed`]: Per-song sub-seed derivation
//! - [`song`]: Song, score and cover types

pub mod error;
pub mod request;
pub mod rng;
pub mod seed;
pub mod song;

// Re-export commonly used types at the crate root
pub use error::{BackendError, SpecError, SpecResult};
pub use request::{PageRequest, SongPage, SongRequest, DEFAULT_LOCALE, MAX_LIKES};
pub use rng::{create_rng, StreamRng};
pub use seed::{derive_song_seeds, SongSeeds};
pub use song::{
    duration_ms_for_tempo, BassNote, CoverImage, CoverPattern, DrumEvent, DrumKind, Instrument,
    Key, Mode, MusicData, NoteEvent, Song, BARS, BEATS_PER_BAR, PITCH_CLASS_NAMES,
    RELEASE_TAIL_SECONDS,
};
