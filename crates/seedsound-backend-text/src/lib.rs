//! SeedSound Text Backend
//!
//! Locale word banks and the deterministic composition of song metadata:
//! title, artist, album, genre, review, lyrics, likes and cover descriptor.
//!
//! Each field group draws from its own sub-seed (see
//! [`seedsound_spec::derive_song_seeds`]):
//!
//! - text stream: [`compose_text`]
//! - likes stream: [`roll_likes`]
//! - cover stream: [`compose_cover`]
//!
//! # Example
//!
//! ```
//! use seedsound_backend_text::{compose_text, locale_pack};
//! use seedsound_spec::derive_song_seeds;
//!
//! let seeds = derive_song_seeds(12345, 1);
//! let pack = locale_pack("en_US");
//! let text = compose_text(seeds.text, pack);
//! assert!(pack.genres.contains(&text.genre.as_str()));
//! ```

pub mod compose;
pub mod cover;
pub mod likes;
pub mod locale;

pub use compose::{compose_text, SongText};
pub use cover::compose_cover;
pub use likes::roll_likes;
pub use locale::{available_locales, is_known_locale, locale_pack, LocalePack};
