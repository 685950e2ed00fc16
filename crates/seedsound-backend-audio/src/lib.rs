//! SeedSound Audio Backend - Deterministic Song Rendering
//!
//! Renders a [`MusicData`](seedsound_spec::MusicData) score to a normalized
//! mono buffer at 44.1 kHz, quantizes it to 16-bit PCM and hands it to an
//! [`Encoder`].
//!
//! # Determinism
//!
//! - Tones and kicks are pure functions of their event.
//! - Snare and hi-hat noise comes from a PCG32 stream seeded per hit from
//!   the hit's own timestamp (see [`rng`]).
//! - The WAV container carries no timestamps.
//!
//! # Example
//!
//! ```
//! use seedsound_backend_audio::{render, Encoder, TagRecord, WavEncoder};
//! use seedsound_backend_music::compose;
//!
//! let music = compose(506_204, "Rock");
//! let audio = render(&music).unwrap();
//! assert!(audio.peak() <= 0.9);
//!
//! let tags = TagRecord {
//!     title: "Title".into(),
//!     artist: "Artist".into(),
//!     album: "Album".into(),
//!     year: 2024,
//! };
//! let wav = WavEncoder::new().encode(&audio.to_pcm16(), &tags).unwrap();
//! assert_eq!(&wav[0..4], b"RIFF");
//! ```

pub mod encode;
pub mod envelope;
pub mod error;
pub mod filter;
pub mod mixer;
pub mod pcm;
pub mod render;
pub mod rng;
pub mod synthesis;
pub mod wav;

pub use encode::{EncodeError, EncodeResult, Encoder, TagRecord};
pub use error::{AudioError, AudioResult, Track};
pub use pcm::{samples_to_pcm16, Pcm16};
pub use render::{render, render_pcm16, sample_count, RenderedAudio, SAMPLE_RATE, TARGET_PEAK};
pub use wav::WavEncoder;

/// Crate version for backend identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
