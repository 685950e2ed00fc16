//! Symbolic composition of a song.
//!
//! [`compose`] is a pure function of the music sub-seed and the genre name.
//! One [`StreamRng`] feeds every draw, in this order:
//!
//! 1. tempo, uniform in the genre's inclusive bounds
//! 2. scale (`below(3)`)
//! 3. root note, `48 + below(12)`
//! 4. chord progression (`below(8)`)
//! 5. melody: start degree, instrument, then per bar a rhythm template and
//!    per slot the note draws
//! 6. drums: per bar, per beat
//! 7. bass: offset pattern and rhythm pattern, once per song
//!
//! Structural choices always precede per-note randomness, so two songs that
//! share a seed share tempo, key and progression regardless of later tracks.

mod bass;
mod drums;
mod melody;

#[cfg(test)]
mod tests;

use seedsound_spec::{duration_ms_for_tempo, Key, MusicData, StreamRng, BARS, BEATS_PER_BAR};
use tracing::trace;

use crate::genre::{genre_traits, GenreTraits};
use crate::scale::{Progression, Scale, CHORD_PROGRESSIONS};

/// Lowest root note (C3).
pub const ROOT_BASE: u8 = 48;

/// Harmonic frame shared by all tracks of a song.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Harmony {
    pub scale: Scale,
    pub root: u8,
    pub progression: Progression,
    pub beat_seconds: f64,
}

impl Harmony {
    /// Chord root for a bar, `base` semitones up the progression.
    pub fn chord_root(&self, base: u8, bar: u32) -> u8 {
        let degree = self.progression[(bar % 4) as usize];
        base + self.scale.degree(degree)
    }

    /// Start of a bar in seconds.
    pub fn bar_start(&self, bar: u32) -> f64 {
        (bar * BEATS_PER_BAR) as f64 * self.beat_seconds
    }
}

/// Composes the score for one song.
pub fn compose(music_seed: u32, genre: &str) -> MusicData {
    compose_with_traits(music_seed, &genre_traits(genre))
}

/// Composes with explicit genre settings.
///
/// Tempo bounds outside `MIN_TEMPO..=MAX_TEMPO`, or inverted ones, are
/// clamped through [`GenreTraits::tempo_range`].
pub fn compose_with_traits(music_seed: u32, traits: &GenreTraits) -> MusicData {
    let mut rng = StreamRng::new(music_seed);

    let (min_tempo, max_tempo) = traits.tempo_range();
    let tempo = rng.range_inclusive(min_tempo as i32, max_tempo as i32) as u32;
    let scale = Scale::choose(&mut rng, traits.prefer_minor);
    let root = ROOT_BASE + rng.below(12) as u8;
    let progression = *rng.pick(&CHORD_PROGRESSIONS);

    let harmony = Harmony {
        scale,
        root,
        progression,
        beat_seconds: 60.0 / tempo as f64,
    };

    let notes = melody::compose_melody(&mut rng, &harmony);
    let drums = drums::compose_drums(&mut rng, &harmony, traits.drum_style);
    let bass = bass::compose_bass(&mut rng, &harmony);

    trace!(
        tempo,
        root,
        notes = notes.len(),
        drums = drums.len(),
        bass = bass.len(),
        "composed {} bars",
        BARS
    );

    MusicData {
        tempo,
        key: Key::from_midi(root, scale.mode()),
        notes,
        drums,
        bass,
        duration_ms: duration_ms_for_tempo(tempo),
    }
}
