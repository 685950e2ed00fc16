//! Song and symbolic score types.
//!
//! All of these are plain values: built once per generation call, never
//! mutated afterwards, and structurally identical for identical inputs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of bars in every generated song.
pub const BARS: u32 = 16;

/// Beats per bar (4/4 time).
pub const BEATS_PER_BAR: u32 = 4;

/// Tolerance past `duration_ms` that events may ring into.
///
/// Covers the integer truncation of `duration_ms` and the length of the
/// longest drum voice.
pub const RELEASE_TAIL_SECONDS: f64 = 0.2;

/// Song length in milliseconds for a tempo: `16 * 4 * 60000 / tempo`, floored.
///
/// # Example
/// ```
/// use seedsound_spec::song::duration_ms_for_tempo;
///
/// assert_eq!(duration_ms_for_tempo(120), 32_000);
/// assert_eq!(duration_ms_for_tempo(130), 29_538);
/// ```
pub fn duration_ms_for_tempo(tempo: u32) -> u32 {
    (BARS * BEATS_PER_BAR * 60_000) / tempo.max(1)
}

/// One generated catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// 1-based position in the catalog.
    pub index: u32,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    /// Integer rating in `0..=10`.
    pub likes: u8,
    pub review: String,
    pub lyrics: Vec<String>,
    pub cover: CoverImage,
    pub music: MusicData,
}

/// Cover art descriptor. Rendering it is left to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverImage {
    /// Background color as `#rrggbb`.
    pub background_color: String,
    /// Accent color as `#rrggbb`.
    pub accent_color: String,
    pub pattern: CoverPattern,
    /// Seed for the pattern renderer, in `0..1000`.
    pub pattern_seed: u32,
}

/// Cover pattern family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverPattern {
    Circles,
    Lines,
    Dots,
    Waves,
    Triangles,
    Squares,
    Gradient,
    Noise,
}

impl CoverPattern {
    /// All patterns in draw order.
    pub const ALL: [CoverPattern; 8] = [
        CoverPattern::Circles,
        CoverPattern::Lines,
        CoverPattern::Dots,
        CoverPattern::Waves,
        CoverPattern::Triangles,
        CoverPattern::Squares,
        CoverPattern::Gradient,
        CoverPattern::Noise,
    ];
}

/// The symbolic score of a song.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicData {
    /// Tempo in beats per minute.
    pub tempo: u32,
    pub key: Key,
    /// Melody events, in time order.
    pub notes: Vec<NoteEvent>,
    /// Drum hits, in time order.
    pub drums: Vec<DrumEvent>,
    /// Bass line, in time order.
    pub bass: Vec<BassNote>,
    pub duration_ms: u32,
}

impl MusicData {
    /// Length of one beat in seconds.
    pub fn beat_seconds(&self) -> f64 {
        60.0 / self.tempo as f64
    }

    /// Song length in seconds, from `duration_ms`.
    pub fn duration_seconds(&self) -> f64 {
        self.duration_ms as f64 / 1000.0
    }

    /// Total number of events across all tracks.
    pub fn event_count(&self) -> usize {
        self.notes.len() + self.drums.len() + self.bass.len()
    }
}

/// Musical key: tonic pitch class and mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    /// Pitch class of the tonic, `0` = C through `11` = B.
    pub pitch_class: u8,
    pub mode: Mode,
}

/// Names of the twelve pitch classes, sharps only.
pub const PITCH_CLASS_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

impl Key {
    /// Builds the key whose tonic is the pitch class of `midi_note`.
    pub fn from_midi(midi_note: u8, mode: Mode) -> Self {
        Self {
            pitch_class: midi_note % 12,
            mode,
        }
    }

    /// Name of the tonic, e.g. `"F#"`.
    pub fn tonic_name(&self) -> &'static str {
        PITCH_CLASS_NAMES[(self.pitch_class % 12) as usize]
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic_name(), self.mode)
    }
}

/// Major or minor tonality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Major,
    Minor,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Major => f.write_str("major"),
            Mode::Minor => f.write_str("minor"),
        }
    }
}

/// Melody voice. Chosen once per song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instrument {
    Synth,
    Piano,
    Strings,
}

impl Instrument {
    /// All instruments in draw order.
    pub const ALL: [Instrument; 3] = [Instrument::Synth, Instrument::Piano, Instrument::Strings];
}

/// A melody note.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoteEvent {
    /// Onset in seconds from the start of the song.
    pub time: f64,
    /// MIDI note number.
    pub note: u8,
    /// Length in seconds.
    pub duration: f64,
    /// Loudness in `[0, 1]`.
    pub velocity: f64,
    pub instrument: Instrument,
}

/// Drum voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrumKind {
    Kick,
    Snare,
    #[serde(rename = "hihat")]
    HiHat,
}

impl DrumKind {
    /// Stable lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            DrumKind::Kick => "kick",
            DrumKind::Snare => "snare",
            DrumKind::HiHat => "hihat",
        }
    }
}

/// A drum hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrumEvent {
    /// Onset in seconds from the start of the song.
    pub time: f64,
    pub kind: DrumKind,
    /// Loudness in `[0, 1]`.
    pub velocity: f64,
}

/// A bass note. Bass plays at a fixed gain, so it carries no velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BassNote {
    /// Onset in seconds from the start of the song.
    pub time: f64,
    /// MIDI note number.
    pub note: u8,
    /// Length in seconds.
    pub duration: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_duration_formula() {
        assert_eq!(duration_ms_for_tempo(60), 64_000);
        assert_eq!(duration_ms_for_tempo(100), 38_400);
        assert_eq!(duration_ms_for_tempo(190), 20_210);
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Key::from_midi(48, Mode::Major).to_string(), "C major");
        assert_eq!(Key::from_midi(54, Mode::Minor).to_string(), "F# minor");
        assert_eq!(Key::from_midi(59, Mode::Minor).to_string(), "B minor");
    }

    #[test]
    fn test_drum_kind_serde_names() {
        let json = serde_json::to_string(&DrumKind::HiHat).unwrap();
        assert_eq!(json, "\"hihat\"");
        let json = serde_json::to_string(&DrumKind::Kick).unwrap();
        assert_eq!(json, "\"kick\"");
    }

    #[test]
    fn test_music_data_helpers() {
        let music = MusicData {
            tempo: 120,
            key: Key::from_midi(60, Mode::Major),
            notes: vec![],
            drums: vec![DrumEvent {
                time: 0.0,
                kind: DrumKind::Kick,
                velocity: 0.9,
            }],
            bass: vec![],
            duration_ms: duration_ms_for_tempo(120),
        };
        assert_eq!(music.beat_seconds(), 0.5);
        assert_eq!(music.duration_seconds(), 32.0);
        assert_eq!(music.event_count(), 1);
    }
}
