//! Bass track.

use seedsound_spec::{BassNote, StreamRng, BARS, BEATS_PER_BAR};

use super::Harmony;

/// Scale-degree offsets above the chord root. `None` rests.
pub(crate) const BASS_PATTERNS: [[Option<usize>; 4]; 4] = [
    [Some(0), None, Some(0), None],
    [Some(0), Some(0), Some(2), Some(0)],
    [Some(0), Some(2), Some(3), Some(2)],
    [Some(0), None, Some(2), None],
];

/// Rhythms in beats. Each fills exactly one bar.
pub(crate) const BASS_RHYTHMS: [&[f64]; 4] = [
    &[1.0, 1.0, 1.0, 1.0],
    &[2.0, 2.0],
    &[1.5, 0.5, 1.0, 1.0],
    &[1.0, 0.5, 0.5, 1.0, 1.0],
];

/// Fraction of the slot a bass note sounds for.
const GATE: f64 = 0.8;

pub(crate) fn compose_bass(rng: &mut StreamRng, harmony: &Harmony) -> Vec<BassNote> {
    let pattern = *rng.pick(&BASS_PATTERNS);
    let rhythm = *rng.pick(&BASS_RHYTHMS);
    let bass_root = harmony.root - 12;

    let mut bass = Vec::new();
    for bar in 0..BARS {
        let chord_root = harmony.chord_root(bass_root, bar);
        let bar_start = harmony.bar_start(bar);

        let mut beat = 0.0;
        for (slot, &length) in rhythm.iter().enumerate() {
            if beat >= BEATS_PER_BAR as f64 {
                break;
            }

            if let Some(offset) = pattern[slot % pattern.len()] {
                let interval = if offset < harmony.scale.len() {
                    harmony.scale.degree(offset)
                } else {
                    0
                };
                bass.push(BassNote {
                    time: bar_start + beat * harmony.beat_seconds,
                    note: chord_root + interval,
                    duration: length * harmony.beat_seconds * GATE,
                });
            }

            beat += length;
        }
    }
    bass
}
