//! Melody track.

use seedsound_spec::{Instrument, NoteEvent, StreamRng, BARS, BEATS_PER_BAR};

use super::Harmony;
use crate::note::transpose;

/// Rhythm templates in beats. Each fills exactly one bar.
pub(crate) const MELODY_RHYTHMS: [&[f64]; 6] = [
    &[1.0, 1.0, 1.0, 1.0],
    &[2.0, 1.0, 1.0],
    &[1.0, 0.5, 0.5, 1.0, 1.0],
    &[0.5, 0.5, 1.0, 0.5, 0.5, 1.0],
    &[1.5, 0.5, 1.0, 1.0],
    &[1.0, 1.0, 2.0],
];

/// Largest scale-degree step between consecutive notes.
const MAX_STEP: i32 = 2;

pub(crate) fn compose_melody(rng: &mut StreamRng, harmony: &Harmony) -> Vec<NoteEvent> {
    let scale_len = harmony.scale.len() as i32;
    let mut degree = rng.pick_index(harmony.scale.len()) as i32;
    let instrument = *rng.pick(&Instrument::ALL);

    let mut notes = Vec::new();
    for bar in 0..BARS {
        let chord_root = harmony.chord_root(harmony.root, bar);
        let rhythm = *rng.pick(&MELODY_RHYTHMS);
        let bar_start = harmony.bar_start(bar);

        let mut beat = 0.0;
        for &length in rhythm {
            if beat >= BEATS_PER_BAR as f64 {
                break;
            }

            // Nine slots in ten sound.
            if rng.below(10) > 0 {
                degree = (degree + rng.range_inclusive(-MAX_STEP, MAX_STEP)).clamp(0, scale_len - 1);

                let octave_shift: i32 = if rng.below(3) == 0 {
                    if rng.below(2) == 0 {
                        12
                    } else {
                        -12
                    }
                } else {
                    0
                };

                let note = transpose(
                    chord_root + harmony.scale.degree(degree as usize),
                    octave_shift,
                );
                let slot_seconds = length * harmony.beat_seconds;

                notes.push(NoteEvent {
                    time: bar_start + beat * harmony.beat_seconds,
                    note,
                    duration: slot_seconds * rng.uniform(0.7, 1.0),
                    velocity: rng.uniform(0.5, 0.9),
                    instrument,
                });
            }

            beat += length;
        }
    }
    notes
}
