//! Drum track.

use seedsound_spec::{DrumEvent, DrumKind, StreamRng, BARS, BEATS_PER_BAR};

use super::Harmony;
use crate::genre::DrumStyle;

/// Offset of the syncopated kick within a beat.
const SYNCOPATION: f64 = 0.75;

pub(crate) fn compose_drums(
    rng: &mut StreamRng,
    harmony: &Harmony,
    style: DrumStyle,
) -> Vec<DrumEvent> {
    let beat_seconds = harmony.beat_seconds;
    let mut drums = Vec::new();

    for bar in 0..BARS {
        let bar_start = harmony.bar_start(bar);
        for beat in 0..BEATS_PER_BAR {
            let time = bar_start + beat as f64 * beat_seconds;

            if beat % 2 == 0 {
                drums.push(DrumEvent {
                    time,
                    kind: DrumKind::Kick,
                    velocity: rng.uniform(0.8, 1.0),
                });
            } else {
                drums.push(DrumEvent {
                    time,
                    kind: DrumKind::Snare,
                    velocity: rng.uniform(0.7, 1.0),
                });
            }

            match style {
                DrumStyle::Electronic => {
                    drums.push(DrumEvent {
                        time,
                        kind: DrumKind::HiHat,
                        velocity: rng.uniform(0.3, 0.6),
                    });
                    drums.push(DrumEvent {
                        time: time + beat_seconds * 0.5,
                        kind: DrumKind::HiHat,
                        velocity: rng.uniform(0.2, 0.4),
                    });
                }
                DrumStyle::Standard | DrumStyle::Heavy => {
                    if rng.below(2) == 0 {
                        drums.push(DrumEvent {
                            time,
                            kind: DrumKind::HiHat,
                            velocity: rng.uniform(0.3, 0.6),
                        });
                    }
                }
            }

            if style == DrumStyle::Heavy && rng.below(4) == 0 {
                drums.push(DrumEvent {
                    time: time + beat_seconds * SYNCOPATION,
                    kind: DrumKind::Kick,
                    velocity: rng.uniform(0.6, 0.8),
                });
            }
        }
    }
    drums
}
