//! Enveloped sine tone.

use std::f64::consts::PI;

use seedsound_spec::StreamRng;

use super::Synthesizer;
use crate::envelope::NoteEnvelope;

/// A sine at a fixed frequency under a [`NoteEnvelope`].
#[derive(Debug, Clone)]
pub struct Tone {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude.
    pub amplitude: f64,
    /// Note length in seconds; the envelope closes here.
    pub duration: f64,
    pub envelope: NoteEnvelope,
}

impl Tone {
    pub fn new(frequency: f64, amplitude: f64, duration: f64) -> Self {
        Self {
            frequency,
            amplitude,
            duration,
            envelope: NoteEnvelope::default(),
        }
    }
}

impl Synthesizer for Tone {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut StreamRng) -> Vec<f64> {
        let omega = 2.0 * PI * self.frequency;
        (0..num_samples)
            .map(|i| {
                let t = i as f64 / sample_rate;
                (omega * t).sin() * self.amplitude * self.envelope.gain_at(t, self.duration)
            })
            .collect()
    }
}
