//! Kick drum: a sine swept exponentially from 150 Hz toward 40 Hz.

use std::f64::consts::PI;

use seedsound_spec::StreamRng;

use super::Synthesizer;
use crate::envelope::ExpDecay;

/// Swept-sine kick voice.
///
/// Instantaneous frequency is `end + (start - end) * e^(-sweep_rate * t)`.
/// Phase is the closed-form integral of that curve, so it carries no
/// accumulated rounding error.
#[derive(Debug, Clone)]
pub struct Kick {
    /// Frequency at the onset in Hz.
    pub start_freq: f64,
    /// Frequency the sweep decays toward in Hz.
    pub end_freq: f64,
    /// Sweep rate per second.
    pub sweep_rate: f64,
    pub decay: ExpDecay,
    /// Output gain.
    pub gain: f64,
}

impl Kick {
    /// Kick at the given gain with the standard sweep and decay.
    pub fn new(gain: f64) -> Self {
        Self {
            start_freq: 150.0,
            end_freq: 40.0,
            sweep_rate: 30.0,
            decay: ExpDecay::new(10.0),
            gain,
        }
    }

    /// Instantaneous frequency at `t` seconds.
    pub fn frequency_at(&self, t: f64) -> f64 {
        self.end_freq + (self.start_freq - self.end_freq) * (-self.sweep_rate * t).exp()
    }

    fn phase_at(&self, t: f64) -> f64 {
        let swept = (self.start_freq - self.end_freq) / self.sweep_rate
            * (1.0 - (-self.sweep_rate * t).exp());
        2.0 * PI * (self.end_freq * t + swept)
    }
}

impl Synthesizer for Kick {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut StreamRng) -> Vec<f64> {
        (0..num_samples)
            .map(|i| {
                let t = i as f64 / sample_rate;
                self.phase_at(t).sin() * self.decay.at(t) * self.gain
            })
            .collect()
    }
}
