//! Noise burst for snare and hi-hat.

use seedsound_spec::StreamRng;

use super::Synthesizer;
use crate::envelope::ExpDecay;
use crate::filter::BiquadFilter;

/// White noise through a cascade of high-pass filters, under an exponential
/// decay.
#[derive(Debug, Clone)]
pub struct NoiseBurst {
    /// Cutoffs of the cascaded high-pass stages, in Hz.
    pub highpass: &'static [f64],
    pub decay: ExpDecay,
    /// Output gain.
    pub gain: f64,
}

impl NoiseBurst {
    /// Snare: one 1 kHz stage, decay rate 20.
    pub fn snare(gain: f64) -> Self {
        Self {
            highpass: &[1000.0],
            decay: ExpDecay::new(20.0),
            gain,
        }
    }

    /// Hi-hat: two 7 kHz stages, decay rate 50.
    pub fn hihat(gain: f64) -> Self {
        Self {
            highpass: &[7000.0, 7000.0],
            decay: ExpDecay::new(50.0),
            gain,
        }
    }
}

impl Synthesizer for NoiseBurst {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, rng: &mut StreamRng) -> Vec<f64> {
        let mut samples: Vec<f64> = (0..num_samples).map(|_| rng.uniform(-1.0, 1.0)).collect();

        for &cutoff in self.highpass {
            BiquadFilter::highpass(cutoff, sample_rate).process_buffer(&mut samples);
        }

        for (i, sample) in samples.iter_mut().enumerate() {
            let t = i as f64 / sample_rate;
            *sample *= self.decay.at(t) * self.gain;
        }
        samples
    }
}
