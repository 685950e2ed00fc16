//! Voices used to render a score.
//!
//! - `tone` - enveloped sine for melody and bass notes
//! - `kick` - exponentially swept sine
//! - `noise` - high-passed white noise burst for snare and hi-hat

pub mod kick;
pub mod noise;
pub mod tone;

use seedsound_spec::StreamRng;

pub use kick::Kick;
pub use noise::NoiseBurst;
pub use tone::Tone;

/// Common trait for all voices.
pub trait Synthesizer {
    /// Generates audio samples.
    ///
    /// # Arguments
    /// * `num_samples` - Number of samples to generate
    /// * `sample_rate` - Audio sample rate in Hz
    /// * `rng` - Deterministic RNG for any randomness
    fn synthesize(&self, num_samples: usize, sample_rate: f64, rng: &mut StreamRng) -> Vec<f64>;
}
