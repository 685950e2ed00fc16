//! Mono mix buffer and loudness normalization.

/// Fixed-length mono buffer that voices are summed into.
#[derive(Debug, Clone)]
pub struct Mixer {
    samples: Vec<f64>,
}

impl Mixer {
    /// Creates a silent buffer of `num_samples`.
    pub fn new(num_samples: usize) -> Self {
        Self {
            samples: vec![0.0; num_samples],
        }
    }

    /// Adds `voice` starting at sample `offset`. Samples past the end of the
    /// buffer are dropped.
    pub fn add_at(&mut self, offset: usize, voice: &[f64]) {
        if offset >= self.samples.len() {
            return;
        }
        for (dst, src) in self.samples[offset..].iter_mut().zip(voice) {
            *dst += *src;
        }
    }

    /// Number of samples in the buffer.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Consumes the mixer, returning the summed samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}

/// Largest absolute sample value, 0 for an empty buffer.
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().map(|s| s.abs()).fold(0.0_f64, f64::max)
}

/// Scales `samples` so the peak equals `target_peak`.
///
/// Silent buffers are left untouched.
pub fn normalize(samples: &mut [f64], target_peak: f64) {
    let current_peak = peak(samples);

    if current_peak > 0.0 {
        let gain = target_peak / current_peak;
        for sample in samples.iter_mut() {
            *sample *= gain;
        }
    }
}
