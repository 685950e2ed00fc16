//! 16-bit PCM quantization.

/// Full-scale value of a 16-bit sample.
pub const PCM16_SCALE: f64 = 32767.0;

/// Mono 16-bit PCM audio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pcm16 {
    pub samples: Vec<i16>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl Pcm16 {
    /// Quantizes float samples.
    pub fn from_samples(samples: &[f64], sample_rate: u32) -> Self {
        Self {
            samples: samples_to_pcm16(samples),
            sample_rate,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Little-endian byte serialization.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.samples.len() * 2);
        for sample in &self.samples {
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
        bytes
    }

    /// BLAKE3 hash of the little-endian sample bytes, as hex.
    pub fn hash(&self) -> String {
        blake3::hash(&self.to_le_bytes()).to_hex().to_string()
    }
}

/// Converts f64 samples to 16-bit values.
///
/// Each sample is scaled by 32767, rounded, then clamped to the `i16` range.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|&sample| (sample * PCM16_SCALE).round().clamp(i16::MIN as f64, i16::MAX as f64) as i16)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_to_pcm16() {
        let pcm = samples_to_pcm16(&[0.0, 1.0, -1.0, 0.5, -0.5]);
        assert_eq!(pcm, vec![0, 32767, -32767, 16384, -16384]);
    }

    #[test]
    fn test_clipping() {
        let pcm = samples_to_pcm16(&[2.0, -2.0]);
        assert_eq!(pcm, vec![32767, -32768]);
    }

    #[test]
    fn test_le_bytes() {
        let pcm = Pcm16 {
            samples: vec![1, -2, 0x1234],
            sample_rate: 44100,
        };
        assert_eq!(pcm.to_le_bytes(), vec![0x01, 0x00, 0xFE, 0xFF, 0x34, 0x12]);
    }

    #[test]
    fn test_hash_determinism() {
        let a = Pcm16::from_samples(&[0.5, -0.5, 0.3], 44100);
        let b = Pcm16::from_samples(&[0.5, -0.5, 0.3], 44100);
        assert_eq!(a.hash(), b.hash());
        assert_eq!(a.hash().len(), 64);
        assert!((a.duration_seconds() - 3.0 / 44100.0).abs() < 1e-12);
    }
}
