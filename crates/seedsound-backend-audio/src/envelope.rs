//! Amplitude envelopes.
//!
//! Tones use a linear attack/release trapezoid; drum voices use a single
//! exponential decay from full level.

/// Linear attack and release applied to every tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteEnvelope {
    /// Attack time in seconds.
    pub attack: f64,
    /// Longest release time in seconds. Shorter notes release over their
    /// whole length.
    pub release: f64,
}

impl Default for NoteEnvelope {
    fn default() -> Self {
        Self {
            attack: 0.02,
            release: 0.1,
        }
    }
}

impl NoteEnvelope {
    /// Creates new envelope parameters.
    pub fn new(attack: f64, release: f64) -> Self {
        Self {
            attack: attack.max(0.0),
            release: release.max(0.0),
        }
    }

    /// Gain in `[0, 1]` at `t` seconds into a note lasting `duration` seconds.
    ///
    /// The lower of the attack ramp and the release ramp wins, so a note
    /// shorter than its attack never reaches full level.
    pub fn gain_at(&self, t: f64, duration: f64) -> f64 {
        let attack = if self.attack > 0.0 {
            t / self.attack
        } else {
            1.0
        };

        let release_len = self.release.min(duration);
        let release = if release_len > 0.0 {
            (duration - t) / release_len
        } else {
            1.0
        };

        attack.min(release).clamp(0.0, 1.0)
    }
}

/// Exponential decay `e^(-rate * t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpDecay {
    /// Decay rate per second.
    pub rate: f64,
}

impl ExpDecay {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    #[inline]
    pub fn at(&self, t: f64) -> f64 {
        (-self.rate * t).exp()
    }
}
