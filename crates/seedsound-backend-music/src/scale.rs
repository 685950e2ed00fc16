//! Scales and chord progressions.

use seedsound_spec::{Mode, StreamRng};

/// Scale family used for melody and bass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    Major,
    Minor,
    Pentatonic,
    Blues,
}

impl Scale {
    /// Semitone offsets from the root, ascending.
    pub fn intervals(&self) -> &'static [u8] {
        match self {
            Scale::Major => &[0, 2, 4, 5, 7, 9, 11],
            Scale::Minor => &[0, 2, 3, 5, 7, 8, 10],
            Scale::Pentatonic => &[0, 2, 4, 7, 9],
            Scale::Blues => &[0, 3, 5, 6, 7, 10],
        }
    }

    /// Number of degrees in the scale.
    pub fn len(&self) -> usize {
        self.intervals().len()
    }

    /// Always false; every scale has degrees.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Semitone offset of a degree. Degrees past the top wrap around.
    pub fn degree(&self, degree: usize) -> u8 {
        let intervals = self.intervals();
        intervals[degree % intervals.len()]
    }

    /// Tonality reported in the key name.
    pub fn mode(&self) -> Mode {
        match self {
            Scale::Major | Scale::Pentatonic => Mode::Major,
            Scale::Minor | Scale::Blues => Mode::Minor,
        }
    }

    /// Draws a scale: the primary scale of the tonality two times in three,
    /// otherwise its alternative. Consumes one draw.
    pub fn choose(rng: &mut StreamRng, prefer_minor: bool) -> Scale {
        let alternative = rng.below(3) == 0;
        match (prefer_minor, alternative) {
            (true, false) => Scale::Minor,
            (true, true) => Scale::Blues,
            (false, false) => Scale::Major,
            (false, true) => Scale::Pentatonic,
        }
    }
}

/// Chord roots as scale degrees, one per bar, repeating every four bars.
pub type Progression = [usize; 4];

/// The fixed progressions a song chooses from.
pub const CHORD_PROGRESSIONS: [Progression; 8] = [
    [0, 3, 4, 4],
    [0, 4, 5, 3],
    [0, 0, 3, 4],
    [0, 5, 3, 4],
    [0, 3, 0, 4],
    [0, 4, 0, 3],
    [5, 3, 0, 4],
    [0, 0, 4, 3],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intervals_ascend_from_root() {
        for scale in [Scale::Major, Scale::Minor, Scale::Pentatonic, Scale::Blues] {
            let intervals = scale.intervals();
            assert_eq!(intervals[0], 0);
            assert!(intervals.windows(2).all(|w| w[0] < w[1]));
            assert!(*intervals.last().unwrap_or(&0) < 12);
        }
    }

    #[test]
    fn test_degree_wraps() {
        assert_eq!(Scale::Pentatonic.degree(5), 0);
        assert_eq!(Scale::Major.degree(5), 9);
        assert_eq!(Scale::Blues.degree(7), 3);
    }

    #[test]
    fn test_mode_of_scales() {
        assert_eq!(Scale::Major.mode(), Mode::Major);
        assert_eq!(Scale::Pentatonic.mode(), Mode::Major);
        assert_eq!(Scale::Minor.mode(), Mode::Minor);
        assert_eq!(Scale::Blues.mode(), Mode::Minor);
    }

    #[test]
    fn test_choose_respects_tonality() {
        let mut rng = StreamRng::new(17);
        let mut primary = 0;
        for _ in 0..900 {
            let scale = Scale::choose(&mut rng, true);
            assert_eq!(scale.mode(), Mode::Minor);
            if scale == Scale::Minor {
                primary += 1;
            }
        }
        // Expected around 600.
        assert!((500..=700).contains(&primary), "minor chosen {primary} times");

        for _ in 0..100 {
            assert_eq!(Scale::choose(&mut rng, false).mode(), Mode::Major);
        }
    }

    #[test]
    fn test_progressions_stay_in_scale_range() {
        for progression in CHORD_PROGRESSIONS {
            assert!(progression.iter().all(|&degree| degree < 7));
        }
    }
}
