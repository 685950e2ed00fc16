//! Cover art descriptor.
//!
//! Drawn from the cover stream in order: background, accent, pattern,
//! pattern seed.

use seedsound_spec::{CoverImage, CoverPattern, StreamRng};

const BACKGROUND_COLORS: [&str; 20] = [
    "#1a1a2e", "#16213e", "#0f3460", "#533483", "#e94560", "#2c3e50", "#34495e", "#1abc9c",
    "#2ecc71", "#3498db", "#9b59b6", "#e74c3c", "#f39c12", "#27ae60", "#8e44ad", "#2980b9",
    "#c0392b", "#d35400", "#16a085", "#7f8c8d",
];

const ACCENT_COLORS: [&str; 10] = [
    "#ffffff", "#f1c40f", "#e74c3c", "#3498db", "#2ecc71", "#9b59b6", "#1abc9c", "#e91e63",
    "#00bcd4", "#ff9800",
];

/// Exclusive upper bound of the pattern seed.
pub const PATTERN_SEED_RANGE: u32 = 1000;

/// Composes the cover descriptor from the cover sub-seed.
pub fn compose_cover(cover_seed: u32) -> CoverImage {
    let mut rng = StreamRng::new(cover_seed);

    let background_color = rng.pick(&BACKGROUND_COLORS).to_string();
    let accent_color = rng.pick(&ACCENT_COLORS).to_string();
    let pattern = *rng.pick(&CoverPattern::ALL);
    let pattern_seed = rng.below(PATTERN_SEED_RANGE);

    CoverImage {
        background_color,
        accent_color,
        pattern,
        pattern_seed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_is_deterministic() {
        assert_eq!(compose_cover(530_902), compose_cover(530_902));
    }

    #[test]
    fn test_cover_fields_valid() {
        for seed in 0..300 {
            let cover = compose_cover(seed);
            assert!(BACKGROUND_COLORS.contains(&cover.background_color.as_str()));
            assert!(ACCENT_COLORS.contains(&cover.accent_color.as_str()));
            assert!(cover.pattern_seed < PATTERN_SEED_RANGE);
        }
    }

    #[test]
    fn test_colors_are_hex() {
        for color in BACKGROUND_COLORS.iter().chain(ACCENT_COLORS.iter()) {
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }
}
