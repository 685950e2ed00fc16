//! Likes roll.
//!
//! `likes = floor(avg)`, plus one with probability `fract(avg)`, clamped to
//! `0..=10`. The roll uses the song's dedicated likes stream, so changing the
//! target average never disturbs the text or music of a song.

use seedsound_spec::{StreamRng, MAX_LIKES};

/// Rolls the likes count for a song.
///
/// Targets at or below 0 give 0 and targets at or above 10 give 10 without
/// consuming a draw.
///
/// # Example
/// ```
/// use seedsound_backend_text::roll_likes;
///
/// assert_eq!(roll_likes(456_818, 5.0), 5);
/// assert_eq!(roll_likes(456_818, 0.0), 0);
/// assert_eq!(roll_likes(456_818, 10.0), 10);
/// ```
pub fn roll_likes(likes_seed: u32, average_likes: f64) -> u8 {
    if average_likes.is_nan() || average_likes <= 0.0 {
        return 0;
    }
    if average_likes >= MAX_LIKES {
        return MAX_LIKES as u8;
    }

    let base = average_likes.floor();
    let fraction = average_likes - base;
    let mut likes = base as u8;

    let mut rng = StreamRng::new(likes_seed);
    if rng.unit() < fraction {
        likes += 1;
    }

    likes.min(MAX_LIKES as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_are_exact() {
        for avg in 0..=10 {
            for seed in 0..50 {
                assert_eq!(roll_likes(seed, avg as f64), avg as u8);
            }
        }
    }

    #[test]
    fn test_fractional_rolls_stay_adjacent() {
        for seed in 0..500 {
            let likes = roll_likes(seed, 3.7);
            assert!(likes == 3 || likes == 4, "got {likes}");
            let likes = roll_likes(seed, 9.5);
            assert!(likes == 9 || likes == 10, "got {likes}");
        }
    }

    #[test]
    fn test_fraction_sets_the_rate() {
        let ups = (0..2000).filter(|&seed| roll_likes(seed, 2.25) == 3).count();
        // Expected 500 of 2000.
        assert!((400..=600).contains(&ups), "got {ups}");
    }

    #[test]
    fn test_out_of_range_targets_saturate() {
        assert_eq!(roll_likes(1, -3.0), 0);
        assert_eq!(roll_likes(1, 42.0), 10);
        assert_eq!(roll_likes(1, f64::NAN), 0);
    }

    #[test]
    fn test_roll_is_deterministic() {
        for seed in 0..100 {
            assert_eq!(roll_likes(seed, 6.5), roll_likes(seed, 6.5));
        }
    }
}
