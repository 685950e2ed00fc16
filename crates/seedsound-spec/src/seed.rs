//! Per-song seed derivation.
//!
//! A song is addressed by `(base_seed, index)`. Each consumer of randomness
//! gets its own sub-seed from a distinct linear mix of the two, so the text,
//! likes, music and cover streams never share draws:
//!
//! ```text
//! text  = (base * 31 + index * 17) & 0x7FFF_FFFF
//! likes = (base * 37 + index * 53) & 0x7FFF_FFFF
//! music = (base * 41 + index * 59) & 0x7FFF_FFFF
//! cover = (base * 43 + index * 67) & 0x7FFF_FFFF
//! ```
//!
//! Arithmetic wraps on overflow. These constants are part of the output
//! contract: changing any of them changes every previously generated song.

use serde::{Deserialize, Serialize};

/// Mask keeping sub-seeds in the positive 31-bit range.
pub const SEED_MASK: i64 = 0x7FFF_FFFF;

const TEXT_MIX: (i64, i64) = (31, 17);
const LIKES_MIX: (i64, i64) = (37, 53);
const MUSIC_MIX: (i64, i64) = (41, 59);
const COVER_MIX: (i64, i64) = (43, 67);

/// The independent sub-seeds for one song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SongSeeds {
    /// Drives title, artist, album, genre, review and lyrics.
    pub text: u32,
    /// Drives the likes roll.
    pub likes: u32,
    /// Drives the composition engine.
    pub music: u32,
    /// Drives the cover descriptor.
    pub cover: u32,
}

/// Derives the sub-seeds for item `index` of the catalog seeded by `base_seed`.
///
/// # Example
/// ```
/// use seedsound_spec::seed::derive_song_seeds;
///
/// let seeds = derive_song_seeds(12345, 1);
/// assert_eq!(seeds.text, 12345 * 31 + 17);
/// assert_ne!(seeds.text, seeds.music);
/// ```
pub fn derive_song_seeds(base_seed: i64, index: u32) -> SongSeeds {
    SongSeeds {
        text: mix(base_seed, index, TEXT_MIX),
        likes: mix(base_seed, index, LIKES_MIX),
        music: mix(base_seed, index, MUSIC_MIX),
        cover: mix(base_seed, index, COVER_MIX),
    }
}

fn mix(base_seed: i64, index: u32, (mul, offset): (i64, i64)) -> u32 {
    let mixed = base_seed
        .wrapping_mul(mul)
        .wrapping_add(i64::from(index).wrapping_mul(offset));
    (mixed & SEED_MASK) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_known_values() {
        let seeds = derive_song_seeds(12345, 1);
        assert_eq!(seeds.text, 382_712);
        assert_eq!(seeds.likes, 456_818);
        assert_eq!(seeds.music, 506_204);
        assert_eq!(seeds.cover, 530_902);
    }

    #[test]
    fn test_streams_are_distinct() {
        for index in 1..50 {
            let s = derive_song_seeds(987_654_321, index);
            let all = [s.text, s.likes, s.music, s.cover];
            for i in 0..all.len() {
                for j in (i + 1)..all.len() {
                    assert_ne!(all[i], all[j], "index {index}: streams {i} and {j} collide");
                }
            }
        }
    }

    #[test]
    fn test_masked_into_positive_range() {
        for &base in &[i64::MIN, -1, 0, 1, i64::MAX] {
            let s = derive_song_seeds(base, u32::MAX);
            for v in [s.text, s.likes, s.music, s.cover] {
                assert!(v <= SEED_MASK as u32);
            }
        }
    }

    #[test]
    fn test_negative_seed_is_deterministic() {
        assert_eq!(derive_song_seeds(-42, 7), derive_song_seeds(-42, 7));
    }

    #[test]
    fn test_adjacent_indices_differ() {
        assert_ne!(derive_song_seeds(1, 1), derive_song_seeds(1, 2));
    }
}
