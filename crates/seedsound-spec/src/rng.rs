//! Deterministic stream RNG using PCG32.
//!
//! All randomness in SeedSound flows through [`StreamRng`]. The generator is
//! PCG32 (`rand_pcg::Pcg32`); every draw primitive is built directly on its raw
//! `next_u32`/`next_u64` output so that output never depends on the sampling
//! algorithms of the `rand` crate, which have changed between releases.
//!
//! Primitives:
//!
//! ```text
//! below(n)              = (next_u32 * n) >> 32
//! unit()                = (next_u64 >> 11) * 2^-53          in [0, 1)
//! range_inclusive(a, b) = a + below(b - a + 1)
//! uniform(a, b)         = a + unit() * (b - a)
//! chance(p)             = unit() < p
//! pick(xs)              = xs[below(len)]
//! ```

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves before `seed_from_u64`.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// A seeded random stream with pinned draw primitives.
#[derive(Debug, Clone)]
pub struct StreamRng {
    inner: Pcg32,
}

impl StreamRng {
    /// Creates a stream from a sub-seed.
    pub fn new(seed: u32) -> Self {
        Self {
            inner: create_rng(seed),
        }
    }

    /// Raw 32-bit draw.
    pub fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    /// Uniform integer in `[0, n)`. Returns 0 when `n` is 0.
    pub fn below(&mut self, n: u32) -> u32 {
        ((self.inner.next_u32() as u64 * n as u64) >> 32) as u32
    }

    /// Uniform integer in `[lo, hi]`.
    pub fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        debug_assert!(lo <= hi);
        let span = (hi as i64 - lo as i64 + 1) as u32;
        lo + self.below(span) as i32
    }

    /// Uniform float in `[0, 1)` with 53 bits of precision.
    pub fn unit(&mut self) -> f64 {
        (self.inner.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform float in `[lo, hi)`.
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.unit() * (hi - lo)
    }

    /// Returns true with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }

    /// Picks one element uniformly.
    ///
    /// # Panics
    /// Panics if `items` is empty. All tables passed here are static and
    /// non-empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len() as u32) as usize]
    }

    /// Picks an index into a slice of length `len`.
    pub fn pick_index(&mut self, len: usize) -> usize {
        self.below(len as u32) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_determinism() {
        let mut a = StreamRng::new(42);
        let mut b = StreamRng::new(42);

        let va: Vec<f64> = (0..100).map(|_| a.unit()).collect();
        let vb: Vec<f64> = (0..100).map(|_| b.unit()).collect();
        assert_eq!(va, vb);
    }

    #[test]
    fn test_different_seeds_produce_different_sequences() {
        let mut a = StreamRng::new(42);
        let mut b = StreamRng::new(43);

        let va: Vec<u32> = (0..10).map(|_| a.next_u32()).collect();
        let vb: Vec<u32> = (0..10).map(|_| b.next_u32()).collect();
        assert_ne!(va, vb);
    }

    #[test]
    fn test_below_stays_in_range() {
        let mut rng = StreamRng::new(7);
        for n in 1..40 {
            for _ in 0..50 {
                assert!(rng.below(n) < n);
            }
        }
        assert_eq!(rng.below(0), 0);
    }

    #[test]
    fn test_below_covers_all_values() {
        let mut rng = StreamRng::new(99);
        let mut seen = [false; 5];
        for _ in 0..500 {
            seen[rng.below(5) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_range_inclusive_bounds() {
        let mut rng = StreamRng::new(3);
        let mut hit_lo = false;
        let mut hit_hi = false;
        for _ in 0..2000 {
            let v = rng.range_inclusive(-2, 2);
            assert!((-2..=2).contains(&v));
            hit_lo |= v == -2;
            hit_hi |= v == 2;
        }
        assert!(hit_lo && hit_hi);
    }

    #[test]
    fn test_unit_and_uniform_ranges() {
        let mut rng = StreamRng::new(11);
        for _ in 0..1000 {
            let u = rng.unit();
            assert!((0.0..1.0).contains(&u));
            let v = rng.uniform(0.5, 0.9);
            assert!((0.5..0.9).contains(&v));
        }
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = StreamRng::new(5);
        for _ in 0..100 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }

    #[test]
    fn test_pick_returns_member() {
        let mut rng = StreamRng::new(8);
        let items = ["a", "b", "c"];
        for _ in 0..20 {
            assert!(items.contains(rng.pick(&items)));
        }
    }
}
