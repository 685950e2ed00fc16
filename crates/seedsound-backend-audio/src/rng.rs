//! Per-hit noise seeds.
//!
//! Each drum hit draws its noise from its own stream, seeded from the hit's
//! timestamp and voice. Rendering order and the other events of the song
//! never affect a hit's noise.

use seedsound_spec::{DrumKind, StreamRng};

/// Resolution of the timestamp key, in ticks per second.
const TIME_TICKS_PER_SECOND: f64 = 1_000_000.0;

/// Derives the noise seed for a drum hit.
///
/// Hashes the hit time in microseconds (rounded, `i64` little-endian)
/// followed by the voice name with BLAKE3 and keeps the first 4 bytes.
pub fn derive_hit_seed(time: f64, kind: DrumKind) -> u32 {
    let ticks = (time * TIME_TICKS_PER_SECOND).round() as i64;
    let name = kind.name();

    let mut input = Vec::with_capacity(8 + name.len());
    input.extend_from_slice(&ticks.to_le_bytes());
    input.extend_from_slice(name.as_bytes());

    let hash = blake3::hash(&input);
    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Creates the noise stream for a drum hit.
pub fn hit_rng(time: f64, kind: DrumKind) -> StreamRng {
    StreamRng::new(derive_hit_seed(time, kind))
}
