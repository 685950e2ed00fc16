//! Shared requests and pipeline shortcuts for the e2e tests.

use seedsound_backend_audio::{render_pcm16, Encoder, TagRecord, WavEncoder};
use seedsound_spec::{Song, SongRequest};

/// Fixed tag year so exports are reproducible.
pub const FIXTURE_YEAR: u16 = 2024;

/// The reference request: seed 12345, index 1, `en_US`, average likes 5.
pub fn scenario_request() -> SongRequest {
    SongRequest::new("en_US", 12345, 5.0, 1)
}

/// Serializes a song to compact JSON bytes for byte comparison.
///
/// # Panics
/// Panics if serialization fails, which only happens on non-finite floats.
pub fn song_json(song: &Song) -> Vec<u8> {
    serde_json::to_vec(song).expect("song serializes")
}

/// Renders a song and encodes it as WAV with the fixture year.
///
/// # Panics
/// Panics if rendering or encoding fails.
pub fn encode_song(song: &Song) -> Vec<u8> {
    let pcm = render_pcm16(&song.music).expect("song renders");
    WavEncoder::new()
        .encode(&pcm, &TagRecord::for_song(song, FIXTURE_YEAR))
        .expect("song encodes")
}
