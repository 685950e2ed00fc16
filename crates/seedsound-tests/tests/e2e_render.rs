//! End-to-End Rendering Tests for SeedSound
//!
//! Tests render generated songs and check sample counts and the
//! normalization bound.

use seedsound_backend_audio::{render, sample_count, SAMPLE_RATE, TARGET_PEAK};
use seedsound_catalog::generate_song;
use seedsound_spec::{Key, Mode, MusicData, SongRequest};

#[test]
fn test_sample_count_matches_duration() {
    for index in 1..=12 {
        let song = generate_song(&SongRequest::new("en_US", 4242, 5.0, index)).unwrap();
        let audio = render(&song.music).unwrap();

        let expected = (song.music.duration_ms as f64 / 1000.0 * SAMPLE_RATE as f64).round();
        assert_eq!(audio.samples.len(), expected as usize);
        assert_eq!(audio.samples.len(), sample_count(song.music.duration_ms));
        assert_eq!(audio.sample_rate, SAMPLE_RATE);
    }
}

#[test]
fn test_peak_is_normalized() {
    for index in 1..=12 {
        let song = generate_song(&SongRequest::new("uk_UA", 1, 5.0, index)).unwrap();
        let audio = render(&song.music).unwrap();
        let peak = audio.peak();
        assert!(peak > 0.0 && peak <= TARGET_PEAK + 1e-12, "peak {peak}");
        assert!((peak - TARGET_PEAK).abs() < 1e-9, "peak {peak}");
    }
}

#[test]
fn test_silent_score_has_zero_peak() {
    let music = MusicData {
        tempo: 120,
        key: Key::from_midi(48, Mode::Major),
        notes: vec![],
        drums: vec![],
        bass: vec![],
        duration_ms: 32_000,
    };
    let audio = render(&music).unwrap();
    assert_eq!(audio.samples.len(), 1_411_200);
    assert_eq!(audio.peak(), 0.0);
    assert!(audio.to_pcm16().samples.iter().all(|&s| s == 0));
}

#[test]
fn test_pcm_stays_in_range() {
    let song = generate_song(&SongRequest::new("de_DE", 77, 5.0, 3)).unwrap();
    let pcm = render(&song.music).unwrap().to_pcm16();
    let max = pcm.samples.iter().map(|s| s.unsigned_abs()).max().unwrap_or(0);
    // 0.9 * 32767, rounded.
    assert_eq!(max, 29_490);
}
