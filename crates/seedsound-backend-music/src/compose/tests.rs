//! Tests for song composition.

use pretty_assertions::assert_eq;
use seedsound_spec::{DrumKind, Mode, RELEASE_TAIL_SECONDS};

use super::bass::BASS_RHYTHMS;
use super::melody::MELODY_RHYTHMS;
use super::*;
use crate::genre::DrumStyle;

fn drum_count(music: &MusicData, kind: DrumKind) -> usize {
    music.drums.iter().filter(|d| d.kind == kind).count()
}

#[test]
fn test_compose_is_deterministic() {
    assert_eq!(compose(506_204, "Rock"), compose(506_204, "Rock"));
    assert_eq!(compose(1, "Ambient"), compose(1, "Ambient"));
}

#[test]
fn test_seeds_change_the_score() {
    assert_ne!(compose(1, "Pop").notes, compose(2, "Pop").notes);
}

#[test]
fn test_rhythm_templates_fill_one_bar() {
    for rhythm in MELODY_RHYTHMS.iter().chain(BASS_RHYTHMS.iter()) {
        assert_eq!(rhythm.iter().sum::<f64>(), BEATS_PER_BAR as f64);
    }
}

#[test]
fn test_tempo_within_genre_bounds() {
    for genre in ["Rock", "Punk", "Ambient", "R&B", "Техно", "Unheard-Of"] {
        let traits = genre_traits(genre);
        for seed in 0..100 {
            let music = compose(seed, genre);
            assert!(traits.contains_tempo(music.tempo), "{genre}: {}", music.tempo);
            assert_eq!(music.duration_ms, duration_ms_for_tempo(music.tempo));
        }
    }
}

#[test]
fn test_tempo_reaches_both_bounds() {
    let tempos: Vec<u32> = (0..2000).map(|seed| compose(seed, "House").tempo).collect();
    assert!(tempos.contains(&120));
    assert!(tempos.contains(&130));
}

#[test]
fn test_events_are_contained() {
    for genre in ["Metal", "Electronic", "Jazz", "Classical"] {
        for seed in 0..50 {
            let music = compose(seed * 131, genre);
            let limit = music.duration_seconds() + RELEASE_TAIL_SECONDS;

            for note in &music.notes {
                assert!(note.time >= 0.0);
                assert!(note.duration > 0.0);
                assert!(note.time + note.duration <= limit);
                assert!((0.0..=1.0).contains(&note.velocity));
            }
            for hit in &music.drums {
                assert!(hit.time >= 0.0 && hit.time <= limit);
                assert!((0.0..=1.0).contains(&hit.velocity));
            }
            for note in &music.bass {
                assert!(note.time >= 0.0);
                assert!(note.duration > 0.0);
                assert!(note.time + note.duration <= limit);
            }
        }
    }
}

#[test]
fn test_tracks_are_time_ordered() {
    let music = compose(77, "Pop");
    assert!(music.notes.windows(2).all(|w| w[0].time < w[1].time));
    assert!(music.bass.windows(2).all(|w| w[0].time < w[1].time));
    assert!(music.drums.windows(2).all(|w| w[0].time <= w[1].time));
}

#[test]
fn test_backbeat_every_bar() {
    let music = compose(9, "Folk");
    assert_eq!(drum_count(&music, DrumKind::Snare), (BARS * 2) as usize);
    assert_eq!(drum_count(&music, DrumKind::Kick), (BARS * 2) as usize);

    let beat = music.beat_seconds();
    let first_bar: Vec<(f64, DrumKind)> = music
        .drums
        .iter()
        .filter(|d| d.time < beat * 4.0 && d.kind != DrumKind::HiHat)
        .map(|d| (d.time / beat, d.kind))
        .collect();
    assert_eq!(
        first_bar,
        vec![
            (0.0, DrumKind::Kick),
            (1.0, DrumKind::Snare),
            (2.0, DrumKind::Kick),
            (3.0, DrumKind::Snare),
        ]
    );
}

#[test]
fn test_electronic_genres_get_eighth_note_hats() {
    let music = compose(5, "Trance");
    assert_eq!(genre_traits("Trance").drum_style, DrumStyle::Electronic);
    assert_eq!(drum_count(&music, DrumKind::HiHat), (BARS * BEATS_PER_BAR * 2) as usize);
}

#[test]
fn test_standard_genres_get_some_on_beat_hats() {
    let hats = drum_count(&compose(5, "Country"), DrumKind::HiHat);
    assert!(hats > 0 && hats < (BARS * BEATS_PER_BAR) as usize);
}

#[test]
fn test_heavy_genres_add_syncopated_kicks() {
    let extra: usize = (0..20)
        .map(|seed| drum_count(&compose(seed, "Metal"), DrumKind::Kick) - (BARS * 2) as usize)
        .sum();
    // Expected around 320 over 20 songs.
    assert!(extra > 200, "only {extra} syncopated kicks");

    for seed in 0..20 {
        assert_eq!(drum_count(&compose(seed, "Pop"), DrumKind::Kick), (BARS * 2) as usize);
    }
}

#[test]
fn test_melody_plays_most_slots() {
    let music = compose(3, "Indie");
    assert!(!music.notes.is_empty());
    // At least 3 slots per bar, 90% sounding.
    assert!(music.notes.len() > (BARS * 2) as usize);
    let instrument = music.notes[0].instrument;
    assert!(music.notes.iter().all(|n| n.instrument == instrument));
}

#[test]
fn test_key_matches_tonality() {
    for seed in 0..50 {
        assert_eq!(compose(seed, "Blues").key.mode, Mode::Minor);
        assert_eq!(compose(seed, "Country").key.mode, Mode::Major);
    }
}

#[test]
fn test_bass_sits_an_octave_below() {
    for seed in 0..50 {
        let music = compose(seed, "Funk");
        let lowest_melody = music.notes.iter().map(|n| n.note).min().unwrap_or(0);
        let highest_bass = music.bass.iter().map(|b| b.note).max().unwrap_or(0);
        assert!(music.bass.iter().all(|b| b.note >= ROOT_BASE - 12));
        // Bass root sits an octave under the melody root.
        assert!(highest_bass < ROOT_BASE + 12 + 11);
        assert!(lowest_melody >= ROOT_BASE - 12);
    }
}

#[test]
fn test_every_track_populated() {
    for seed in 0..100 {
        let music = compose(seed, "Alternative");
        assert!(!music.notes.is_empty());
        assert!(!music.drums.is_empty());
        assert!(!music.bass.is_empty());
    }
}

#[test]
fn test_degenerate_traits_give_finite_scores() {
    let cases = [
        GenreTraits {
            min_tempo: 0,
            max_tempo: 0,
            ..GenreTraits::DEFAULT
        },
        GenreTraits {
            min_tempo: 140,
            max_tempo: 60,
            ..GenreTraits::DEFAULT
        },
    ];
    for traits in cases {
        for seed in 0..20 {
            let music = compose_with_traits(seed, &traits);
            assert!(traits.contains_tempo(music.tempo), "tempo {}", music.tempo);
            assert!(music.tempo > 0);
            assert!(music.notes.iter().all(|n| n.time.is_finite() && n.duration.is_finite()));
            assert!(music.drums.iter().all(|d| d.time.is_finite()));
            assert!(music.bass.iter().all(|b| b.time.is_finite() && b.duration.is_finite()));
        }
    }
}
