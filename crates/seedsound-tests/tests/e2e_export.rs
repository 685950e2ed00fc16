//! End-to-End Export Tests for SeedSound
//!
//! Tests run whole batches through render and the WAV encoder.

use std::io::Cursor;

use pretty_assertions::assert_eq;
use seedsound_backend_audio::WavEncoder;
use seedsound_catalog::{
    artifact_file_name, export_batch, generate_page, ExportOptions, ExportOutcome, ExportSummary,
};
use seedsound_spec::{PageRequest, Song};
use seedsound_tests::{compute_hash, encode_song, FIXTURE_YEAR};

fn page_songs() -> Vec<Song> {
    generate_page(&PageRequest {
        locale: "en_US".to_string(),
        seed: 12345,
        average_likes: 5.0,
        page: 1,
        page_size: 6,
    })
    .unwrap()
    .songs
}

fn encoded_hashes(outcomes: &[ExportOutcome]) -> Vec<(u32, String, String)> {
    outcomes
        .iter()
        .map(|outcome| match outcome {
            ExportOutcome::Encoded {
                index,
                file_name,
                bytes,
            } => (*index, file_name.clone(), compute_hash(bytes)),
            other => panic!("unexpected outcome: {other:?}"),
        })
        .collect()
}

#[test]
fn test_batch_export_is_idempotent() {
    let songs = page_songs();
    let options = ExportOptions::new(FIXTURE_YEAR).with_jobs(3);

    let first = export_batch(&songs, &WavEncoder::new(), &options);
    let second = export_batch(&songs, &WavEncoder::new(), &ExportOptions::new(FIXTURE_YEAR));

    assert_eq!(encoded_hashes(&first), encoded_hashes(&second));
    assert!(ExportSummary::from_outcomes(&first).is_complete());
}

#[test]
fn test_batch_matches_single_song_encoding() {
    let songs = page_songs();
    let outcomes = export_batch(&songs, &WavEncoder::new(), &ExportOptions::new(FIXTURE_YEAR));

    for (song, (_, file_name, hash)) in songs.iter().zip(encoded_hashes(&outcomes)) {
        assert_eq!(file_name, artifact_file_name(song, "wav"));
        assert_eq!(hash, compute_hash(&encode_song(song)));
    }
}

#[test]
fn test_exported_wav_is_readable() {
    let songs = page_songs();
    let bytes = encode_song(&songs[0]);

    let reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44_100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(
        reader.len() as usize,
        seedsound_backend_audio::sample_count(songs[0].music.duration_ms)
    );
}
