//! SeedSound End-to-End Test Infrastructure
//!
//! This crate holds the cross-crate tests for the catalog pipeline:
//!
//! - Generation: request -> `Song`
//! - Rendering: score -> normalized PCM
//! - **Determinism**: byte-identical songs, audio and exports across runs
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p seedsound-tests
//! ```

pub mod determinism;
pub mod fixtures;

// Re-export commonly used items
pub use determinism::{
    assert_deterministic, compute_hash, verify_determinism, DeterminismResult, DiffInfo,
};
pub use fixtures::{encode_song, scenario_request, song_json, FIXTURE_YEAR};
