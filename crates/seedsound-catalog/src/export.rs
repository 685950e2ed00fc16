//! Batch export over a worker pool.
//!
//! Each song is rendered and encoded independently. Outcomes come back in
//! input order, one per song, whatever order the workers finish in.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use seedsound_backend_audio::{render, Encoder, TagRecord};
use seedsound_spec::Song;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::CatalogError;
use crate::naming::artifact_file_name;

/// Shared flag that stops songs which have not started yet.
///
/// Songs already being rendered or encoded run to completion.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Idempotent.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Settings for [`export_batch`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Year written into every tag record.
    pub year: u16,
    /// Worker count. `None` uses rayon's global pool.
    #[serde(default)]
    pub jobs: Option<usize>,
    #[serde(skip)]
    pub cancel: CancelToken,
}

impl ExportOptions {
    pub fn new(year: u16) -> Self {
        Self {
            year,
            jobs: None,
            cancel: CancelToken::new(),
        }
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = Some(jobs);
        self
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }
}

/// Result of exporting one song.
#[derive(Debug)]
pub enum ExportOutcome {
    /// The song was encoded.
    Encoded {
        /// Song index.
        index: u32,
        /// Artifact file name, including extension.
        file_name: String,
        bytes: Vec<u8>,
    },
    /// Rendering or encoding failed; other songs are unaffected.
    Failed { error: CatalogError },
    /// Cancellation was requested before the song started.
    Cancelled { index: u32 },
}

impl ExportOutcome {
    pub fn is_encoded(&self) -> bool {
        matches!(self, ExportOutcome::Encoded { .. })
    }
}

/// Outcome counts for a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub encoded: usize,
    pub failed: usize,
    pub cancelled: usize,
}

impl ExportSummary {
    pub fn from_outcomes(outcomes: &[ExportOutcome]) -> Self {
        outcomes
            .iter()
            .fold(ExportSummary::default(), |mut summary, outcome| {
                match outcome {
                    ExportOutcome::Encoded { .. } => summary.encoded += 1,
                    ExportOutcome::Failed { .. } => summary.failed += 1,
                    ExportOutcome::Cancelled { .. } => summary.cancelled += 1,
                }
                summary
            })
    }

    /// True when every song was encoded.
    pub fn is_complete(&self) -> bool {
        self.failed == 0 && self.cancelled == 0
    }
}

/// Renders and encodes every song.
///
/// Returns one outcome per song, in input order.
pub fn export_batch(
    songs: &[Song],
    encoder: &dyn Encoder,
    options: &ExportOptions,
) -> Vec<ExportOutcome> {
    let run = || -> Vec<ExportOutcome> {
        songs
            .par_iter()
            .map(|song| export_one(song, encoder, options))
            .collect()
    };

    let outcomes = match options.jobs {
        Some(jobs) => match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
            Ok(pool) => pool.install(run),
            Err(err) => {
                warn!(jobs, error = %err, "could not build worker pool, using global pool");
                run()
            }
        },
        None => run(),
    };

    let summary = ExportSummary::from_outcomes(&outcomes);
    info!(
        encoded = summary.encoded,
        failed = summary.failed,
        cancelled = summary.cancelled,
        encoder = encoder.name(),
        "batch export finished"
    );
    outcomes
}

fn export_one(song: &Song, encoder: &dyn Encoder, options: &ExportOptions) -> ExportOutcome {
    if options.cancel.is_cancelled() {
        warn!(index = song.index, "export cancelled before start");
        return ExportOutcome::Cancelled { index: song.index };
    }

    let audio = match render(&song.music) {
        Ok(audio) => audio,
        Err(source) => {
            let error = CatalogError::InvalidComposition {
                index: song.index,
                source,
            };
            warn!(%error, "export failed");
            return ExportOutcome::Failed { error };
        }
    };

    let tags = TagRecord::for_song(song, options.year);
    match encoder.encode(&audio.to_pcm16(), &tags) {
        Ok(bytes) => ExportOutcome::Encoded {
            index: song.index,
            file_name: artifact_file_name(song, encoder.extension()),
            bytes,
        },
        Err(source) => {
            let error = CatalogError::EncodingFailed {
                index: song.index,
                source,
            };
            warn!(%error, "export failed");
            ExportOutcome::Failed { error }
        }
    }
}
