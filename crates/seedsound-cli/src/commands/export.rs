//! Export command implementation
//!
//! Generates a page of songs, renders and encodes each one on a worker pool
//! and writes the files to an output directory.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use seedsound_backend_audio::WavEncoder;
use seedsound_catalog::{
    disambiguate, export_batch, generate_page, ExportOptions, ExportOutcome, ExportSummary,
};
use seedsound_spec::BackendError;
use tracing::debug;

use super::page_request;

/// Arguments for the export command.
#[derive(Debug, Clone)]
pub struct ExportArgs<'a> {
    pub locale: &'a str,
    pub seed: i64,
    pub likes: f64,
    pub page: u32,
    pub page_size: u32,
    pub year: u16,
    pub out_dir: &'a Path,
    pub jobs: Option<usize>,
}

/// Run the export command
///
/// # Returns
/// Exit code: 0 if every song was written, 1 if any failed
pub fn run(args: &ExportArgs<'_>) -> Result<ExitCode> {
    let request = page_request(args.locale, args.seed, args.likes, args.page, args.page_size);
    let songs = generate_page(&request)
        .with_context(|| format!("Failed to generate page {}", args.page))?
        .songs;

    println!(
        "{} {} songs (page {}, seed {}) to {}",
        "Exporting:".cyan().bold(),
        songs.len(),
        args.page,
        args.seed,
        args.out_dir.display()
    );

    fs::create_dir_all(args.out_dir).with_context(|| {
        format!("Failed to create output directory: {}", args.out_dir.display())
    })?;

    let mut options = ExportOptions::new(args.year);
    if let Some(jobs) = args.jobs {
        options = options.with_jobs(jobs);
    }
    let outcomes = export_batch(&songs, &WavEncoder::new(), &options);

    let mut written = HashSet::new();
    for outcome in &outcomes {
        match outcome {
            ExportOutcome::Encoded {
                index,
                file_name,
                bytes,
            } => {
                let name = free_file_name(args.out_dir, file_name, *index, &written);
                let path = args.out_dir.join(&name);
                fs::write(&path, bytes)
                    .with_context(|| format!("Failed to write: {}", path.display()))?;
                debug!(path = %path.display(), bytes = bytes.len(), "wrote artifact");
                println!("  {} {}", "wrote".green(), name);
                written.insert(name.to_lowercase());
            }
            ExportOutcome::Failed { error } => {
                println!(
                    "  {} [{}] {}",
                    "failed".red().bold(),
                    error.code(),
                    error
                );
            }
            ExportOutcome::Cancelled { index } => {
                println!("  {} song {}", "cancelled".yellow(), index);
            }
        }
    }

    let summary = ExportSummary::from_outcomes(&outcomes);
    println!();
    println!(
        "{} {} encoded, {} failed, {} cancelled",
        "Summary:".blue().bold(),
        summary.encoded,
        summary.failed,
        summary.cancelled
    );

    if summary.is_complete() {
        println!("{}", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Picks a name that neither collides, ignoring case, with a file written
/// earlier in this run nor exists in `out_dir` already.
///
/// `taken` holds lowercased names.
fn free_file_name(out_dir: &Path, file_name: &str, index: u32, taken: &HashSet<String>) -> String {
    let is_free =
        |name: &str| !taken.contains(&name.to_lowercase()) && !out_dir.join(name).exists();

    if is_free(file_name) {
        return file_name.to_string();
    }
    let indexed = disambiguate(file_name, index);
    if is_free(&indexed) {
        return indexed;
    }
    (2u32..)
        .map(|n| disambiguate(&indexed, n))
        .find(|name| is_free(name))
        .unwrap_or(indexed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn args(out_dir: &Path) -> ExportArgs<'_> {
        ExportArgs {
            locale: "en_US",
            seed: 12345,
            likes: 5.0,
            page: 1,
            page_size: 2,
            year: 2024,
            out_dir,
            jobs: Some(2),
        }
    }

    fn read_dir_sorted(dir: &Path) -> Vec<(String, Vec<u8>)> {
        let mut files: Vec<(String, Vec<u8>)> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| {
                let entry = entry.unwrap();
                (
                    entry.file_name().to_string_lossy().to_string(),
                    fs::read(entry.path()).unwrap(),
                )
            })
            .collect();
        files.sort();
        files
    }

    #[test]
    fn test_free_file_name_ignores_case() {
        let tmp = tempfile::tempdir().unwrap();
        let mut taken = HashSet::new();
        taken.insert("night drive - single - the owls.wav".to_string());

        assert_eq!(
            free_file_name(tmp.path(), "Night Drive - Single - The Owls.wav", 4, &taken),
            "Night Drive - Single - The Owls (4).wav"
        );
        assert_eq!(free_file_name(tmp.path(), "Other.wav", 5, &taken), "Other.wav");
    }

    #[test]
    fn test_free_file_name_skips_existing_files() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("Song.wav"), b"old").unwrap();
        fs::write(tmp.path().join("Song (3).wav"), b"old").unwrap();

        let name = free_file_name(tmp.path(), "Song.wav", 3, &HashSet::new());
        assert_eq!(name, "Song (3) (2).wav");
    }

    #[test]
    fn test_second_export_keeps_earlier_files() {
        let tmp = tempfile::tempdir().unwrap();

        run(&args(tmp.path())).unwrap();
        let first = read_dir_sorted(tmp.path());
        run(&args(tmp.path())).unwrap();
        let both = read_dir_sorted(tmp.path());

        assert_eq!(both.len(), first.len() * 2);
        for file in &first {
            assert!(both.contains(file), "{} was overwritten", file.0);
        }
    }

    #[test]
    fn test_export_writes_readable_wavs() {
        let tmp = tempfile::tempdir().unwrap();
        let out_dir = tmp.path().join("out");

        let code = run(&args(&out_dir)).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let files = read_dir_sorted(&out_dir);
        assert_eq!(files.len(), 2);
        for (name, bytes) in &files {
            assert!(name.ends_with(".wav"));
            let reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
            assert_eq!(reader.spec().sample_rate, 44_100);
            assert_eq!(reader.spec().channels, 1);
            assert!(reader.len() > 0);
        }
    }

    #[test]
    fn test_export_is_byte_identical_across_runs() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();

        run(&args(first.path())).unwrap();
        let mut again = args(second.path());
        again.jobs = None;
        run(&again).unwrap();

        let a = read_dir_sorted(first.path());
        let b = read_dir_sorted(second.path());
        assert_eq!(a.len(), b.len());
        for ((name_a, bytes_a), (name_b, bytes_b)) in a.iter().zip(&b) {
            assert_eq!(name_a, name_b);
            assert!(bytes_a == bytes_b, "{name_a} differs between runs");
        }
    }
}
