//! CLI argument definitions for the SeedSound command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use seedsound_spec::DEFAULT_LOCALE;

/// SeedSound - Deterministic Song Catalog Generator
#[derive(Parser)]
#[command(name = "seedsound")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Log debug events (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate one song and print it as JSON
    Song {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// 1-based catalog index
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        index: u32,

        /// Override the drawn genre
        #[arg(short, long)]
        genre: Option<String>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Generate a page of songs and print it as JSON
    Page {
        #[command(flatten)]
        catalog: CatalogArgs,

        #[command(flatten)]
        paging: PageArgs,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Render, encode and write a page of songs as WAV files
    Export {
        #[command(flatten)]
        catalog: CatalogArgs,

        #[command(flatten)]
        paging: PageArgs,

        /// Year written into every file's tags
        #[arg(long)]
        year: u16,

        /// Output directory (created if missing)
        #[arg(short, long)]
        out_dir: PathBuf,

        /// Worker threads (default: one per core)
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        jobs: Option<u64>,
    },

    /// List available locales
    Locales {
        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Arguments shared by every generating command.
#[derive(Args, Debug, Clone)]
pub(crate) struct CatalogArgs {
    /// Locale code; unknown codes fall back to en_US
    #[arg(short, long, default_value = DEFAULT_LOCALE)]
    pub locale: String,

    /// Base seed of the catalog
    #[arg(short, long, default_value_t = 12345, allow_negative_numbers = true)]
    pub seed: i64,

    /// Average likes per song, clamped to [0, 10]
    #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
    pub likes: f64,
}

/// Page selection.
#[derive(Args, Debug, Clone)]
pub(crate) struct PageArgs {
    /// 1-based page number
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Songs per page, clamped to [1, 50]
    #[arg(long, default_value_t = 10)]
    pub page_size: u32,
}
