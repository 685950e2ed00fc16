//! SeedSound CLI - Command-line interface for the deterministic song catalog
//!
//! This binary generates songs and pages as JSON, exports rendered songs as
//! WAV files and lists the bundled locales.

mod cli_args;

use std::process::ExitCode;

use clap::Parser;

use cli_args::{Cli, Commands};
use seedsound_cli::commands;
use seedsound_cli::commands::export::ExportArgs;

fn main() -> ExitCode {
    let cli = Cli::parse();
    seedsound_cli::logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Song {
            catalog,
            index,
            genre,
            pretty,
        } => commands::song::run(
            &catalog.locale,
            catalog.seed,
            catalog.likes,
            index,
            genre.as_deref(),
            pretty,
        ),
        Commands::Page {
            catalog,
            paging,
            pretty,
        } => commands::page::run(
            &catalog.locale,
            catalog.seed,
            catalog.likes,
            paging.page,
            paging.page_size,
            pretty,
        ),
        Commands::Export {
            catalog,
            paging,
            year,
            out_dir,
            jobs,
        } => commands::export::run(&ExportArgs {
            locale: &catalog.locale,
            seed: catalog.seed,
            likes: catalog.likes,
            page: paging.page,
            page_size: paging.page_size,
            year,
            out_dir: &out_dir,
            jobs: jobs.map(|j| j as usize),
        }),
        Commands::Locales { json } => commands::locales::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
