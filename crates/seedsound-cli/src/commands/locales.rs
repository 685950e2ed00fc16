//! Locales command implementation

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use seedsound_backend_text::available_locales;
use seedsound_spec::DEFAULT_LOCALE;
use serde::Serialize;

use super::to_json;

#[derive(Debug, Serialize)]
struct LocaleEntry {
    code: &'static str,
    name: &'static str,
    default: bool,
}

/// Run the locales command
pub fn run(json: bool) -> Result<ExitCode> {
    let entries: Vec<LocaleEntry> = available_locales()
        .into_iter()
        .map(|(code, name)| LocaleEntry {
            code,
            name,
            default: code == DEFAULT_LOCALE,
        })
        .collect();

    if json {
        println!("{}", to_json(&entries, true)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Available locales:".cyan().bold());
    for entry in &entries {
        let marker = if entry.default {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        println!("  {}  {}{}", entry.code.bold(), entry.name, marker);
    }
    Ok(ExitCode::SUCCESS)
}
