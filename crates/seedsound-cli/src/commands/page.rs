//! Page command implementation

use std::process::ExitCode;

use anyhow::{Context, Result};
use seedsound_catalog::generate_page;

use super::{page_request, to_json};

/// Run the page command
///
/// Page size is clamped to 50 and likes to [0, 10] before generation.
pub fn run(
    locale: &str,
    seed: i64,
    likes: f64,
    page: u32,
    page_size: u32,
    pretty: bool,
) -> Result<ExitCode> {
    let request = page_request(locale, seed, likes, page, page_size);
    let songs = generate_page(&request).with_context(|| format!("Failed to generate page {page}"))?;
    println!("{}", to_json(&songs, pretty)?);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_runs() {
        let code = run("de_DE", 99, 7.5, 2, 3, false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_page_zero_is_an_error() {
        assert!(run("en_US", 1, 5.0, 0, 10, false).is_err());
    }
}
