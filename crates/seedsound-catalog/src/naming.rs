//! Artifact file names.

use seedsound_spec::Song;

/// Characters that cannot appear in a file name on common filesystems.
const INVALID_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Name used when sanitizing leaves nothing.
const FALLBACK_STEM: &str = "untitled";

/// File name for an exported song: `"<Title> - <Album> - <Artist>.<ext>"`.
///
/// # Example
/// ```
/// use seedsound_catalog::naming::sanitize_file_stem;
///
/// assert_eq!(sanitize_file_stem("AC/DC: Live?"), "AC_DC_ Live");
/// assert_eq!(sanitize_file_stem("Vol. 2..."), "Vol. 2");
/// ```
pub fn artifact_file_name(song: &Song, extension: &str) -> String {
    let stem = format!("{} - {} - {}", song.title, song.album, song.artist);
    format!("{}.{}", sanitize_file_stem(&stem), extension)
}

/// Replaces invalid characters in a file name stem.
///
/// Invalid characters split the stem; empty pieces are dropped and the rest
/// are joined with `_`. Trailing dots and whitespace are trimmed.
pub fn sanitize_file_stem(stem: &str) -> String {
    let joined = stem
        .split(|c: char| c.is_control() || INVALID_CHARS.contains(&c))
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    let trimmed = joined.trim_end_matches(|c: char| c == '.' || c.is_whitespace());
    let trimmed = trimmed.trim_start();
    if trimmed.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Makes `file_name` unique against names already taken by appending the
/// catalog index before the extension.
pub fn disambiguate(file_name: &str, index: u32) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) => format!("{stem} ({index}).{ext}"),
        None => format!("{file_name} ({index})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invalid_chars_become_separators() {
        assert_eq!(sanitize_file_stem("a/b\\c:d*e?f\"g<h>i|j"), "a_b_c_d_e_f_g_h_i_j");
        assert_eq!(sanitize_file_stem("a//b"), "a_b");
        assert_eq!(sanitize_file_stem("tab\there"), "tab_here");
    }

    #[test]
    fn test_trailing_dots_trimmed() {
        assert_eq!(sanitize_file_stem("Song..."), "Song");
        assert_eq!(sanitize_file_stem("Song. . "), "Song");
        assert_eq!(sanitize_file_stem("..."), FALLBACK_STEM);
        assert_eq!(sanitize_file_stem("???"), FALLBACK_STEM);
    }

    #[test]
    fn test_unicode_is_preserved() {
        assert_eq!(sanitize_file_stem("Зоряне небо - Сингл"), "Зоряне небо - Сингл");
    }

    #[test]
    fn test_disambiguate() {
        assert_eq!(disambiguate("a - b - c.wav", 7), "a - b - c (7).wav");
        assert_eq!(disambiguate("noext", 2), "noext (2)");
    }
}
