//! Locale word banks.
//!
//! Packs are `static` data compiled into the binary. Lookup never fails:
//! unknown codes resolve to [`DEFAULT_LOCALE`](seedsound_spec::DEFAULT_LOCALE).

mod de_de;
mod en_us;
mod uk_ua;

/// Word lists for one locale. Every list is non-empty.
#[derive(Debug)]
pub struct LocalePack {
    /// Locale code, e.g. `"en_US"`.
    pub code: &'static str,
    /// Display name, e.g. `"English (US)"`.
    pub name: &'static str,
    pub title_prefixes: &'static [&'static str],
    pub title_nouns: &'static [&'static str],
    pub title_suffixes: &'static [&'static str],
    pub title_adjectives: &'static [&'static str],
    pub band_prefixes: &'static [&'static str],
    pub band_nouns: &'static [&'static str],
    pub band_suffixes: &'static [&'static str],
    pub album_words: &'static [&'static str],
    pub given_names: &'static [&'static str],
    pub family_names: &'static [&'static str],
    pub genres: &'static [&'static str],
    pub review_phrases: &'static [&'static str],
    pub lyric_phrases: &'static [&'static str],
    /// Album label used for singles.
    pub single_label: &'static str,
}

impl LocalePack {
    /// All word lists with their names, for integrity checks.
    pub fn lists(&self) -> [(&'static str, &'static [&'static str]); 13] {
        [
            ("title_prefixes", self.title_prefixes),
            ("title_nouns", self.title_nouns),
            ("title_suffixes", self.title_suffixes),
            ("title_adjectives", self.title_adjectives),
            ("band_prefixes", self.band_prefixes),
            ("band_nouns", self.band_nouns),
            ("band_suffixes", self.band_suffixes),
            ("album_words", self.album_words),
            ("given_names", self.given_names),
            ("family_names", self.family_names),
            ("genres", self.genres),
            ("review_phrases", self.review_phrases),
            ("lyric_phrases", self.lyric_phrases),
        ]
    }
}

/// Every pack, default first.
static PACKS: [&LocalePack; 3] = [&en_us::EN_US, &de_de::DE_DE, &uk_ua::UK_UA];

/// Resolves a locale code, falling back to `en_US`.
pub fn locale_pack(code: &str) -> &'static LocalePack {
    PACKS
        .iter()
        .copied()
        .find(|pack| pack.code == code)
        .unwrap_or(PACKS[0])
}

/// Returns true if `code` names a bundled pack.
pub fn is_known_locale(code: &str) -> bool {
    PACKS.iter().any(|pack| pack.code == code)
}

/// `(code, display name)` for every bundled pack.
pub fn available_locales() -> Vec<(&'static str, &'static str)> {
    PACKS.iter().map(|pack| (pack.code, pack.name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_locales_resolve() {
        assert_eq!(locale_pack("en_US").code, "en_US");
        assert_eq!(locale_pack("de_DE").code, "de_DE");
        assert_eq!(locale_pack("uk_UA").code, "uk_UA");
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        assert_eq!(locale_pack("fr_FR").code, seedsound_spec::DEFAULT_LOCALE);
        assert_eq!(locale_pack("").code, seedsound_spec::DEFAULT_LOCALE);
        assert!(!is_known_locale("fr_FR"));
    }

    #[test]
    fn test_available_locales() {
        let locales = available_locales();
        assert_eq!(
            locales,
            vec![
                ("en_US", "English (US)"),
                ("de_DE", "German (Germany)"),
                ("uk_UA", "Ukrainian (Ukraine)"),
            ]
        );
    }

    #[test]
    fn test_every_list_is_populated() {
        for pack in PACKS {
            for (name, list) in pack.lists() {
                assert!(!list.is_empty(), "{}.{} is empty", pack.code, name);
                assert!(
                    list.iter().all(|w| !w.trim().is_empty()),
                    "{}.{} has a blank entry",
                    pack.code,
                    name
                );
            }
            assert!(!pack.single_label.is_empty());
        }
    }
}
