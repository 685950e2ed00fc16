//! Genre trait table.
//!
//! Every genre name that appears in a bundled locale pack has an explicit
//! entry. Drum style is part of the entry rather than inferred from the name,
//! so translated genre names behave the same as their English counterparts.

/// Drum arrangement family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrumStyle {
    /// Backbeat with an occasional on-beat hi-hat.
    Standard,
    /// Backbeat with hi-hats on every eighth note.
    Electronic,
    /// Backbeat with syncopated extra kicks.
    Heavy,
}

/// Slowest tempo the composer will draw, in BPM.
pub const MIN_TEMPO: u32 = 20;
/// Fastest tempo the composer will draw, in BPM.
pub const MAX_TEMPO: u32 = 300;

/// Composition settings for a genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenreTraits {
    /// Slowest tempo in BPM, inclusive.
    pub min_tempo: u32,
    /// Fastest tempo in BPM, inclusive.
    pub max_tempo: u32,
    /// Draw from minor/blues scales instead of major/pentatonic.
    pub prefer_minor: bool,
    pub drum_style: DrumStyle,
}

impl GenreTraits {
    /// Settings for genres missing from the table.
    pub const DEFAULT: GenreTraits = GenreTraits::new(100, 130, false, DrumStyle::Standard);

    const fn new(min_tempo: u32, max_tempo: u32, prefer_minor: bool, drum_style: DrumStyle) -> Self {
        Self {
            min_tempo,
            max_tempo,
            prefer_minor,
            drum_style,
        }
    }

    /// Inclusive tempo bounds, clamped into `MIN_TEMPO..=MAX_TEMPO` and
    /// ordered so that the low bound never exceeds the high one.
    pub fn tempo_range(&self) -> (u32, u32) {
        let lo = self.min_tempo.clamp(MIN_TEMPO, MAX_TEMPO);
        let hi = self.max_tempo.clamp(lo, MAX_TEMPO);
        (lo, hi)
    }

    /// Returns true if `tempo` lies within [`tempo_range`](Self::tempo_range).
    pub fn contains_tempo(&self, tempo: u32) -> bool {
        let (lo, hi) = self.tempo_range();
        (lo..=hi).contains(&tempo)
    }
}

use DrumStyle::{Electronic, Heavy, Standard};

static GENRE_TABLE: &[(&str, GenreTraits)] = &[
    // English names (also used by the German pack where identical)
    ("Rock", GenreTraits::new(110, 140, false, Heavy)),
    ("Pop", GenreTraits::new(100, 130, false, Standard)),
    ("Electronic", GenreTraits::new(120, 150, false, Electronic)),
    ("Hip-Hop", GenreTraits::new(85, 100, true, Standard)),
    ("R&B", GenreTraits::new(70, 95, true, Standard)),
    ("Jazz", GenreTraits::new(90, 140, true, Standard)),
    ("Blues", GenreTraits::new(70, 100, true, Standard)),
    ("Country", GenreTraits::new(100, 130, false, Standard)),
    ("Folk", GenreTraits::new(90, 120, false, Standard)),
    ("Classical", GenreTraits::new(60, 120, false, Standard)),
    ("Metal", GenreTraits::new(140, 180, true, Heavy)),
    ("Punk", GenreTraits::new(150, 190, false, Heavy)),
    ("Indie", GenreTraits::new(100, 130, false, Standard)),
    ("Alternative", GenreTraits::new(110, 140, true, Standard)),
    ("Soul", GenreTraits::new(75, 100, true, Standard)),
    ("Funk", GenreTraits::new(100, 130, true, Standard)),
    ("Disco", GenreTraits::new(115, 130, false, Electronic)),
    ("House", GenreTraits::new(120, 130, false, Electronic)),
    ("Techno", GenreTraits::new(125, 145, true, Electronic)),
    ("Trance", GenreTraits::new(130, 150, false, Electronic)),
    ("Ambient", GenreTraits::new(60, 90, true, Standard)),
    ("Reggae", GenreTraits::new(80, 100, true, Standard)),
    ("Latin", GenreTraits::new(100, 130, false, Standard)),
    ("World", GenreTraits::new(90, 120, false, Standard)),
    ("Heavy Metal", GenreTraits::new(140, 180, true, Heavy)),
    ("Rock'n'Roll", GenreTraits::new(130, 160, false, Heavy)),
    // German
    ("Elektronisch", GenreTraits::new(120, 150, false, Electronic)),
    ("Klassik", GenreTraits::new(60, 120, false, Standard)),
    ("Schlager", GenreTraits::new(100, 130, false, Standard)),
    ("Volksmusik", GenreTraits::new(90, 120, false, Standard)),
    // Ukrainian
    ("Рок", GenreTraits::new(110, 140, false, Heavy)),
    ("Поп", GenreTraits::new(100, 130, false, Standard)),
    ("Електроніка", GenreTraits::new(120, 150, false, Electronic)),
    ("Хіп-Хоп", GenreTraits::new(85, 100, true, Standard)),
    ("Джаз", GenreTraits::new(90, 140, true, Standard)),
    ("Блюз", GenreTraits::new(70, 100, true, Standard)),
    ("Кантрі", GenreTraits::new(100, 130, false, Standard)),
    ("Фолк", GenreTraits::new(90, 120, false, Standard)),
    ("Класика", GenreTraits::new(60, 120, false, Standard)),
    ("Метал", GenreTraits::new(140, 180, true, Heavy)),
    ("Панк", GenreTraits::new(150, 190, false, Heavy)),
    ("Інді", GenreTraits::new(100, 130, false, Standard)),
    ("Альтернатива", GenreTraits::new(110, 140, true, Standard)),
    ("Соул", GenreTraits::new(75, 100, true, Standard)),
    ("Фанк", GenreTraits::new(100, 130, true, Standard)),
    ("Диско", GenreTraits::new(115, 130, false, Electronic)),
    ("Хаус", GenreTraits::new(120, 130, false, Electronic)),
    ("Техно", GenreTraits::new(125, 145, true, Electronic)),
    ("Транс", GenreTraits::new(130, 150, false, Electronic)),
    ("Ембієнт", GenreTraits::new(60, 90, true, Standard)),
    ("Реггі", GenreTraits::new(80, 100, true, Standard)),
    ("Українська Естрада", GenreTraits::new(100, 130, false, Standard)),
];

/// Looks up a genre by exact name, falling back to [`GenreTraits::DEFAULT`].
pub fn genre_traits(genre: &str) -> GenreTraits {
    find_genre(genre).unwrap_or(GenreTraits::DEFAULT)
}

/// Looks up a genre by exact name.
pub fn find_genre(genre: &str) -> Option<GenreTraits> {
    GENRE_TABLE
        .iter()
        .find(|(name, _)| *name == genre)
        .map(|(_, traits)| *traits)
}

/// Every genre name in the table.
pub fn known_genres() -> impl Iterator<Item = &'static str> {
    GENRE_TABLE.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedsound_backend_text::available_locales;
    use seedsound_backend_text::locale_pack;

    #[test]
    fn test_every_locale_genre_has_an_entry() {
        for (code, _) in available_locales() {
            for genre in locale_pack(code).genres {
                assert!(find_genre(genre).is_some(), "{code}: no entry for {genre}");
            }
        }
    }

    #[test]
    fn test_unknown_genre_uses_default() {
        let traits = genre_traits("Polka-Step");
        assert_eq!(traits, GenreTraits::DEFAULT);
        assert_eq!(traits.min_tempo, 100);
        assert_eq!(traits.max_tempo, 130);
        assert!(!traits.prefer_minor);
        assert_eq!(traits.drum_style, DrumStyle::Standard);
    }

    #[test]
    fn test_bounds_are_ordered() {
        for (name, traits) in GENRE_TABLE {
            assert!(traits.min_tempo > 0, "{name}");
            assert!(traits.min_tempo <= traits.max_tempo, "{name}");
            assert_eq!(traits.tempo_range(), (traits.min_tempo, traits.max_tempo), "{name}");
        }
    }

    #[test]
    fn test_tempo_range_clamps_degenerate_bounds() {
        let zero = GenreTraits {
            min_tempo: 0,
            max_tempo: 0,
            ..GenreTraits::DEFAULT
        };
        assert_eq!(zero.tempo_range(), (MIN_TEMPO, MIN_TEMPO));

        let inverted = GenreTraits {
            min_tempo: 150,
            max_tempo: 90,
            ..GenreTraits::DEFAULT
        };
        assert_eq!(inverted.tempo_range(), (150, 150));
        assert!(!inverted.contains_tempo(90));

        let huge = GenreTraits {
            min_tempo: 500,
            max_tempo: u32::MAX,
            ..GenreTraits::DEFAULT
        };
        assert_eq!(huge.tempo_range(), (MAX_TEMPO, MAX_TEMPO));
    }

    #[test]
    fn test_translations_share_drum_style() {
        assert_eq!(genre_traits("Рок").drum_style, genre_traits("Rock").drum_style);
        assert_eq!(
            genre_traits("Електроніка").drum_style,
            genre_traits("Electronic").drum_style
        );
        assert_eq!(genre_traits("Хаус").drum_style, DrumStyle::Electronic);
        assert_eq!(genre_traits("Панк").drum_style, DrumStyle::Heavy);
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = known_genres().collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
