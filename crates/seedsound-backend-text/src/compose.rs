//! Song metadata composition.
//!
//! All fields come from one [`StreamRng`] seeded with the song's text
//! sub-seed. Draw order is fixed: title, artist, album, genre, review, lyrics.
//! Changing the order or the number of draws in any step changes every field
//! after it.

use seedsound_spec::StreamRng;

use crate::locale::LocalePack;

/// Number of title patterns.
const TITLE_PATTERNS: u32 = 5;
/// Number of band name patterns.
const BAND_PATTERNS: u32 = 4;
/// Number of non-single album patterns.
const ALBUM_PATTERNS: u32 = 3;

/// Review length bounds in sentences, inclusive.
pub const REVIEW_SENTENCES: (i32, i32) = (2, 3);
/// Lyric length bounds in lines, inclusive.
pub const LYRIC_LINES: (i32, i32) = (8, 15);

/// Textual metadata for one song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongText {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub review: String,
    pub lyrics: Vec<String>,
}

/// Composes all text fields from the text sub-seed.
pub fn compose_text(text_seed: u32, pack: &LocalePack) -> SongText {
    let mut rng = StreamRng::new(text_seed);

    let title = compose_title(&mut rng, pack);
    let artist = compose_artist(&mut rng, pack);
    let album = compose_album(&mut rng, pack);
    let genre = rng.pick(pack.genres).to_string();
    let review = compose_review(&mut rng, pack);
    let lyrics = compose_lyrics(&mut rng, pack);

    SongText {
        title,
        artist,
        album,
        genre,
        review,
        lyrics,
    }
}

fn compose_title(rng: &mut StreamRng, pack: &LocalePack) -> String {
    match rng.below(TITLE_PATTERNS) {
        0 => join(&[*rng.pick(pack.title_prefixes), *rng.pick(pack.title_nouns)]),
        1 => join(&[*rng.pick(pack.title_adjectives), *rng.pick(pack.title_nouns)]),
        2 => join(&[*rng.pick(pack.title_nouns), *rng.pick(pack.title_suffixes)]),
        3 => join(&[
            *rng.pick(pack.title_prefixes),
            *rng.pick(pack.title_adjectives),
            *rng.pick(pack.title_nouns),
        ]),
        _ => rng.pick(pack.title_nouns).to_string(),
    }
}

fn compose_artist(rng: &mut StreamRng, pack: &LocalePack) -> String {
    if rng.below(2) == 0 {
        match rng.below(BAND_PATTERNS) {
            0 => join(&[*rng.pick(pack.band_prefixes), *rng.pick(pack.band_nouns)]),
            1 => join(&[*rng.pick(pack.band_nouns), *rng.pick(pack.band_suffixes)]),
            2 => join(&[
                *rng.pick(pack.band_prefixes),
                *rng.pick(pack.band_nouns),
                *rng.pick(pack.band_suffixes),
            ]),
            _ => rng.pick(pack.band_nouns).to_string(),
        }
    } else {
        join(&[*rng.pick(pack.given_names), *rng.pick(pack.family_names)])
    }
}

fn compose_album(rng: &mut StreamRng, pack: &LocalePack) -> String {
    if rng.below(4) == 0 {
        return pack.single_label.to_string();
    }

    match rng.below(ALBUM_PATTERNS) {
        0 => join(&[*rng.pick(pack.title_prefixes), *rng.pick(pack.album_words)]),
        1 => join(&[*rng.pick(pack.album_words), *rng.pick(pack.title_suffixes)]),
        _ => rng.pick(pack.album_words).to_string(),
    }
}

fn compose_review(rng: &mut StreamRng, pack: &LocalePack) -> String {
    let sentences = rng.range_inclusive(REVIEW_SENTENCES.0, REVIEW_SENTENCES.1);
    let picked: Vec<&str> = (0..sentences)
        .map(|_| *rng.pick(pack.review_phrases))
        .collect();
    picked.join(" ")
}

fn compose_lyrics(rng: &mut StreamRng, pack: &LocalePack) -> Vec<String> {
    let lines = rng.range_inclusive(LYRIC_LINES.0, LYRIC_LINES.1);
    (0..lines)
        .map(|_| rng.pick(pack.lyric_phrases).to_string())
        .collect()
}

/// Joins words with single spaces. Arguments are evaluated left to right, so
/// the draws happen in reading order.
fn join(words: &[&str]) -> String {
    words.join(" ")
}
