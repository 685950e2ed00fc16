//! Single-song and page generation.

use rayon::prelude::*;
use seedsound_backend_music::compose;
use seedsound_backend_text::{compose_cover, compose_text, is_known_locale, locale_pack, roll_likes};
use seedsound_spec::{derive_song_seeds, PageRequest, Song, SongPage, SongRequest};
use tracing::debug;

use crate::error::CatalogResult;

/// Generates one catalog entry.
///
/// Validates the request, then assembles the song from four independent
/// streams. Equal requests always produce equal songs.
pub fn generate_song(request: &SongRequest) -> CatalogResult<Song> {
    request.validate()?;
    Ok(assemble(request))
}

/// Generates a page of consecutive entries.
///
/// Entries `(page - 1) * page_size + 1 ..= page * page_size` are generated
/// in parallel and returned in index order.
pub fn generate_page(request: &PageRequest) -> CatalogResult<SongPage> {
    request.validate()?;
    let first = request.first_index()?;

    let songs: Vec<Song> = (0..request.page_size)
        .into_par_iter()
        .map(|offset| assemble(&request.song_request(first + offset)))
        .collect();

    debug!(
        page = request.page,
        page_size = request.page_size,
        first,
        "generated page"
    );

    Ok(SongPage {
        songs,
        page: request.page,
        page_size: request.page_size,
        has_more: true,
    })
}

/// Builds a song from an already validated request.
fn assemble(request: &SongRequest) -> Song {
    if !is_known_locale(&request.locale) {
        debug!(locale = %request.locale, "unknown locale, using default pack");
    }

    let seeds = derive_song_seeds(request.seed, request.index);
    let pack = locale_pack(&request.locale);

    let mut text = compose_text(seeds.text, pack);
    // The genre draw above is still consumed, so the hint changes nothing
    // else in the text stream.
    if let Some(hint) = request.genre.as_deref().map(str::trim).filter(|g| !g.is_empty()) {
        text.genre = hint.to_string();
    }

    let likes = roll_likes(seeds.likes, request.average_likes);
    let cover = compose_cover(seeds.cover);
    let music = compose(seeds.music, &text.genre);

    debug!(
        index = request.index,
        genre = %text.genre,
        tempo = music.tempo,
        key = %music.key,
        events = music.event_count(),
        "generated song"
    );

    Song {
        index: request.index,
        title: text.title,
        artist: text.artist,
        album: text.album,
        genre: text.genre,
        likes,
        review: text.review,
        lyrics: text.lyrics,
        cover,
        music,
    }
}
