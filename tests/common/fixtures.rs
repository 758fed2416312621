//! Seed data for the test catalog

use super::constants::*;
use tunestore::catalog_store::{Album, Artist, CatalogResult, CatalogStore, Song};

pub fn test_artist(id: &str, name: &str) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        birthdate: "1961-04-02".to_string(),
    }
}

pub fn test_album(id: &str, name: &str, artist_id: &str) -> Album {
    Album {
        id: id.to_string(),
        name: name.to_string(),
        price: "9.99".to_string(),
        artist_id: artist_id.to_string(),
    }
}

pub fn test_song(id: &str, name: &str, album_id: &str, artist_id: &str) -> Song {
    Song {
        id: id.to_string(),
        name: name.to_string(),
        genre: "rock".to_string(),
        duration: SONG_DURATION.to_string(),
        price: "0.99".to_string(),
        album_id: album_id.to_string(),
        artist_id: artist_id.to_string(),
    }
}

#[allow(dead_code)]
pub fn sorted_ids(mut ids: Vec<String>) -> Vec<String> {
    ids.sort();
    ids
}

/// Fills the store with 2 artists, 2 albums and 4 songs: songs 1 to 3 on
/// album 1 by artist 1, song 4 on album 2 by artist 2.
pub fn populate_test_catalog(catalog: &dyn CatalogStore) -> CatalogResult<()> {
    catalog.add_artist(test_artist(ARTIST_1_ID, ARTIST_1_NAME))?;
    catalog.add_artist(test_artist(ARTIST_2_ID, ARTIST_2_NAME))?;

    catalog.add_album(test_album(ALBUM_1_ID, ALBUM_1_NAME, ARTIST_1_ID))?;
    catalog.add_album(test_album(ALBUM_2_ID, ALBUM_2_NAME, ARTIST_2_ID))?;

    catalog.add_song(test_song(SONG_1_ID, SONG_1_NAME, ALBUM_1_ID, ARTIST_1_ID))?;
    catalog.add_song(test_song(SONG_2_ID, "Middle Track", ALBUM_1_ID, ARTIST_1_ID))?;
    catalog.add_song(test_song(SONG_3_ID, "Closing Track", ALBUM_1_ID, ARTIST_1_ID))?;
    catalog.add_song(test_song(SONG_4_ID, SONG_4_NAME, ALBUM_2_ID, ARTIST_2_ID))?;

    Ok(())
}
