//! In-memory catalog store.

use super::entity_store::{EntityStore, IntegrityProblem};
use super::error::CatalogResult;
use super::models::{Album, Artist, Relation, Song};
use super::trait_def::CatalogStore;

/// Catalog held entirely in memory.
///
/// Each entity kind has its own lock. Operations on different kinds are not
/// serialized against each other, and parents are never checked for
/// existence: deleting an artist leaves its albums and songs in place, still
/// indexed under the old artist id.
#[derive(Default)]
pub struct InMemoryCatalogStore {
    artists: EntityStore<Artist>,
    albums: EntityStore<Album>,
    songs: EntityStore<Song>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn add_artist(&self, artist: Artist) -> CatalogResult<()> {
        self.artists.add(artist)
    }

    fn get_artist(&self, id: &str) -> CatalogResult<Artist> {
        self.artists.get(id)
    }

    fn update_artist(&self, artist: Artist) -> CatalogResult<()> {
        self.artists.update(artist)
    }

    fn delete_artist(&self, id: &str) -> CatalogResult<()> {
        self.artists.delete(id)
    }

    fn list_artists(&self) -> Vec<String> {
        self.artists.list_all()
    }

    fn add_album(&self, album: Album) -> CatalogResult<()> {
        self.albums.add(album)
    }

    fn get_album(&self, id: &str) -> CatalogResult<Album> {
        self.albums.get(id)
    }

    fn update_album(&self, album: Album) -> CatalogResult<()> {
        self.albums.update(album)
    }

    fn delete_album(&self, id: &str) -> CatalogResult<()> {
        self.albums.delete(id)
    }

    fn list_albums(&self) -> Vec<String> {
        self.albums.list_all()
    }

    fn add_song(&self, song: Song) -> CatalogResult<()> {
        self.songs.add(song)
    }

    fn get_song(&self, id: &str) -> CatalogResult<Song> {
        self.songs.get(id)
    }

    fn update_song(&self, song: Song) -> CatalogResult<()> {
        self.songs.update(song)
    }

    fn delete_song(&self, id: &str) -> CatalogResult<()> {
        self.songs.delete(id)
    }

    fn list_songs(&self) -> Vec<String> {
        self.songs.list_all()
    }

    fn list_artist_albums(&self, artist_id: &str) -> CatalogResult<Vec<String>> {
        self.albums.list_children(Relation::ArtistAlbums, artist_id)
    }

    fn list_artist_songs(&self, artist_id: &str) -> CatalogResult<Vec<String>> {
        self.songs.list_children(Relation::ArtistSongs, artist_id)
    }

    fn list_album_songs(&self, album_id: &str) -> CatalogResult<Vec<String>> {
        self.songs.list_children(Relation::AlbumSongs, album_id)
    }

    fn get_artists_count(&self) -> usize {
        self.artists.len()
    }

    fn get_albums_count(&self) -> usize {
        self.albums.len()
    }

    fn get_songs_count(&self) -> usize {
        self.songs.len()
    }

    fn check_integrity(&self) -> Vec<IntegrityProblem> {
        let mut problems = self.artists.check_integrity();
        problems.extend(self.albums.check_integrity());
        problems.extend(self.songs.check_integrity());
        problems
    }
}
