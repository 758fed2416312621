//! CatalogStore trait definition.
//!
//! The HTTP layer only talks to the catalog through this trait, it never
//! sees tables, indices or locks.

use super::entity_store::IntegrityProblem;
use super::error::CatalogResult;
use super::models::{Album, Artist, Song};

/// Typed catalog operations.
///
/// Values are moved in and cloned out, callers never hold a reference into
/// the store. Every failing call leaves the catalog unchanged.
pub trait CatalogStore: Send + Sync {
    // =========================================================================
    // Artists
    // =========================================================================

    fn add_artist(&self, artist: Artist) -> CatalogResult<()>;

    fn get_artist(&self, id: &str) -> CatalogResult<Artist>;

    fn update_artist(&self, artist: Artist) -> CatalogResult<()>;

    fn delete_artist(&self, id: &str) -> CatalogResult<()>;

    /// Ids of every artist, in no particular order.
    fn list_artists(&self) -> Vec<String>;

    // =========================================================================
    // Albums
    // =========================================================================

    fn add_album(&self, album: Album) -> CatalogResult<()>;

    fn get_album(&self, id: &str) -> CatalogResult<Album>;

    /// Moves the album to another artist bucket when `artist_id` changed.
    fn update_album(&self, album: Album) -> CatalogResult<()>;

    fn delete_album(&self, id: &str) -> CatalogResult<()>;

    fn list_albums(&self) -> Vec<String>;

    // =========================================================================
    // Songs
    // =========================================================================

    fn add_song(&self, song: Song) -> CatalogResult<()>;

    fn get_song(&self, id: &str) -> CatalogResult<Song>;

    /// Moves the song between album and artist buckets as one step.
    fn update_song(&self, song: Song) -> CatalogResult<()>;

    fn delete_song(&self, id: &str) -> CatalogResult<()>;

    fn list_songs(&self) -> Vec<String>;

    // =========================================================================
    // Reverse lookups
    // =========================================================================

    /// Ids of the albums whose `artist_id` is `artist_id`.
    fn list_artist_albums(&self, artist_id: &str) -> CatalogResult<Vec<String>>;

    /// Ids of the songs whose `artist_id` is `artist_id`.
    fn list_artist_songs(&self, artist_id: &str) -> CatalogResult<Vec<String>>;

    /// Ids of the songs whose `album_id` is `album_id`.
    fn list_album_songs(&self, album_id: &str) -> CatalogResult<Vec<String>>;

    // =========================================================================
    // Counts (for metrics)
    // =========================================================================

    fn get_artists_count(&self) -> usize;

    fn get_albums_count(&self) -> usize;

    fn get_songs_count(&self) -> usize;

    // =========================================================================
    // Integrity
    // =========================================================================

    /// Every disagreement between the tables and their reverse indices.
    fn check_integrity(&self) -> Vec<IntegrityProblem>;
}
