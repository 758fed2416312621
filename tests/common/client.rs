//! HTTP client for end-to-end tests
//!
//! Wraps reqwest and provides one method per catalog endpoint.
//! When API routes or request formats change, update only this file.
#![allow(dead_code)]

use super::constants::*;
use reqwest::Response;
use serde::Serialize;
use std::time::Duration;
use tunestore::catalog_store::{Album, Artist, Song};

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Response {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await
            .unwrap_or_else(|err| panic!("POST {} failed: {}", path, err))
    }

    /// POST with a raw body, for malformed input tests
    pub async fn post_raw(&self, path: &str, body: impl Into<reqwest::Body>) -> Response {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap_or_else(|err| panic!("POST {} failed: {}", path, err))
    }

    /// GET /
    pub async fn get_stats(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Get stats request failed")
    }

    // ========================================================================
    // Artist Endpoints
    // ========================================================================

    /// POST /addArtist
    pub async fn add_artist(&self, artist: &Artist) -> Response {
        self.post_json("/addArtist", artist).await
    }

    /// POST /getArtist
    pub async fn get_artist(&self, id: &str) -> Response {
        self.post_json("/getArtist", id).await
    }

    /// POST /updateArtist
    pub async fn update_artist(&self, artist: &Artist) -> Response {
        self.post_json("/updateArtist", artist).await
    }

    /// POST /deleteArtist
    pub async fn delete_artist(&self, id: &str) -> Response {
        self.post_json("/deleteArtist", id).await
    }

    /// GET /getAllArtists
    pub async fn get_all_artists(&self) -> Response {
        self.client
            .get(format!("{}/getAllArtists", self.base_url))
            .send()
            .await
            .expect("Get all artists request failed")
    }

    /// POST /getArtistAlbums
    pub async fn get_artist_albums(&self, artist_id: &str) -> Response {
        self.post_json("/getArtistAlbums", artist_id).await
    }

    /// POST /getArtistSongs
    pub async fn get_artist_songs(&self, artist_id: &str) -> Response {
        self.post_json("/getArtistSongs", artist_id).await
    }

    // ========================================================================
    // Album Endpoints
    // ========================================================================

    /// POST /addAlbum
    pub async fn add_album(&self, album: &Album) -> Response {
        self.post_json("/addAlbum", album).await
    }

    /// POST /getAlbum
    pub async fn get_album(&self, id: &str) -> Response {
        self.post_json("/getAlbum", id).await
    }

    /// POST /updateAlbum
    pub async fn update_album(&self, album: &Album) -> Response {
        self.post_json("/updateAlbum", album).await
    }

    /// POST /deleteAlbum
    pub async fn delete_album(&self, id: &str) -> Response {
        self.post_json("/deleteAlbum", id).await
    }

    /// POST /getAllAlbums
    pub async fn get_all_albums(&self) -> Response {
        self.client
            .post(format!("{}/getAllAlbums", self.base_url))
            .send()
            .await
            .expect("Get all albums request failed")
    }

    /// POST /getAlbumSongs
    pub async fn get_album_songs(&self, album_id: &str) -> Response {
        self.post_json("/getAlbumSongs", album_id).await
    }

    // ========================================================================
    // Song Endpoints
    // ========================================================================

    /// POST /addSong
    pub async fn add_song(&self, song: &Song) -> Response {
        self.post_json("/addSong", song).await
    }

    /// POST /getSong
    pub async fn get_song(&self, id: &str) -> Response {
        self.post_json("/getSong", id).await
    }

    /// POST /updateSong
    pub async fn update_song(&self, song: &Song) -> Response {
        self.post_json("/updateSong", song).await
    }

    /// POST /deleteSong
    pub async fn delete_song(&self, id: &str) -> Response {
        self.post_json("/deleteSong", id).await
    }

    /// GET /getAllSongs
    pub async fn get_all_songs(&self) -> Response {
        self.client
            .get(format!("{}/getAllSongs", self.base_url))
            .send()
            .await
            .expect("Get all songs request failed")
    }
}
