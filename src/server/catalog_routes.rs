//! JSON endpoints over the catalog store.
//!
//! Every endpoint takes a body that is either a whole entity or a JSON
//! string id. Failures are answered with 422 and a JSON string message.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{error, warn};

use super::metrics::{record_error, update_catalog_metrics};
use super::state::{GuardedCatalogStore, ServerState};
use crate::catalog_store::{Album, Artist, CatalogError, CatalogResult, CatalogStore, Song};

const ADD_ARTIST: &str = "/addArtist";
const GET_ARTIST: &str = "/getArtist";
const UPDATE_ARTIST: &str = "/updateArtist";
const DELETE_ARTIST: &str = "/deleteArtist";
const GET_ALL_ARTISTS: &str = "/getAllArtists";

const ADD_ALBUM: &str = "/addAlbum";
const GET_ALBUM: &str = "/getAlbum";
const UPDATE_ALBUM: &str = "/updateAlbum";
const DELETE_ALBUM: &str = "/deleteAlbum";
const GET_ALL_ALBUMS: &str = "/getAllAlbums";

const ADD_SONG: &str = "/addSong";
const GET_SONG: &str = "/getSong";
const UPDATE_SONG: &str = "/updateSong";
const DELETE_SONG: &str = "/deleteSong";
const GET_ALL_SONGS: &str = "/getAllSongs";

const GET_ARTIST_ALBUMS: &str = "/getArtistAlbums";
const GET_ARTIST_SONGS: &str = "/getArtistSongs";
const GET_ALBUM_SONGS: &str = "/getAlbumSongs";

const UNREADABLE_BODY: &str = "Cannot read body from request";
const INVALID_JSON: &str = "Invalid JSON";

type RequestBody = Result<Bytes, BytesRejection>;

fn unprocessable(message: &str) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, Json(message)).into_response()
}

/// Reads the request body as JSON, or builds the 422 to send back.
fn decode_body<T: DeserializeOwned>(endpoint: &str, body: RequestBody) -> Result<T, Response> {
    let bytes = body.map_err(|rejection| {
        warn!("{}: cannot read body: {}", endpoint, rejection);
        record_error("unreadable_body", endpoint);
        unprocessable(UNREADABLE_BODY)
    })?;
    serde_json::from_slice(&bytes).map_err(|err| {
        warn!("{}: invalid JSON: {}", endpoint, err);
        record_error("invalid_json", endpoint);
        unprocessable(INVALID_JSON)
    })
}

fn catalog_failure(endpoint: &str, message: &str, err: &CatalogError) -> Response {
    if err.is_consistency_fault() {
        error!("{}: catalog index is inconsistent: {}", endpoint, err);
    } else {
        warn!("{}: {}", endpoint, err);
    }
    record_error(err.error_type(), endpoint);
    unprocessable(message)
}

fn mutation_response(
    catalog: &dyn CatalogStore,
    endpoint: &str,
    result: CatalogResult<()>,
    failure_message: &str,
) -> Response {
    match result {
        Ok(()) => {
            update_catalog_metrics(catalog);
            StatusCode::OK.into_response()
        }
        Err(err) => catalog_failure(endpoint, failure_message, &err),
    }
}

fn value_response<V: Serialize>(
    endpoint: &str,
    result: CatalogResult<V>,
    failure_message: &str,
) -> Response {
    match result {
        Ok(value) => Json(value).into_response(),
        Err(err) => catalog_failure(endpoint, failure_message, &err),
    }
}

// =============================================================================
// Artists
// =============================================================================

async fn add_artist(State(catalog): State<GuardedCatalogStore>, body: RequestBody) -> Response {
    let artist: Artist = match decode_body(ADD_ARTIST, body) {
        Ok(artist) => artist,
        Err(response) => return response,
    };
    let result = catalog.add_artist(artist);
    mutation_response(catalog.as_ref(), ADD_ARTIST, result, "Unable to store artist")
}

async fn get_artist(State(catalog): State<GuardedCatalogStore>, body: RequestBody) -> Response {
    let id: String = match decode_body(GET_ARTIST, body) {
        Ok(id) => id,
        Err(response) => return response,
    };
    value_response(GET_ARTIST, catalog.get_artist(&id), "Artist does not exist")
}

async fn update_artist(State(catalog): State<GuardedCatalogStore>, body: RequestBody) -> Response {
    let artist: Artist = match decode_body(UPDATE_ARTIST, body) {
        Ok(artist) => artist,
        Err(response) => return response,
    };
    let result = catalog.update_artist(artist);
    mutation_response(catalog.as_ref(), UPDATE_ARTIST, result, "Unable to update artist")
}

async fn delete_artist(State(catalog): State<GuardedCatalogStore>, body: RequestBody) -> Response {
    let id: String = match decode_body(DELETE_ARTIST, body) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let result = catalog.delete_artist(&id);
    mutation_response(catalog.as_ref(), DELETE_ARTIST, result, "Unable to delete artist")
}

async fn get_all_artists(State(catalog): State<GuardedCatalogStore>) -> Response {
    Json(catalog.list_artists()).into_response()
}

// =============================================================================
// Albums
// =============================================================================

async fn add_album(State(catalog): State<GuardedCatalogStore>, body: RequestBody) -> Response {
    let album: Album = match decode_body(ADD_ALBUM, body) {
        Ok(album) => album,
        Err(response) => return response,
    };
    let result = catalog.add_album(album);
    mutation_response(catalog.as_ref(), ADD_ALBUM, result, "Cannot add new album")
}

async fn get_album(State(catalog): State<GuardedCatalogStore>, body: RequestBody) -> Response {
    let id: String = match decode_body(GET_ALBUM, body) {
        Ok(id) => id,
        Err(response) => return response,
    };
    value_response(GET_ALBUM, catalog.get_album(&id), "Album does not exist")
}

async fn update_album(State(catalog): State<GuardedCatalogStore>, body: RequestBody) -> Response {
    let album: Album = match decode_body(UPDATE_ALBUM, body) {
        Ok(album) => album,
        Err(response) => return response,
    };
    let result = catalog.update_album(album);
    mutation_response(catalog.as_ref(), UPDATE_ALBUM, result, "Unable to update album")
}

async fn delete_album(State(catalog): State<GuardedCatalogStore>, body: RequestBody) -> Response {
    let id: String = match decode_body(DELETE_ALBUM, body) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let result = catalog.delete_album(&id);
    mutation_response(catalog.as_ref(), DELETE_ALBUM, result, "Unable to delete album")
}

async fn get_all_albums(State(catalog): State<GuardedCatalogStore>) -> Response {
    Json(catalog.list_albums()).into_response()
}

// =============================================================================
// Songs
// =============================================================================

async fn add_song(State(catalog): State<GuardedCatalogStore>, body: RequestBody) -> Response {
    let song: Song = match decode_body(ADD_SONG, body) {
        Ok(song) => song,
        Err(response) => return response,
    };
    let result = catalog.add_song(song);
    mutation_response(catalog.as_ref(), ADD_SONG, result, "Cannot add new song")
}

async fn get_song(State(catalog): State<GuardedCatalogStore>, body: RequestBody) -> Response {
    let id: String = match decode_body(GET_SONG, body) {
        Ok(id) => id,
        Err(response) => return response,
    };
    value_response(GET_SONG, catalog.get_song(&id), "Song does not exist")
}

async fn update_song(State(catalog): State<GuardedCatalogStore>, body: RequestBody) -> Response {
    let song: Song = match decode_body(UPDATE_SONG, body) {
        Ok(song) => song,
        Err(response) => return response,
    };
    let result = catalog.update_song(song);
    mutation_response(catalog.as_ref(), UPDATE_SONG, result, "Unable to update song")
}

async fn delete_song(State(catalog): State<GuardedCatalogStore>, body: RequestBody) -> Response {
    let id: String = match decode_body(DELETE_SONG, body) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let result = catalog.delete_song(&id);
    mutation_response(catalog.as_ref(), DELETE_SONG, result, "Unable to delete song")
}

async fn get_all_songs(State(catalog): State<GuardedCatalogStore>) -> Response {
    Json(catalog.list_songs()).into_response()
}

// =============================================================================
// Reverse lookups
// =============================================================================

async fn get_artist_albums(
    State(catalog): State<GuardedCatalogStore>,
    body: RequestBody,
) -> Response {
    let artist_id: String = match decode_body(GET_ARTIST_ALBUMS, body) {
        Ok(id) => id,
        Err(response) => return response,
    };
    value_response(
        GET_ARTIST_ALBUMS,
        catalog.list_artist_albums(&artist_id),
        "Error retrieving artist's albums",
    )
}

async fn get_artist_songs(
    State(catalog): State<GuardedCatalogStore>,
    body: RequestBody,
) -> Response {
    let artist_id: String = match decode_body(GET_ARTIST_SONGS, body) {
        Ok(id) => id,
        Err(response) => return response,
    };
    value_response(
        GET_ARTIST_SONGS,
        catalog.list_artist_songs(&artist_id),
        "Error retrieving artist's songs",
    )
}

async fn get_album_songs(State(catalog): State<GuardedCatalogStore>, body: RequestBody) -> Response {
    let album_id: String = match decode_body(GET_ALBUM_SONGS, body) {
        Ok(id) => id,
        Err(response) => return response,
    };
    value_response(
        GET_ALBUM_SONGS,
        catalog.list_album_songs(&album_id),
        "Error retrieving album's songs",
    )
}

/// Every route answers any method, like the service it replaces.
/// `/addArtist` gets its own, larger body limit.
pub fn make_catalog_routes(max_artist_body_bytes: usize) -> Router<ServerState> {
    Router::new()
        .route(
            ADD_ARTIST,
            any(add_artist).layer(DefaultBodyLimit::max(max_artist_body_bytes)),
        )
        .route(GET_ARTIST, any(get_artist))
        .route(UPDATE_ARTIST, any(update_artist))
        .route(DELETE_ARTIST, any(delete_artist))
        .route(GET_ALL_ARTISTS, any(get_all_artists))
        .route(ADD_ALBUM, any(add_album))
        .route(GET_ALBUM, any(get_album))
        .route(UPDATE_ALBUM, any(update_album))
        .route(DELETE_ALBUM, any(delete_album))
        .route(GET_ALL_ALBUMS, any(get_all_albums))
        .route(ADD_SONG, any(add_song))
        .route(GET_SONG, any(get_song))
        .route(UPDATE_SONG, any(update_song))
        .route(DELETE_SONG, any(delete_song))
        .route(GET_ALL_SONGS, any(get_all_songs))
        .route(GET_ARTIST_ALBUMS, any(get_artist_albums))
        .route(GET_ARTIST_SONGS, any(get_artist_songs))
        .route(GET_ALBUM_SONGS, any(get_album_songs))
}
