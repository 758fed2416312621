//! Shared constants for end-to-end tests
//!
//! When the seeded catalog changes, update only this file and `fixtures.rs`.
#![allow(dead_code)]

// ============================================================================
// Test Catalog IDs
// ============================================================================

/// Artist ID for "The Test Band"
pub const ARTIST_1_ID: &str = "artist-1";

/// Artist ID for "Jazz Ensemble"
pub const ARTIST_2_ID: &str = "artist-2";

/// Album ID for "First Album" by The Test Band
pub const ALBUM_1_ID: &str = "album-1";

/// Album ID for "Jazz Collection" by Jazz Ensemble
pub const ALBUM_2_ID: &str = "album-2";

/// Song ID for "Opening Track" on First Album
pub const SONG_1_ID: &str = "song-1";

/// Song ID for "Middle Track" on First Album
pub const SONG_2_ID: &str = "song-2";

/// Song ID for "Closing Track" on First Album
pub const SONG_3_ID: &str = "song-3";

/// Song ID for "Smooth Jazz" on Jazz Collection
pub const SONG_4_ID: &str = "song-4";

// ============================================================================
// Test Catalog Metadata
// ============================================================================

pub const ARTIST_1_NAME: &str = "The Test Band";

pub const ARTIST_2_NAME: &str = "Jazz Ensemble";

pub const ALBUM_1_NAME: &str = "First Album";

pub const ALBUM_2_NAME: &str = "Jazz Collection";

pub const SONG_1_NAME: &str = "Opening Track";

pub const SONG_4_NAME: &str = "Smooth Jazz";

/// Duration of every seeded song, as sent on the wire
pub const SONG_DURATION: &str = "3:45";

// ============================================================================
// Error Messages
// ============================================================================

pub const INVALID_JSON: &str = "Invalid JSON";

pub const UNREADABLE_BODY: &str = "Cannot read body from request";

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;

/// Body limit used by test servers, large enough for every fixture
pub const TEST_MAX_BODY_BYTES: usize = 4096;
