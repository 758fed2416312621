//! Catalog entity models.
//!
//! Every field is a plain string, ids included, and missing fields decode as
//! empty strings. Foreign keys are not validated against the parent tables:
//! a song may point at an album that was never added.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Entity kinds and relations
// =============================================================================

/// The three kinds of records held by the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Artist,
    Album,
    Song,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Artist => "artist",
            EntityKind::Album => "album",
            EntityKind::Song => "song",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parent → children relation maintained by a reverse index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    ArtistAlbums,
    ArtistSongs,
    AlbumSongs,
}

impl Relation {
    pub fn parent_kind(&self) -> EntityKind {
        match self {
            Relation::ArtistAlbums | Relation::ArtistSongs => EntityKind::Artist,
            Relation::AlbumSongs => EntityKind::Album,
        }
    }

    pub fn child_kind(&self) -> EntityKind {
        match self {
            Relation::ArtistAlbums => EntityKind::Album,
            Relation::ArtistSongs | Relation::AlbumSongs => EntityKind::Song,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}s", self.parent_kind(), self.child_kind())
    }
}

/// A record that can live in an entity table.
///
/// `RELATIONS` lists the reverse indices the record is a child in, and
/// `parent_id` yields the foreign key feeding each of them.
pub trait CatalogEntity: Clone + Send + Sync + 'static {
    const KIND: EntityKind;
    const RELATIONS: &'static [Relation];

    fn id(&self) -> &str;

    /// Returns the parent id for `relation`, or `None` when the entity is not
    /// a child in that relation.
    fn parent_id(&self, relation: Relation) -> Option<&str>;
}

// =============================================================================
// Records
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub birthdate: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "AlbumPayload")]
pub struct Album {
    pub id: String,
    pub name: String,
    pub price: String,
    pub artist_id: String,
}

/// Incoming album JSON. Older clients send the artist reference under
/// `albumId`; when both keys are present `artistId` wins.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct AlbumPayload {
    id: String,
    name: String,
    price: String,
    artist_id: Option<String>,
    album_id: Option<String>,
}

impl From<AlbumPayload> for Album {
    fn from(payload: AlbumPayload) -> Self {
        Album {
            id: payload.id,
            name: payload.name,
            price: payload.price,
            artist_id: payload
                .artist_id
                .or(payload.album_id)
                .unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Song {
    pub id: String,
    pub name: String,
    pub genre: String,
    #[serde(rename = "time", alias = "duration")]
    pub duration: String,
    pub price: String,
    pub album_id: String,
    pub artist_id: String,
}

impl CatalogEntity for Artist {
    const KIND: EntityKind = EntityKind::Artist;
    const RELATIONS: &'static [Relation] = &[];

    fn id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self, _relation: Relation) -> Option<&str> {
        None
    }
}

impl CatalogEntity for Album {
    const KIND: EntityKind = EntityKind::Album;
    const RELATIONS: &'static [Relation] = &[Relation::ArtistAlbums];

    fn id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self, relation: Relation) -> Option<&str> {
        match relation {
            Relation::ArtistAlbums => Some(&self.artist_id),
            _ => None,
        }
    }
}

impl CatalogEntity for Song {
    const KIND: EntityKind = EntityKind::Song;
    const RELATIONS: &'static [Relation] = &[Relation::AlbumSongs, Relation::ArtistSongs];

    fn id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self, relation: Relation) -> Option<&str> {
        match relation {
            Relation::AlbumSongs => Some(&self.album_id),
            Relation::ArtistSongs => Some(&self.artist_id),
            Relation::ArtistAlbums => None,
        }
    }
}
