/// Track domain type
use super::TrackId;
use serde::{Deserialize, Serialize};

/// A playable track as described by the catalog source
///
/// Wire shape is `{ title, artist, url, albumArtUrl, genre? }`. Unknown fields
/// are ignored and missing string fields load as empty strings, leaving it to
/// the player shell to render placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Track {
    /// Stable identifier assigned by the owning `Catalog`
    #[serde(skip)]
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Audio resource locator
    pub url: String,

    /// Album art locator
    pub album_art_url: String,

    /// Genre tag used by the playlist filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl Track {
    /// Create a new track with no genre and no album art
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: TrackId::default(),
            title: title.into(),
            artist: artist.into(),
            url: url.into(),
            album_art_url: String::new(),
            genre: None,
        }
    }

    /// Set the genre
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Set the album art locator
    pub fn with_album_art(mut self, url: impl Into<String>) -> Self {
        self.album_art_url = url.into();
        self
    }

    /// Genre, treating an empty tag the same as a missing one
    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref().filter(|g| !g.is_empty())
    }
}
