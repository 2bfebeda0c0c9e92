/// Catalog: the full ordered track list for a session
use super::{Track, TrackId};
use crate::error::Result;

/// Ordered, immutable track list loaded once per session
///
/// Every track receives a `TrackId` equal to its position when the catalog is
/// built. A catalog is replaced wholesale on reload and never edited in place,
/// so ids stay valid for as long as the catalog they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Build a catalog, assigning ids by position
    pub fn new(tracks: Vec<Track>) -> Self {
        let tracks = tracks
            .into_iter()
            .enumerate()
            .map(|(position, mut track)| {
                track.id = TrackId::new(position as u32);
                track
            })
            .collect();

        Self { tracks }
    }

    /// Create an empty catalog
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the catalog wire format (a JSON array of track objects)
    ///
    /// # Errors
    /// Returns `CoreError::Parse` if the text is not a JSON array of objects
    pub fn from_json(raw: &str) -> Result<Self> {
        let tracks: Vec<Track> = serde_json::from_str(raw)?;
        Ok(Self::new(tracks))
    }

    /// Serialize back to the wire format
    ///
    /// # Errors
    /// Returns `CoreError::Parse` if serialization fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.tracks)?)
    }

    /// All tracks in catalog order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Look up a track by id
    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.tracks.get(id.catalog_index())
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the catalog has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Iterate over tracks in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}
