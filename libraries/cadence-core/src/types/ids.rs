/// ID types for Cadence entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// Track identifier
///
/// Assigned once when a catalog is loaded and stable for the lifetime of that
/// catalog. Filtered views and playback state refer to tracks by id so that a
/// genre change never leaves a stale position pointing at the wrong track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(u32);

impl TrackId {
    /// Create a track ID from its catalog position
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub fn get(self) -> u32 {
        self.0
    }

    /// Position of the track inside the catalog that issued this id
    pub(crate) fn catalog_index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "track-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_prefixed() {
        assert_eq!(TrackId::new(7).to_string(), "track-7");
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&TrackId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
