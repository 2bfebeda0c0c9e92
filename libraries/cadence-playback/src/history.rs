//! Playback history tracking
//!
//! Bounded record of previously current tracks. Entries are only ever
//! appended; "previous" steps through the view, not through history.

use cadence_core::TrackId;
use std::collections::VecDeque;

/// Playback history with bounded size
///
/// Ring buffer of track ids that discards the oldest entry once full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    /// History buffer (most recent = back)
    tracks: VecDeque<TrackId>,

    /// Maximum history size
    max_size: usize,
}

impl History {
    /// Create new history with specified maximum size
    pub fn new(max_size: usize) -> Self {
        Self {
            tracks: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    /// Record a track
    ///
    /// If history is full, the oldest entry is discarded
    pub fn push(&mut self, track: TrackId) {
        if self.max_size == 0 {
            return;
        }
        if self.tracks.len() >= self.max_size {
            self.tracks.pop_front();
        }
        self.tracks.push_back(track);
    }

    /// Most recent entry
    pub fn peek(&self) -> Option<TrackId> {
        self.tracks.back().copied()
    }

    /// Entries, oldest first
    pub fn iter(&self) -> impl Iterator<Item = TrackId> + '_ {
        self.tracks.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(50)
    }
}
