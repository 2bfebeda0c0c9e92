//! Core types for playback sequencing

use crate::error::{PlaybackError, Result};
use cadence_core::TrackId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Repeat mode
///
/// A session starts in `All`; the repeat control cycles `All -> One -> Off`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Wrap to the first track after the last one
    #[default]
    All,

    /// Loop the current track when it ends on its own
    One,

    /// Stop at the end of the view
    Off,
}

impl RepeatMode {
    /// Next mode in the repeat control's cycle
    pub fn cycle(self) -> Self {
        match self {
            Self::All => Self::One,
            Self::One => Self::Off,
            Self::Off => Self::All,
        }
    }
}

impl fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::One => write!(f, "one"),
            Self::Off => write!(f, "off"),
        }
    }
}

/// Why the sequencer is being asked for the next track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceReason {
    /// The listener pressed "next"
    UserRequested,

    /// The audio element finished the current track
    TrackEnded,
}

/// Outcome of a sequencer transition
///
/// `index` is the view position the shell should render; `track` is the id
/// behind that position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Load and play the track at `index`
    Play { index: usize, track: TrackId },

    /// Keep the current track and seek back to zero
    Restart { index: usize, track: TrackId },

    /// End of the view with repeat off; stay on `index` and stop
    Halt { index: usize, track: TrackId },

    /// Nothing to play
    Idle,
}

impl Advance {
    /// View position after the transition, `None` for an empty view
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Play { index, .. } | Self::Restart { index, .. } | Self::Halt { index, .. } => {
                Some(*index)
            }
            Self::Idle => None,
        }
    }

    /// Track id after the transition, `None` for an empty view
    pub fn track(&self) -> Option<TrackId> {
        match self {
            Self::Play { track, .. } | Self::Restart { track, .. } | Self::Halt { track, .. } => {
                Some(*track)
            }
            Self::Idle => None,
        }
    }
}

/// Configuration for playback sequencing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Maximum history size (default: 50)
    pub history_size: usize,

    /// "Previous" restarts the track instead of stepping back once more
    /// than this much has been played (default: 3s)
    pub restart_threshold: Duration,

    /// Initial repeat mode (default: All)
    pub repeat: RepeatMode,

    /// Initial shuffle state (default: off)
    pub shuffle: bool,

    /// Initial volume, 0.0 to 1.0 (default: 1.0)
    pub volume: f32,
}

impl PlaybackConfig {
    /// Check value ranges
    ///
    /// # Errors
    /// Returns `PlaybackError::InvalidConfig` for a zero history size or a
    /// volume outside `[0.0, 1.0]`.
    pub fn validate(&self) -> Result<()> {
        if self.history_size == 0 {
            return Err(PlaybackError::InvalidConfig(
                "history_size must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(PlaybackError::InvalidConfig(format!(
                "volume must be between 0.0 and 1.0, got {}",
                self.volume
            )));
        }
        Ok(())
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            history_size: 50,
            restart_threshold: Duration::from_secs(3),
            repeat: RepeatMode::All,
            shuffle: false,
            volume: 1.0,
        }
    }
}
