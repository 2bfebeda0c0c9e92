//! Playback sequencer
//!
//! Decides which track of a `FilteredView` plays after a next, previous or
//! track-ended event. Holds track ids, never positions: the position is
//! derived from the view whenever a transition runs or the shell renders.

use crate::history::History;
use crate::shuffle;
use crate::types::{Advance, AdvanceReason, PlaybackConfig, RepeatMode};
use cadence_core::{FilteredView, TrackId};
use rand::Rng;
use std::time::Duration;
use tracing::trace;

/// Sequencing state for one view
///
/// Every transition takes the view it runs against. A current track that is
/// not part of that view (or no current track at all) is clamped to the
/// first position before the transition runs. On an empty view every
/// transition is a no-op returning `Advance::Idle`.
#[derive(Debug, Clone)]
pub struct PlaybackState {
    current: Option<TrackId>,
    shuffle: bool,
    repeat: RepeatMode,
    history: History,
    restart_threshold: Duration,
}

impl PlaybackState {
    /// Create state with no current track
    pub fn new(config: &PlaybackConfig) -> Self {
        Self {
            current: None,
            shuffle: config.shuffle,
            repeat: config.repeat,
            history: History::new(config.history_size),
            restart_threshold: config.restart_threshold,
        }
    }

    /// Create state positioned on the first track of `view`
    pub fn for_view(view: &FilteredView, config: &PlaybackConfig) -> Self {
        let mut state = Self::new(config);
        state.reset_for_view(view);
        state
    }

    /// Start over on a replaced view: first position, empty history
    ///
    /// Shuffle and repeat settings are kept.
    pub fn reset_for_view(&mut self, view: &FilteredView) {
        self.current = view.id_at(0);
        self.history.clear();
        trace!(tracks = view.len(), "Playback state reset");
    }

    /// Id of the current track, if any
    pub fn current_track(&self) -> Option<TrackId> {
        self.current
    }

    /// Render-boundary position of the current track in `view`
    ///
    /// Returns `Some(0)` when the current track is not in the view and `None`
    /// only when the view is empty.
    pub fn current_index(&self, view: &FilteredView) -> Option<usize> {
        if view.is_empty() {
            return None;
        }
        Some(self.current.and_then(|id| view.position_of(id)).unwrap_or(0))
    }

    /// The current track as an advance result, without moving
    pub fn selection(&mut self, view: &FilteredView) -> Advance {
        match self.clamp(view) {
            Some((index, track)) => Advance::Play { index, track },
            None => Advance::Idle,
        }
    }

    pub fn is_shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Flip shuffle; position and history are untouched
    pub fn toggle_shuffle(&mut self) -> bool {
        self.shuffle = !self.shuffle;
        self.shuffle
    }

    /// Move to the next repeat mode (`All -> One -> Off -> All`)
    pub fn cycle_repeat(&mut self) -> RepeatMode {
        self.repeat = self.repeat.cycle();
        self.repeat
    }

    pub fn set_repeat(&mut self, repeat: RepeatMode) {
        self.repeat = repeat;
    }

    /// Pick the track after the current one
    ///
    /// - Repeat one with a naturally ended track restarts it and records
    ///   nothing. A user-requested next still advances.
    /// - Otherwise the current track is recorded in history, then shuffle
    ///   draws any other position, or the position steps forward and wraps.
    /// - With repeat off, a track that ends on the last position halts there.
    pub fn advance_to_next<R: Rng + ?Sized>(
        &mut self,
        view: &FilteredView,
        reason: AdvanceReason,
        rng: &mut R,
    ) -> Advance {
        let Some((index, track)) = self.clamp(view) else {
            return Advance::Idle;
        };

        if self.repeat == RepeatMode::One && reason == AdvanceReason::TrackEnded {
            trace!(index, "Repeat one: restarting track");
            return Advance::Restart { index, track };
        }

        self.history.push(track);

        let next = if self.shuffle {
            shuffle::pick_other(view.len(), index, rng)
        } else if reason == AdvanceReason::TrackEnded
            && self.repeat == RepeatMode::Off
            && index + 1 == view.len()
        {
            trace!(index, "End of view with repeat off");
            return Advance::Halt { index, track };
        } else {
            (index + 1) % view.len()
        };

        self.move_to(view, next)
    }

    /// Pick the track before the current one
    ///
    /// Past the restart threshold the current track restarts. Otherwise the
    /// position steps back and wraps, in shuffle mode too. History is not
    /// consulted.
    pub fn advance_to_previous(&mut self, view: &FilteredView, elapsed: Duration) -> Advance {
        let Some((index, track)) = self.clamp(view) else {
            return Advance::Idle;
        };

        if elapsed > self.restart_threshold {
            trace!(index, elapsed = ?elapsed, "Restarting track");
            return Advance::Restart { index, track };
        }

        let len = view.len();
        self.move_to(view, (index + len - 1) % len)
    }

    fn move_to(&mut self, view: &FilteredView, index: usize) -> Advance {
        match view.id_at(index) {
            Some(track) => {
                self.current = Some(track);
                trace!(index, track = %track, "Advanced");
                Advance::Play { index, track }
            }
            None => Advance::Idle,
        }
    }

    /// Resolve the current position, clamping to the first track when the
    /// current id is missing from `view`
    fn clamp(&mut self, view: &FilteredView) -> Option<(usize, TrackId)> {
        let index = self.current_index(view)?;
        let track = view.id_at(index)?;
        self.current = Some(track);
        Some((index, track))
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(&PlaybackConfig::default())
    }
}
