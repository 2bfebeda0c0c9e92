//! Headless player session
//!
//! Owns everything a player shell needs once the catalog has loaded: the
//! catalog, the active genre view, sequencing state, play/pause and volume.
//! Each control returns a `PlayerCommand` describing what the shell should do
//! to its audio element; the session never touches audio itself.

use crate::sequencer::PlaybackState;
use crate::types::{Advance, AdvanceReason, PlaybackConfig, RepeatMode};
use cadence_core::{filter, genre_options, Catalog, FilteredView, GenreOption, GenreSelector, Track};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Effect the shell applies to its audio element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Load a new track, starting playback when `autoplay` is set
    Load { track: Track, autoplay: bool },

    /// Resume the loaded track
    Play,

    /// Pause the loaded track
    Pause,

    /// Seek the loaded track to zero and keep playing
    SeekToStart,

    /// Stop playback, leaving the current track loaded
    Stop,

    /// Nothing to do
    None,
}

/// Player state for one loaded catalog
#[derive(Debug)]
pub struct PlayerSession {
    catalog: Catalog,
    view: FilteredView,
    state: PlaybackState,
    playing: bool,
    volume: f32,
    rng: StdRng,
}

impl PlayerSession {
    /// Start a paused session on the "all" view
    pub fn new(catalog: Catalog, config: &PlaybackConfig) -> Self {
        Self::with_rng(catalog, config, StdRng::from_entropy())
    }

    /// Start a session with a caller-provided shuffle source
    pub fn with_rng(catalog: Catalog, config: &PlaybackConfig, rng: StdRng) -> Self {
        let view = filter(&catalog, &GenreSelector::All);
        let state = PlaybackState::for_view(&view, config);

        info!(tracks = catalog.len(), repeat = %state.repeat_mode(), "Player session started");

        Self {
            catalog,
            view,
            state,
            playing: false,
            volume: sanitize_volume(config.volume).unwrap_or(1.0),
            rng,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Genre dropdown entries, "All Genres" first
    pub fn genre_options(&self) -> Vec<GenreOption> {
        genre_options(&self.catalog)
    }

    /// View position of the current track
    pub fn current_index(&self) -> Option<usize> {
        self.state.current_index(&self.view)
    }

    /// Track the shell should be showing
    pub fn current_track(&self) -> Option<&Track> {
        self.current_index()
            .and_then(|index| self.view.track_at(&self.catalog, index))
    }

    /// Replace the view with `selector`'s tracks and start over at the first
    ///
    /// Playback continues on the new first track if it was active. An empty
    /// view stops playback.
    pub fn select_genre(&mut self, selector: GenreSelector) -> PlayerCommand {
        self.view = filter(&self.catalog, &selector);
        self.state.reset_for_view(&self.view);

        info!(genre = %selector, tracks = self.view.len(), "Genre selected");

        match self.current_track().cloned() {
            Some(track) => PlayerCommand::Load {
                track,
                autoplay: self.playing,
            },
            None if self.playing => {
                self.playing = false;
                PlayerCommand::Stop
            }
            None => PlayerCommand::None,
        }
    }

    /// Play/pause control
    pub fn toggle_play(&mut self) -> PlayerCommand {
        if self.view.is_empty() {
            return PlayerCommand::None;
        }

        self.playing = !self.playing;
        if self.playing {
            PlayerCommand::Play
        } else {
            PlayerCommand::Pause
        }
    }

    /// "Next" control; starts playback if paused
    pub fn next(&mut self) -> PlayerCommand {
        let advance =
            self.state
                .advance_to_next(&self.view, AdvanceReason::UserRequested, &mut self.rng);
        self.apply(advance)
    }

    /// "Previous" control; starts playback if paused
    ///
    /// `elapsed` is the current track's playback position.
    pub fn previous(&mut self, elapsed: Duration) -> PlayerCommand {
        let advance = self.state.advance_to_previous(&self.view, elapsed);
        self.apply(advance)
    }

    /// The audio element reported the end of the current track
    pub fn track_ended(&mut self) -> PlayerCommand {
        let advance =
            self.state
                .advance_to_next(&self.view, AdvanceReason::TrackEnded, &mut self.rng);
        self.apply(advance)
    }

    pub fn toggle_shuffle(&mut self) -> bool {
        let shuffle = self.state.toggle_shuffle();
        debug!(shuffle, "Shuffle toggled");
        shuffle
    }

    pub fn cycle_repeat(&mut self) -> RepeatMode {
        let repeat = self.state.cycle_repeat();
        debug!(repeat = %repeat, "Repeat mode changed");
        repeat
    }

    /// Set the volume, clamped to `[0.0, 1.0]`
    ///
    /// NaN is ignored. Returns the volume now in effect.
    pub fn set_volume(&mut self, volume: f32) -> f32 {
        if let Some(volume) = sanitize_volume(volume) {
            self.volume = volume;
        }
        self.volume
    }

    /// Position to seek to, clamped to the track duration
    pub fn seek(&self, position: Duration, duration: Duration) -> Duration {
        position.min(duration)
    }

    /// Position for a click at `fraction` of the progress bar
    pub fn seek_fraction(&self, fraction: f64, duration: Duration) -> Duration {
        if fraction.is_nan() {
            return Duration::ZERO;
        }
        duration.mul_f64(fraction.clamp(0.0, 1.0))
    }

    /// The audio element refused to play (autoplay policy, missing resource)
    ///
    /// Logged only: `is_playing` stays as the listener left it.
    pub fn play_rejected(&self, reason: &str) {
        warn!(
            reason,
            track = ?self.current_track().map(|t| t.title.as_str()),
            "Playback rejected by audio element"
        );
    }

    fn apply(&mut self, advance: Advance) -> PlayerCommand {
        match advance {
            Advance::Play { index, .. } => {
                self.playing = true;
                match self.view.track_at(&self.catalog, index) {
                    Some(track) => PlayerCommand::Load {
                        track: track.clone(),
                        autoplay: true,
                    },
                    None => PlayerCommand::None,
                }
            }
            Advance::Restart { .. } => {
                self.playing = true;
                PlayerCommand::SeekToStart
            }
            Advance::Halt { index, .. } => {
                debug!(index, "Reached end of view");
                self.playing = false;
                PlayerCommand::Stop
            }
            Advance::Idle => PlayerCommand::None,
        }
    }
}

fn sanitize_volume(volume: f32) -> Option<f32> {
    if volume.is_nan() {
        None
    } else {
        Some(volume.clamp(0.0, 1.0))
    }
}

/// Format a playback position as `m:ss`
///
/// Minutes are not wrapped into hours; sub-second remainders are dropped.
pub fn format_time(time: Duration) -> String {
    let secs = time.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Fraction of the track played, `0.0` when the duration is unknown
pub fn progress(position: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 0.0;
    }
    (position.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}
