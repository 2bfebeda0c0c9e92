//! Cadence - Playback Sequencing
//!
//! Decides what plays next. This crate provides:
//! - Next/previous/track-ended transitions over a genre view
//! - Shuffle (uniform draw that never repeats the current track)
//! - Repeat modes (All, One, Off)
//! - Bounded playback history (default: 50 tracks)
//! - `PlayerSession`, the headless facade a player shell drives
//!
//! # Architecture
//!
//! `cadence-playback` does no I/O and produces no audio. Transitions return an
//! `Advance`; the session turns that into a `PlayerCommand` for the shell's
//! audio element. Randomness is injected, so every transition is
//! reproducible under a seeded RNG.
//!
//! # Example: Sequencing
//!
//! ```rust
//! use cadence_core::{filter, Catalog, GenreSelector, Track};
//! use cadence_playback::{AdvanceReason, PlaybackConfig, PlaybackState};
//! use std::time::Duration;
//!
//! let catalog = Catalog::new(vec![
//!     Track::new("Drift", "Lumen", "drift.mp3"),
//!     Track::new("Pulse", "Volt", "pulse.mp3"),
//!     Track::new("Haze", "Lumen", "haze.mp3"),
//! ]);
//! let view = filter(&catalog, &GenreSelector::All);
//! let mut state = PlaybackState::for_view(&view, &PlaybackConfig::default());
//! let mut rng = rand::thread_rng();
//!
//! let next = state.advance_to_next(&view, AdvanceReason::UserRequested, &mut rng);
//! assert_eq!(next.index(), Some(1));
//!
//! let back = state.advance_to_previous(&view, Duration::from_secs(1));
//! assert_eq!(back.index(), Some(0));
//! ```
//!
//! # Example: Player Session
//!
//! ```rust
//! use cadence_core::{Catalog, GenreSelector, Track};
//! use cadence_playback::{format_time, PlaybackConfig, PlayerCommand, PlayerSession};
//! use std::time::Duration;
//!
//! let catalog = Catalog::new(vec![
//!     Track::new("Drift", "Lumen", "drift.mp3").with_genre("ambient"),
//!     Track::new("Pulse", "Volt", "pulse.mp3").with_genre("techno"),
//! ]);
//! let mut session = PlayerSession::new(catalog, &PlaybackConfig::default());
//!
//! assert_eq!(session.toggle_play(), PlayerCommand::Play);
//! match session.select_genre(GenreSelector::parse("techno")) {
//!     PlayerCommand::Load { track, autoplay } => {
//!         assert_eq!(track.title, "Pulse");
//!         assert!(autoplay);
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//!
//! assert_eq!(format_time(Duration::from_secs(75)), "1:15");
//! ```

mod error;
mod history;
mod sequencer;
mod session;
mod shuffle;
pub mod types;

// Public exports
pub use error::{PlaybackError, Result};
pub use history::History;
pub use sequencer::PlaybackState;
pub use session::{format_time, progress, PlayerCommand, PlayerSession};
pub use types::{Advance, AdvanceReason, PlaybackConfig, RepeatMode};
