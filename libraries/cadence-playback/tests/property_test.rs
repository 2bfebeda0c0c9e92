//! Property-based tests for the playback sequencer
//!
//! Uses proptest to check sequencing invariants across random views,
//! positions and event sequences.

use cadence_core::{filter, Catalog, FilteredView, GenreSelector, Track};
use cadence_playback::{Advance, AdvanceReason, PlaybackConfig, PlaybackState, RepeatMode};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

// ===== Helpers =====

#[derive(Debug, Clone, Copy)]
enum Event {
    Next,
    Ended,
    Previous(u64),
    Shuffle,
    Repeat,
}

fn arbitrary_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        Just(Event::Next),
        Just(Event::Ended),
        (0u64..10).prop_map(Event::Previous),
        Just(Event::Shuffle),
        Just(Event::Repeat),
    ]
}

fn view_of(len: usize) -> FilteredView {
    let catalog = Catalog::new(
        (0..len)
            .map(|n| Track::new(format!("Track {n}"), "Artist", format!("{n}.mp3")))
            .collect(),
    );
    filter(&catalog, &GenreSelector::All)
}

/// State positioned at `index` with shuffle off, repeat all and empty history
fn state_at(view: &FilteredView, index: usize) -> PlaybackState {
    let mut state = PlaybackState::for_view(view, &PlaybackConfig::default());
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..index {
        state.advance_to_next(view, AdvanceReason::UserRequested, &mut rng);
    }
    state
}

fn apply(
    state: &mut PlaybackState,
    view: &FilteredView,
    event: Event,
    rng: &mut StdRng,
) -> Advance {
    match event {
        Event::Next => state.advance_to_next(view, AdvanceReason::UserRequested, rng),
        Event::Ended => state.advance_to_next(view, AdvanceReason::TrackEnded, rng),
        Event::Previous(secs) => state.advance_to_previous(view, Duration::from_secs(secs)),
        Event::Shuffle => {
            state.toggle_shuffle();
            state.selection(view)
        }
        Event::Repeat => {
            state.cycle_repeat();
            state.selection(view)
        }
    }
}

// ===== Property Tests =====

proptest! {
    /// Property: with shuffle off and repeat all, next then previous returns
    /// to the starting position, wraparound included
    #[test]
    fn next_then_previous_round_trips(len in 1usize..40, seed in any::<u64>(), start in 0usize..40) {
        let view = view_of(len);
        let start = start % len;
        let mut state = state_at(&view, start);
        let mut rng = StdRng::seed_from_u64(seed);

        let forward = state.advance_to_next(&view, AdvanceReason::UserRequested, &mut rng);
        prop_assert_eq!(forward.index(), Some((start + 1) % len));

        let back = state.advance_to_previous(&view, Duration::ZERO);
        prop_assert_eq!(back.index(), Some(start));
    }

    /// Property: a naturally ended track with repeat one never moves
    #[test]
    fn repeat_one_track_end_never_moves(len in 1usize..40, start in 0usize..40, shuffle in any::<bool>()) {
        let view = view_of(len);
        let start = start % len;
        let mut state = state_at(&view, start);
        state.set_repeat(RepeatMode::One);
        if shuffle {
            state.toggle_shuffle();
        }
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..5 {
            let advance = state.advance_to_next(&view, AdvanceReason::TrackEnded, &mut rng);
            let restarted = matches!(advance, Advance::Restart { .. });
            prop_assert!(restarted);
            prop_assert_eq!(advance.index(), Some(start));
        }
        prop_assert_eq!(state.history().len(), start);
    }

    /// Property: at the last position, repeat off halts and repeat all wraps
    #[test]
    fn end_of_view_halts_or_wraps(len in 1usize..40) {
        let view = view_of(len);
        let mut rng = StdRng::seed_from_u64(11);

        let mut off = state_at(&view, len - 1);
        off.set_repeat(RepeatMode::Off);
        let advance = off.advance_to_next(&view, AdvanceReason::TrackEnded, &mut rng);
        let halted = matches!(advance, Advance::Halt { .. });
        prop_assert!(halted);
        prop_assert_eq!(advance.index(), Some(len - 1));

        let mut all = state_at(&view, len - 1);
        let advance = all.advance_to_next(&view, AdvanceReason::TrackEnded, &mut rng);
        prop_assert_eq!(advance.index(), Some(0));
    }

    /// Property: shuffle over more than one track never picks the current one
    #[test]
    fn shuffle_excludes_current(len in 2usize..40, start in 0usize..40, seed in any::<u64>()) {
        let view = view_of(len);
        let mut state = state_at(&view, start % len);
        state.toggle_shuffle();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..20 {
            let before = state.current_index(&view);
            let advance = state.advance_to_next(&view, AdvanceReason::UserRequested, &mut rng);
            prop_assert_ne!(before, advance.index());
            prop_assert!(advance.index().is_some_and(|i| i < len));
        }
    }

    /// Property: previous past the threshold restarts; within it steps back
    #[test]
    fn previous_respects_restart_threshold(len in 1usize..40, start in 0usize..40, late in 4u64..600) {
        let view = view_of(len);
        let start = start % len;
        let mut state = state_at(&view, start);

        let restart = state.advance_to_previous(&view, Duration::from_secs(late));
        let restarted = matches!(restart, Advance::Restart { .. });
        prop_assert!(restarted);
        prop_assert_eq!(restart.index(), Some(start));

        let step = state.advance_to_previous(&view, Duration::from_secs(1));
        prop_assert_eq!(step.index(), Some((start + len - 1) % len));
    }

    /// Property: history never exceeds its bound and the position is always
    /// valid, whatever the event sequence
    #[test]
    fn history_bounded_and_index_valid(
        len in 1usize..12,
        events in prop::collection::vec(arbitrary_event(), 0..300),
        seed in any::<u64>(),
    ) {
        let view = view_of(len);
        let mut state = PlaybackState::for_view(&view, &PlaybackConfig::default());
        let mut rng = StdRng::seed_from_u64(seed);

        for event in events {
            let advance = apply(&mut state, &view, event, &mut rng);
            prop_assert!(advance.index().is_some_and(|i| i < len));
            prop_assert!(state.history().len() <= 50);
            prop_assert_eq!(state.current_index(&view), advance.index());
        }
    }

    /// Property: every transition on an empty view is idle
    #[test]
    fn empty_view_is_always_idle(events in prop::collection::vec(arbitrary_event(), 1..50)) {
        let view = view_of(0);
        let mut state = PlaybackState::for_view(&view, &PlaybackConfig::default());
        let mut rng = StdRng::seed_from_u64(5);

        for event in events {
            prop_assert_eq!(apply(&mut state, &view, event, &mut rng), Advance::Idle);
        }
        prop_assert!(state.history().is_empty());
    }

    /// Property: a current track outside the view is clamped to position 0
    /// before the transition runs
    #[test]
    fn stale_position_is_clamped(len in 1usize..20, wide in 20usize..40) {
        let wide_view = view_of(wide);
        let mut state = state_at(&wide_view, wide - 1);

        let narrow = view_of(len);
        prop_assert_eq!(state.current_index(&narrow), Some(0));

        let step = state.advance_to_previous(&narrow, Duration::ZERO);
        prop_assert_eq!(step.index(), Some(len - 1));
    }
}
