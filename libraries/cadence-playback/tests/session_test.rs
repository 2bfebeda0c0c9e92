//! Player session walkthroughs over a parsed catalog

use cadence_core::{Catalog, GenreSelector};
use cadence_playback::{PlaybackConfig, PlayerCommand, PlayerSession, RepeatMode};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

const SONGS: &str = r#"[
    {"title":"Drift","artist":"Lumen","url":"drift.mp3","albumArtUrl":"drift.jpg","genre":"ambient"},
    {"title":"Pulse","artist":"Volt","url":"pulse.mp3","albumArtUrl":"pulse.jpg","genre":"techno"},
    {"title":"Haze","artist":"Lumen","url":"haze.mp3","albumArtUrl":"haze.jpg","genre":"ambient"},
    {"title":"Static","artist":"Volt","url":"static.mp3","albumArtUrl":"static.jpg","genre":"techno"}
]"#;

fn session() -> PlayerSession {
    let catalog = Catalog::from_json(SONGS).unwrap();
    PlayerSession::with_rng(catalog, &PlaybackConfig::default(), StdRng::seed_from_u64(2024))
}

fn title(command: PlayerCommand) -> String {
    match command {
        PlayerCommand::Load { track, .. } => track.title,
        other => panic!("expected Load, got {other:?}"),
    }
}

#[test]
fn listening_through_a_genre_wraps_around() {
    let mut session = session();
    session.select_genre(GenreSelector::parse("ambient"));
    session.toggle_play();

    assert_eq!(title(session.track_ended()), "Haze");
    assert_eq!(title(session.track_ended()), "Drift");
    assert_eq!(title(session.previous(Duration::from_secs(2))), "Haze");
}

#[test]
fn repeat_off_stops_at_the_end_and_next_resumes() {
    let mut session = session();
    session.cycle_repeat();
    session.cycle_repeat();
    assert_eq!(session.state().repeat_mode(), RepeatMode::Off);

    session.toggle_play();
    for expected in ["Pulse", "Haze", "Static"] {
        assert_eq!(title(session.track_ended()), expected);
    }
    assert_eq!(session.track_ended(), PlayerCommand::Stop);
    assert!(!session.is_playing());

    // A user-requested next wraps regardless of repeat mode
    assert_eq!(title(session.next()), "Drift");
    assert!(session.is_playing());
}

#[test]
fn shuffle_stays_within_the_selected_genre() {
    let mut session = session();
    session.select_genre(GenreSelector::parse("techno"));
    session.toggle_shuffle();

    for _ in 0..20 {
        let before = session.current_track().map(|t| t.title.clone());
        let after = title(session.next());
        assert!(after == "Pulse" || after == "Static");
        assert_ne!(before.as_deref(), Some(after.as_str()));
    }
}

#[test]
fn genre_options_lead_with_all_genres() {
    let session = session();
    let labels: Vec<String> = session
        .genre_options()
        .into_iter()
        .map(|option| option.label)
        .collect();
    assert_eq!(labels, vec!["All Genres", "Ambient", "Techno"]);
}

#[test]
fn switching_back_to_all_restores_full_view() {
    let mut session = session();
    session.select_genre(GenreSelector::parse("techno"));
    assert_eq!(session.view().len(), 2);

    let command = session.select_genre(GenreSelector::All);
    assert_eq!(session.view().len(), 4);
    assert_eq!(title(command), "Drift");
}
