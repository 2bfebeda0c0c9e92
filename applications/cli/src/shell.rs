//! Terminal player shell
//!
//! Stands in for the audio element and the UI: it turns commands into
//! session calls and renders the resulting `PlayerCommand`s as text.

use crate::command::{Command, HELP};
use crate::error::Result;
use cadence_catalog::store::{get_flag, set_flag, SETTING_GRADIENT_BACKGROUND};
use cadence_catalog::{CatalogError, CatalogLoader, SettingsStore};
use cadence_playback::{format_time, progress, PlaybackConfig, PlayerCommand, PlayerSession};
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Where the shell is in its lifecycle
///
/// Playback controls are only accepted once the catalog has loaded.
#[derive(Debug)]
pub enum ShellState {
    Loading,
    Ready(Box<PlayerSession>),
    Unavailable(String),
}

/// Result of handling one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to print
    Output(String),
    /// The listener asked to leave
    Quit,
}

pub struct Shell {
    state: ShellState,
    store: Arc<dyn SettingsStore>,
    playback: PlaybackConfig,
    gradient: bool,
}

impl Shell {
    pub fn new(store: Arc<dyn SettingsStore>, playback: PlaybackConfig) -> Self {
        Self {
            state: ShellState::Loading,
            store,
            playback,
            gradient: false,
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn gradient_background(&self) -> bool {
        self.gradient
    }

    /// Restore the display preference and resolve the catalog
    ///
    /// Never fails: an unavailable catalog leaves the shell in
    /// `ShellState::Unavailable` with the message to show.
    pub async fn load(&mut self, loader: &CatalogLoader) -> &ShellState {
        self.state = ShellState::Loading;

        match get_flag(self.store.as_ref(), SETTING_GRADIENT_BACKGROUND).await {
            Ok(flag) => self.gradient = flag.unwrap_or(false),
            Err(e) => warn!(error = %e, "Could not read display preference"),
        }

        self.state = match loader.load().await {
            Ok(loaded) => {
                info!(tier = %loaded.tier, tracks = loaded.catalog.len(), "Shell ready");
                ShellState::Ready(Box::new(PlayerSession::new(loaded.catalog, &self.playback)))
            }
            Err(CatalogError::Unavailable { attempts }) => {
                for attempt in &attempts {
                    error!(tier = %attempt.tier, reason = %attempt.message, "Catalog tier failed");
                }
                ShellState::Unavailable("Error loading tracks".to_string())
            }
        };

        &self.state
    }

    /// Start with an already loaded session
    pub fn with_session(store: Arc<dyn SettingsStore>, session: PlayerSession) -> Self {
        Self {
            state: ShellState::Ready(Box::new(session)),
            store,
            playback: PlaybackConfig::default(),
            gradient: false,
        }
    }

    pub async fn handle(&mut self, command: Command) -> Result<Outcome> {
        let text = match command {
            Command::Quit => return Ok(Outcome::Quit),
            Command::Help => HELP.to_string(),
            Command::Status => self.status(),
            Command::Gradient => {
                let next = !self.gradient;
                set_flag(self.store.as_ref(), SETTING_GRADIENT_BACKGROUND, next).await?;
                self.gradient = next;
                format!("Gradient background {}", if next { "on" } else { "off" })
            }
            control => match &mut self.state {
                ShellState::Ready(session) => Self::control(session, control),
                ShellState::Loading => "Still loading tracks".to_string(),
                ShellState::Unavailable(message) => message.clone(),
            },
        };

        Ok(Outcome::Output(text))
    }

    fn control(session: &mut PlayerSession, command: Command) -> String {
        match command {
            Command::TogglePlay => {
                let command = session.toggle_play();
                render(session, command)
            }
            Command::Next => {
                let command = session.next();
                render(session, command)
            }
            Command::Previous(elapsed) => {
                let command = session.previous(elapsed);
                render(session, command)
            }
            Command::TrackEnded => {
                let command = session.track_ended();
                render(session, command)
            }
            Command::Shuffle => format!(
                "Shuffle {}",
                if session.toggle_shuffle() { "on" } else { "off" }
            ),
            Command::Repeat => format!("Repeat {}", session.cycle_repeat()),
            Command::Genre(selector) => {
                let command = session.select_genre(selector);
                if session.view().is_empty() {
                    "No tracks in this genre".to_string()
                } else {
                    render(session, command)
                }
            }
            Command::Genres => session
                .genre_options()
                .into_iter()
                .map(|option| format!("{} ({})", option.label, option.selector))
                .collect::<Vec<_>>()
                .join("\n"),
            Command::List => list(session),
            Command::Volume(volume) => {
                format!("Volume {:.0}%", session.set_volume(volume) * 100.0)
            }
            Command::Seek { position, duration } => {
                let target = session.seek(position, duration);
                format!(
                    "{} / {} ({:.0}%)",
                    format_time(target),
                    format_time(duration),
                    progress(target, duration) * 100.0
                )
            }
            Command::Reject(reason) => {
                session.play_rejected(&reason);
                format!("Playback failed: {reason}")
            }
            Command::Quit | Command::Help | Command::Status | Command::Gradient => String::new(),
        }
    }

    fn status(&self) -> String {
        match &self.state {
            ShellState::Loading => "Loading tracks...".to_string(),
            ShellState::Unavailable(message) => message.clone(),
            ShellState::Ready(session) => {
                let state = session.state();
                let track = session
                    .current_track()
                    .map(|t| format!("{} - {}", t.title, t.artist))
                    .unwrap_or_else(|| "No track".to_string());
                format!(
                    "{} [{}] {} | genre {} | shuffle {} | repeat {} | volume {:.0}%",
                    if session.is_playing() { "Playing" } else { "Paused" },
                    position_label(session),
                    track,
                    session.view().selector(),
                    if state.is_shuffle() { "on" } else { "off" },
                    state.repeat_mode(),
                    session.volume() * 100.0
                )
            }
        }
    }
}

fn position_label(session: &PlayerSession) -> String {
    match session.current_index() {
        Some(index) => format!("{}/{}", index + 1, session.view().len()),
        None => "-/0".to_string(),
    }
}

fn render(session: &PlayerSession, command: PlayerCommand) -> String {
    match command {
        PlayerCommand::Load { track, autoplay } => {
            let mut line = format!(
                "{} {} - {} [{}]",
                if autoplay { "Playing" } else { "Loaded" },
                placeholder(&track.title, "Unknown title"),
                placeholder(&track.artist, "Unknown artist"),
                position_label(session)
            );
            if !track.album_art_url.is_empty() {
                let _ = write!(line, " art: {}", track.album_art_url);
            }
            line
        }
        PlayerCommand::Play => format!("Playing [{}]", position_label(session)),
        PlayerCommand::Pause => format!("Paused [{}]", position_label(session)),
        PlayerCommand::SeekToStart => format!("Restarted [{}]", position_label(session)),
        PlayerCommand::Stop => "Stopped at end of playlist".to_string(),
        PlayerCommand::None => "Nothing to play".to_string(),
    }
}

fn list(session: &PlayerSession) -> String {
    let current = session.current_index();
    let lines: Vec<String> = session
        .view()
        .tracks(session.catalog())
        .enumerate()
        .map(|(index, track)| {
            format!(
                "{} {:>3}. {} - {}",
                if Some(index) == current { ">" } else { " " },
                index + 1,
                placeholder(&track.title, "Unknown title"),
                placeholder(&track.artist, "Unknown artist"),
            )
        })
        .collect();

    if lines.is_empty() {
        "No tracks".to_string()
    } else {
        lines.join("\n")
    }
}

fn placeholder<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
