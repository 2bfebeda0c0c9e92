/// Line-oriented shell commands
use crate::error::{CliError, Result};
use cadence_core::GenreSelector;
use std::time::Duration;

/// One parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Play/pause
    TogglePlay,
    Next,
    /// Previous, with the current track's elapsed time
    Previous(Duration),
    /// Simulate the audio element finishing the current track
    TrackEnded,
    Shuffle,
    Repeat,
    Genre(GenreSelector),
    Genres,
    List,
    Volume(f32),
    /// Seek to a position within a track of the given duration
    Seek { position: Duration, duration: Duration },
    /// Simulate the audio element refusing to play
    Reject(String),
    Gradient,
    Status,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  play | pause          toggle playback
  next                  next track
  prev [secs]           previous track (restarts past 3s of playback)
  end                   current track finished
  shuffle               toggle shuffle
  repeat                cycle repeat (all -> one -> off)
  genre <name|all>      filter by genre
  genres                list genres
  list                  list tracks in the current view
  volume <0.0-1.0>      set volume
  seek <secs> <total>   seek within a track of <total> seconds
  reject <reason>       report a refused play() call
  gradient              toggle gradient background
  status                show player state
  quit                  exit";

impl Command {
    /// Parse an input line; blank lines yield `None`
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let rest: Vec<&str> = words.collect();

        let command = match verb.to_ascii_lowercase().as_str() {
            "play" | "pause" | "toggle" => Self::TogglePlay,
            "next" | "n" => Self::Next,
            "prev" | "previous" | "p" => Self::Previous(match rest.first() {
                Some(secs) => seconds(secs)?,
                None => Duration::ZERO,
            }),
            "end" | "ended" => Self::TrackEnded,
            "shuffle" => Self::Shuffle,
            "repeat" => Self::Repeat,
            "genre" => {
                if rest.is_empty() {
                    return Err(CliError::Command("genre needs a name or 'all'".to_string()));
                }
                Self::Genre(GenreSelector::parse(&rest.join(" ")))
            }
            "genres" => Self::Genres,
            "list" | "ls" => Self::List,
            "volume" | "vol" => {
                let value = rest
                    .first()
                    .ok_or_else(|| CliError::Command("volume needs a value".to_string()))?;
                let volume = value
                    .parse::<f32>()
                    .map_err(|_| CliError::Command(format!("not a volume: {value}")))?;
                Self::Volume(volume)
            }
            "seek" => match rest.as_slice() {
                [position, duration] => Self::Seek {
                    position: seconds(position)?,
                    duration: seconds(duration)?,
                },
                _ => {
                    return Err(CliError::Command(
                        "usage: seek <secs> <total secs>".to_string(),
                    ))
                }
            },
            "reject" => Self::Reject(if rest.is_empty() {
                "NotAllowedError".to_string()
            } else {
                rest.join(" ")
            }),
            "gradient" => Self::Gradient,
            "status" => Self::Status,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(CliError::Command(format!("unknown command '{other}'"))),
        };

        Ok(Some(command))
    }
}

fn seconds(value: &str) -> Result<Duration> {
    let secs = value
        .parse::<f64>()
        .map_err(|_| CliError::Command(format!("not a number of seconds: {value}")))?;
    Duration::try_from_secs_f64(secs)
        .map_err(|_| CliError::Command(format!("seconds out of range: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn blank_line_is_nothing() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn parses_transport_commands() {
        assert_eq!(parse("play"), Command::TogglePlay);
        assert_eq!(parse("NEXT"), Command::Next);
        assert_eq!(parse("end"), Command::TrackEnded);
        assert_eq!(parse("prev"), Command::Previous(Duration::ZERO));
        assert_eq!(parse("prev 4.5"), Command::Previous(Duration::from_millis(4500)));
    }

    #[test]
    fn genre_keeps_case_and_spaces() {
        assert_eq!(
            parse("genre Lo Fi"),
            Command::Genre(GenreSelector::Genre("Lo Fi".to_string()))
        );
        assert_eq!(parse("genre all"), Command::Genre(GenreSelector::All));
    }

    #[test]
    fn seek_needs_position_and_duration() {
        assert_eq!(
            parse("seek 30 180"),
            Command::Seek {
                position: Duration::from_secs(30),
                duration: Duration::from_secs(180),
            }
        );
        assert!(Command::parse("seek 30").is_err());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(Command::parse("dance"), Err(CliError::Command(_))));
        assert!(Command::parse("volume loud").is_err());
        assert!(Command::parse("prev -3").is_err());
        assert!(Command::parse("genre").is_err());
    }
}
