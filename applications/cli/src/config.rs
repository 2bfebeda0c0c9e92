/// Player shell configuration
use crate::error::{CliError, Result};
use cadence_playback::{PlaybackConfig, RepeatMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file read when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "cadence.toml";

/// Prefix for environment overrides, e.g. `CADENCE_CATALOG__REMOTE_URL`
pub const ENV_PREFIX: &str = "CADENCE";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CadenceConfig {
    #[serde(default = "default_catalog")]
    pub catalog: CatalogSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_playback")]
    pub playback: PlaybackSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CatalogSettings {
    #[serde(default = "default_remote_url")]
    pub remote_url: String,

    #[serde(default = "default_local_path")]
    pub local_path: PathBuf,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_settings_path")]
    pub settings_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default = "default_history_size")]
    pub history_size: usize,

    #[serde(default = "default_restart_threshold_secs")]
    pub restart_threshold_secs: u64,

    #[serde(default)]
    pub initial_repeat: RepeatMode,

    #[serde(default)]
    pub shuffle: bool,

    #[serde(default = "default_volume")]
    pub volume: f32,
}

impl CadenceConfig {
    /// Load configuration from defaults, a config file and the environment
    ///
    /// An explicit `path` must exist; otherwise `cadence.toml` in the working
    /// directory is read when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        settings = match path {
            Some(path) => settings.add_source(config::File::from(path).required(true)),
            None => settings
                .add_source(config::File::from(PathBuf::from(DEFAULT_CONFIG_FILE)).required(false)),
        };

        // Override with environment variables (CADENCE_SECTION__KEY)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.playback.history_size == 0 {
            return Err(CliError::Config(
                "playback.history_size must be at least 1".to_string(),
            ));
        }

        if !self.catalog.remote_url.starts_with("http://")
            && !self.catalog.remote_url.starts_with("https://")
        {
            return Err(CliError::Config(format!(
                "catalog.remote_url must be an http(s) URL, got {:?}",
                self.catalog.remote_url
            )));
        }

        if self.catalog.timeout_secs == 0 {
            return Err(CliError::Config(
                "catalog.timeout_secs must be at least 1".to_string(),
            ));
        }

        self.playback_config().validate()?;
        Ok(())
    }

    pub fn catalog_timeout(&self) -> Duration {
        Duration::from_secs(self.catalog.timeout_secs)
    }

    /// Sequencer and session settings
    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            history_size: self.playback.history_size,
            restart_threshold: Duration::from_secs(self.playback.restart_threshold_secs),
            repeat: self.playback.initial_repeat,
            shuffle: self.playback.shuffle,
            volume: self.playback.volume,
        }
    }
}

// Default values
fn default_catalog() -> CatalogSettings {
    CatalogSettings {
        remote_url: default_remote_url(),
        local_path: default_local_path(),
        timeout_secs: default_timeout_secs(),
    }
}

fn default_remote_url() -> String {
    "http://localhost:8000/songs.json".to_string()
}

fn default_local_path() -> PathBuf {
    PathBuf::from("songs.json")
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        settings_path: default_settings_path(),
    }
}

fn default_settings_path() -> PathBuf {
    PathBuf::from(".cadence/settings.json")
}

fn default_playback() -> PlaybackSettings {
    PlaybackSettings {
        history_size: default_history_size(),
        restart_threshold_secs: default_restart_threshold_secs(),
        initial_repeat: RepeatMode::All,
        shuffle: false,
        volume: default_volume(),
    }
}

fn default_history_size() -> usize {
    50
}

fn default_restart_threshold_secs() -> u64 {
    3
}

fn default_volume() -> f32 {
    1.0
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            storage: default_storage(),
            playback: default_playback(),
        }
    }
}
