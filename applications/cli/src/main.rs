/// Cadence - headless terminal music player
use anyhow::Context;
use cadence_catalog::{
    CatalogLoader, FileSettingsStore, LocalFileSource, MemorySettingsStore, RemoteSource,
    SettingsStore,
};
use cadence_cli::{CadenceConfig, Command, Outcome, Shell, ShellState};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cadence")]
#[command(about = "Cadence playlist player", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "CADENCE_CONFIG")]
    config: Option<PathBuf>,

    /// Keep settings in memory: no catalog snapshot is read or written
    #[arg(long)]
    no_cache: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries shell output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cadence=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config =
        CadenceConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let store: Arc<dyn SettingsStore> = if cli.no_cache {
        Arc::new(MemorySettingsStore::new())
    } else {
        Arc::new(FileSettingsStore::new(&config.storage.settings_path))
    };

    let remote = RemoteSource::with_timeout(&config.catalog.remote_url, config.catalog_timeout())
        .context("Invalid catalog.remote_url")?;
    let loader = CatalogLoader::standard(
        remote,
        Arc::clone(&store),
        LocalFileSource::new(&config.catalog.local_path),
    );

    tracing::info!(remote = %config.catalog.remote_url, "Starting Cadence");

    let mut shell = Shell::new(store, config.playback_config());
    match shell.load(&loader).await {
        ShellState::Ready(session) => println!(
            "Loaded {} tracks. Type 'help' for commands.",
            session.catalog().len()
        ),
        ShellState::Unavailable(message) => println!("{message}"),
        ShellState::Loading => {}
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match shell.handle(command).await {
            Ok(Outcome::Output(text)) => println!("{text}"),
            Ok(Outcome::Quit) => break,
            Err(e) => println!("{e}"),
        }
    }

    Ok(())
}
