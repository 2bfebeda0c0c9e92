//! Cadence CLI Library
//!
//! Headless terminal player shell: configuration, the line command parser
//! and the shell state machine that drives a `PlayerSession`.
//!
//! This library exposes the shell components for testing purposes.

pub mod command;
pub mod config;
pub mod error;
pub mod shell;

pub use command::Command;
pub use config::CadenceConfig;
pub use error::{CliError, Result};
pub use shell::{Outcome, Shell, ShellState};
