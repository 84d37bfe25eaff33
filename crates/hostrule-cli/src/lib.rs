//! Hostrule CLI library.
//!
//! This library provides the caller side of the hostrule converter: argument parsing,
//! the persisted user template store, logging setup, command execution and output
//! formatting. All conversion logic lives in `hostrule-engine`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
