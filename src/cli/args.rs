//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::application::JobSettings;

/// RelayScribe - transcribe audio through a remote speech-to-text job API
#[derive(Parser, Debug)]
#[command(name = "relay-scribe")]
#[command(version)]
#[command(about = "Audio transcription through a remote speech-to-text job API (upload, submit, poll)")]
#[command(long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Audio file to transcribe
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Content type of the audio (guessed from the file extension if omitted)
    #[arg(short = 't', long, value_name = "MIME")]
    pub content_type: Option<String>,

    /// Write the transcript to a file instead of stdout
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Wait before the first status poll (e.g., 500ms, 3s)
    #[arg(long, value_name = "TIME")]
    pub initial_delay: Option<String>,

    /// Wait between status polls (e.g., 3s)
    #[arg(short = 'i', long, value_name = "TIME")]
    pub poll_interval: Option<String>,

    /// Give up if the job has not finished within this time (e.g., 5m)
    #[arg(short = 'T', long, value_name = "TIME")]
    pub deadline: Option<String>,

    /// API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed transcribe options
#[derive(Debug, Clone)]
pub struct TranscribeOptions {
    pub file: PathBuf,
    pub content_type: Option<String>,
    pub output: Option<PathBuf>,
    pub base_url: String,
    pub settings: JobSettings,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_key",
    "base_url",
    "initial_delay",
    "poll_interval",
    "deadline",
    "retry_attempts",
    "retry_backoff",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
