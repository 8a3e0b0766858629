use anyhow::{Context, Result};
use std::path::PathBuf;

use irchat_core::DEFAULT_BACKEND_URL;

use crate::cli::Cli;

const SESSION_FILE_NAME: &str = "session.json";

/// Application configuration derived from CLI arguments and environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend_url: String,
    pub session_file: PathBuf,
    /// `None` disables the conversation transcript
    pub logs_dir: Option<PathBuf>,
    pub verbose: bool,
}

impl AppConfig {
    /// Precedence: CLI flags > IRCHAT_* env (clap reads both) > defaults
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let backend_url = cli
            .backend_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .to_string();

        let session_file = match &cli.session_file {
            Some(path) => path.clone(),
            None => get_irchat_dir()?.join(SESSION_FILE_NAME),
        };

        let logs_dir = if cli.no_log {
            None
        } else {
            Some(get_irchat_dir()?.join("logs"))
        };

        Ok(Self {
            backend_url,
            session_file,
            logs_dir,
            verbose: cli.verbose,
        })
    }
}

/// Base directory for irchat state (~/.irchat). Not created here; the
/// writers create what they need.
pub fn get_irchat_dir() -> Result<PathBuf> {
    let home_dir = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Failed to get home directory")?;

    Ok(PathBuf::from(home_dir).join(".irchat"))
}
