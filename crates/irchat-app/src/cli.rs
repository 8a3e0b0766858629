use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// CLI arguments for irchat
#[derive(Parser, Debug)]
#[command(name = "irchat")]
#[command(about = "Investor Chat Assistant - ask questions about the company from your terminal")]
#[command(version)]
pub struct Cli {
    /// Base URL of the chat backend (requests go to <URL>/chat)
    #[arg(long, value_name = "URL", env = "IRCHAT_BACKEND_API_URL")]
    pub backend_url: Option<String>,

    /// File holding the persisted session identifier (default: ~/.irchat/session.json)
    #[arg(long, value_name = "PATH", env = "IRCHAT_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    /// Ask a single question, print the reply and exit
    #[arg(long, value_name = "TEXT")]
    pub ask: Option<String>,

    /// Enable verbose debug output (shows HTTP requests and responses)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Do not write a conversation transcript
    #[arg(long)]
    pub no_log: bool,

    /// Generate shell completions
    #[arg(long, value_enum, value_name = "SHELL")]
    pub generate: Option<Shell>,
}
