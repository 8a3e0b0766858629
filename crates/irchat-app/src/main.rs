use anyhow::Result;
use clap::{CommandFactory, Parser};

use irchat::app::{run_ask_mode, run_repl_mode};
use irchat::{AppConfig, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let cli = Cli::parse();

    if let Some(shell) = cli.generate {
        let mut command = Cli::command();
        let name = command.get_name().to_string();
        clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
        return Ok(());
    }

    let config = AppConfig::from_cli(&cli)?;

    if let Some(question) = cli.ask.as_deref() {
        return run_ask_mode(&config, question).await;
    }

    run_repl_mode(&config).await
}
