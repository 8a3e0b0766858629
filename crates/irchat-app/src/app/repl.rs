use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::app::setup::setup_session;
use crate::config::AppConfig;
use crate::render::format_message;

/// Run interactive REPL mode
pub async fn run_repl_mode(config: &AppConfig) -> Result<()> {
    let mut session = setup_session(config).await?;

    println!("{}", "💼 Investor Chat Assistant".bright_cyan().bold());
    println!("{}", format!("Backend: {}", config.backend_url).bright_black());
    println!("{}", format!("Session: {}", session.view.session_id()).bright_black());
    if let Some(logger) = &session.logger {
        println!("{}", format!("Transcript: {}", logger.file_path().display()).bright_black());
    }
    println!("{}", "Type your question, or 'exit' / 'quit' to leave.\n".bright_black());

    let mut rl = DefaultEditor::new()?;

    loop {
        // The prompt is not shown again until the previous request has
        // finished, so only one request is ever outstanding.
        let readline = rl.readline(&format!("{} ", "You:".bright_green().bold()));

        match readline {
            Ok(line) => {
                let command = line.trim();
                if command == "exit" || command == "quit" {
                    println!("{}", "Goodbye!".bright_cyan());
                    break;
                }
                if !command.is_empty() {
                    let _ = rl.add_history_entry(command);
                }

                if let Some(reply) = session.submit(&line, true).await {
                    println!("{}\n", format_message(&reply));
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".bright_yellow());
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(err) => {
                eprintln!("{} {:?}", "Error:".bright_red(), err);
                break;
            }
        }
    }

    Ok(())
}
