use anyhow::{bail, Result};

use crate::app::setup::setup_session;
use crate::config::AppConfig;
use crate::render::render_inline_markdown;

/// Ask a single question and print the reply.
///
/// Failures still print the fallback reply, as the chat view does; only an
/// empty question is an error here.
pub async fn run_ask_mode(config: &AppConfig, question: &str) -> Result<()> {
    let mut session = setup_session(config).await?;

    match session.submit(question, false).await {
        Some(reply) => {
            println!("{}", render_inline_markdown(reply.text()));
            Ok(())
        }
        None => bail!("Nothing to ask: the question is empty"),
    }
}
