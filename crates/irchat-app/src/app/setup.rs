use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Write;

use irchat_api::HttpBackend;
use irchat_core::{ChatBackend, ChatView, Message, SessionId};

use crate::config::AppConfig;
use crate::conversation_logger::ConversationLogger;
use crate::render::{format_entry, PENDING_PLACEHOLDER};
use crate::store::FileStore;

/// Everything a front end needs to hold a conversation
pub struct ChatSession {
    pub view: ChatView,
    pub backend: HttpBackend,
    pub logger: Option<ConversationLogger>,
}

/// Bootstrap the session identifier and build the view, backend and logger
pub async fn setup_session(config: &AppConfig) -> Result<ChatSession> {
    let mut store = FileStore::open(&config.session_file)?;
    let session_id = SessionId::bootstrap(&mut store)
        .with_context(|| format!("Failed to initialize session in {}", store.path().display()))?;
    log::debug!("Session {} from {}", session_id, store.path().display());

    let backend = HttpBackend::new(&config.backend_url).with_verbose(config.verbose);

    let logger = match &config.logs_dir {
        Some(dir) => match ConversationLogger::new(dir, session_id.as_str()).await {
            Ok(logger) => Some(logger),
            Err(e) => {
                eprintln!("{} Logging disabled: {}", "⚠️".yellow(), e);
                None
            }
        },
        None => None,
    };

    Ok(ChatSession {
        view: ChatView::new(session_id),
        backend,
        logger,
    })
}

impl ChatSession {
    /// Submit `draft` and wait for the reply.
    ///
    /// Returns the bot message, or `None` when the draft was blank and
    /// nothing was sent. With `show_pending` a placeholder line is drawn
    /// while the request is outstanding.
    pub async fn submit(&mut self, draft: &str, show_pending: bool) -> Option<Message> {
        self.view.set_draft(draft);
        let request = self.view.begin_submit()?;

        if let Some(logger) = &mut self.logger {
            if let Some(user_message) = self.view.messages().last() {
                logger.log(user_message).await;
            }
        }

        if show_pending {
            if let Some(pending) = self.view.entries().last() {
                print!("{}", format_entry(pending));
                let _ = std::io::stdout().flush();
            }
        }

        let outcome = self.backend.send(&request).await;
        let reply = self.view.finish_submit(outcome).clone();

        if show_pending {
            // Erase the placeholder line
            print!("\r{}\r", " ".repeat(PENDING_PLACEHOLDER.chars().count()));
            let _ = std::io::stdout().flush();
        }

        if let Some(logger) = &mut self.logger {
            logger.log(&reply).await;
        }

        Some(reply)
    }
}
