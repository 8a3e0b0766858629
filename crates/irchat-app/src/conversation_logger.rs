use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use irchat_core::Message;

#[derive(Serialize)]
struct LogEntry<'a> {
    timestamp: String, // ISO-8601 Local time
    session_id: &'a str,
    role: &'a str,
    text: &'a str,
}

/// Appends the conversation to a JSON-lines transcript
pub struct ConversationLogger {
    file_path: PathBuf,
    session_id: String,
    file: tokio::fs::File,
}

impl ConversationLogger {
    /// Create a new logger in `logs_dir`; the file name is based on the
    /// current local time.
    pub async fn new(logs_dir: &Path, session_id: &str) -> Result<Self> {
        fs::create_dir_all(logs_dir).await?;

        let filename = format!("irchat-{}.jsonl", Local::now().format("%Y-%m-%d-%H%M%S"));
        let file_path = logs_dir.join(filename);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .await?;

        Ok(Self {
            file_path,
            session_id: session_id.to_string(),
            file,
        })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Append a single message. Write failures are reported, never raised.
    pub async fn log(&mut self, message: &Message) {
        let entry = LogEntry {
            timestamp: Local::now().to_rfc3339(),
            session_id: &self.session_id,
            role: message.role().as_str(),
            text: message.text(),
        };

        let Ok(mut line) = serde_json::to_string(&entry) else {
            return;
        };
        line.push('\n');

        if let Err(e) = self.file.write_all(line.as_bytes()).await {
            eprintln!("[Logging error] {}", e);
        } else if let Err(e) = self.file.flush().await {
            eprintln!("[Logging error] {}", e);
        }
    }
}
