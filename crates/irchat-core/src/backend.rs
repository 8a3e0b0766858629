use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// Backend host used when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Body of `POST /chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub prompt: String,
}

/// Successful reply. Any other fields the backend sends are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Build the chat endpoint from the configured base URL
pub fn chat_url(base: &str) -> String {
    format!("{}/chat", base.trim_end_matches('/'))
}

/// Classify a raw HTTP reply: non-2xx is a status failure, a 2xx body that
/// does not carry a string `response` is malformed.
pub fn parse_response(status: u16, body: &str) -> Result<ChatResponse, ChatError> {
    if !(200..300).contains(&status) {
        return Err(ChatError::Status {
            status,
            body: body.to_string(),
        });
    }

    serde_json::from_str(body).map_err(|e| ChatError::Malformed(e.to_string()))
}

/// Remote service that answers prompts.
///
/// Futures are not required to be `Send` so browser fetch implementations
/// can satisfy the trait.
#[async_trait(?Send)]
pub trait ChatBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError>;
}
