use thiserror::Error;

use crate::types::Message;

/// Text shown in place of a reply whenever a request fails.
pub const FALLBACK_MESSAGE: &str = "❌ Something went wrong. Try again later.";

/// Failure of a single backend call.
///
/// Users only ever see one class of error ("request failed"); the variants
/// exist for logging and for [`fallback_message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("network error: {0}")]
    Network(String),

    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Map a failure to the text appended to the conversation.
pub fn fallback_message(error: &ChatError) -> &'static str {
    match error {
        ChatError::Network(_) | ChatError::Status { .. } | ChatError::Malformed(_) => FALLBACK_MESSAGE,
    }
}

impl ChatError {
    /// Build the synthetic bot reply for this failure.
    pub fn into_message(self) -> Message {
        Message::bot(fallback_message(&self))
    }
}
