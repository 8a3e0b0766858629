//! Core types and chat view state for irchat
//!
//! This crate holds everything the front ends share: the message model,
//! session bootstrapping over an injected store, the backend contract and
//! the chat view that drives a single request/response cycle. It has no
//! opinion about how messages are drawn or how HTTP is performed.

pub mod backend;
pub mod error;
pub mod session;
pub mod types;
pub mod view;

pub use backend::{chat_url, parse_response, ChatBackend, ChatRequest, ChatResponse, DEFAULT_BACKEND_URL};
pub use error::{fallback_message, ChatError, FALLBACK_MESSAGE};
pub use session::{MemoryStore, SessionId, SessionStore, StoreError, SESSION_KEY};
pub use types::{Message, Role};
pub use view::{ChatView, Entry};
