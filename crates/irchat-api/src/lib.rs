//! # irchat-api
//!
//! HTTP implementation of [`irchat_core::ChatBackend`] on top of `reqwest`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use irchat_api::HttpBackend;
//! use irchat_core::{ChatView, MemoryStore, SessionId};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut store = MemoryStore::new();
//!     let session = SessionId::bootstrap(&mut store)?;
//!     let backend = HttpBackend::new("http://localhost:8000");
//!
//!     let mut view = ChatView::new(session);
//!     view.set_draft("What is the fund's AUM?");
//!     view.submit(&backend).await;
//!
//!     for message in view.messages() {
//!         println!("{}: {}", message.role(), message.text());
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod debug;

pub use client::HttpBackend;
pub use debug::safe_truncate;
