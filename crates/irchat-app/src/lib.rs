//! Terminal front end for the Investor Chat Assistant

pub mod app;
pub mod cli;
pub mod config;
pub mod conversation_logger;
pub mod render;
pub mod store;

pub use cli::Cli;
pub use config::AppConfig;
pub use conversation_logger::ConversationLogger;
pub use store::FileStore;
