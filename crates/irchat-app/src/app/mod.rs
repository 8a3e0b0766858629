pub mod ask;
pub mod repl;
pub mod setup;

pub use ask::run_ask_mode;
pub use repl::run_repl_mode;
pub use setup::{setup_session, ChatSession};
