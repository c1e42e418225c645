//! Handlers registered in the chain, one per inbound event shape.

mod help_handler;
mod logging_handler;
mod song_search_handler;
mod start_handler;

pub use help_handler::HelpHandler;
pub use logging_handler::LoggingHandler;
pub use song_search_handler::SongSearchHandler;
pub use start_handler::StartHandler;
