//! # Music link bot
//!
//! Telegram bot that answers `/start` and `/help`, and replies to any other text with a
//! YouTube Music link for the top YouTube search result.
//!
//! Wires dbot-core, handler-chain, dbot-telegram and youtube-search: loads [`BotConfig`] from env,
//! builds the handler chain and runs the REPL.

pub mod cli;
pub mod config;
pub mod handlers;
pub mod messages;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use config::BotConfig;
pub use handlers::{HelpHandler, LoggingHandler, SongSearchHandler, StartHandler};
pub use runner::{build_handler_chain, run_bot};
