//! # dbot-telegram
//!
//! Telegram bot framework layer: adapters, [`dbot_core::Bot`] implementation, minimal config, REPL runner.
//! Handles only Telegram connectivity and handler-chain execution; no search or reply wording.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{parse_bot_command, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::{TelegramConfig, TOKEN_ENV};
pub use runner::{build_teloxide_bot, dispatch, fetch_bot_username, run_repl};
