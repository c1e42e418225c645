//! # dbot-core
//!
//! Core types and traits for the bot: [`Bot`], [`Handler`], message, command and reply types,
//! errors, and tracing initialization. Transport-agnostic; used by dbot-telegram, handler-chain
//! and the music-link-bot application.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{DbotError, Result};
pub use logger::init_tracing;
pub use types::{
    BotCommand, Chat, Handler, HandlerResponse, Message, Reply, ReplyFormat, ToCoreMessage,
    ToCoreUser, User,
};
