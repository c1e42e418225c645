//! Core types: user, chat, message, command, reply, handler response, and Handler trait.
//!
//! One file per main type.

mod chat;
mod command;
mod handler;
mod message;
mod reply;
mod response;
mod user;

pub use chat::Chat;
pub use command::BotCommand;
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use message::Message;
pub use reply::{Reply, ReplyFormat};
pub use response::HandlerResponse;
pub use user::User;
