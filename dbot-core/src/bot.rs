//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; dbot-telegram implements it with teloxide and tests substitute
//! a recording mock.

use crate::error::{DbotError, Result};
use crate::types::{Chat, Message, Reply};
use async_trait::async_trait;

/// Sends replies to a conversation. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a reply to the given chat.
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()>;

    /// Replies in the chat of `message`. In group chats the reply quotes `message`.
    async fn reply_to(&self, message: &Message, reply: Reply) -> Result<()> {
        let reply = if message.chat.is_group() && reply.quote_message_id.is_none() {
            reply.quoting(message.id.clone())
        } else {
            reply
        };
        self.send_reply(&message.chat, &reply).await
    }
}

/// Parses a transport message id string into an i32.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| DbotError::InvalidMessageId(s.to_string()))
}
