//! Inbound message type for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, command::BotCommand, user::User};

/// A single inbound message: sender, conversation, raw text, and the parsed command if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    /// Set when `content` starts with a bot command.
    pub command: Option<BotCommand>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// True if this is a plain text message: no command and non-blank content.
    pub fn is_plain_text(&self) -> bool {
        self.command.is_none() && !self.content.trim().is_empty()
    }
}
