//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Production code sends through Telegram;
//! tests substitute another Bot impl or point the API URL at a mock server.

use async_trait::async_trait;
use dbot_core::{parse_message_id, Bot as CoreBot, Chat, DbotError, Reply, ReplyFormat, Result};
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{ChatId, MessageId, ParseMode, ReplyParameters};
use tracing::{debug, instrument};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    #[instrument(skip(self, reply), fields(chat_id = chat.id, format = ?reply.format))]
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        let mut request = self.bot.send_message(ChatId(chat.id), reply.text.clone());
        if reply.format == ReplyFormat::Html {
            request = request.parse_mode(ParseMode::Html);
        }
        if let Some(ref quote) = reply.quote_message_id {
            let id = parse_message_id(quote)?;
            request = request.reply_parameters(ReplyParameters::new(MessageId(id)));
        }

        let sent = request.await.map_err(|e| DbotError::Bot(e.to_string()))?;
        debug!(message_id = sent.id.0, "Reply sent");
        Ok(())
    }
}
