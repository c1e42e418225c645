//! `/help`: static usage text.

use async_trait::async_trait;
use dbot_core::{Bot, BotCommand, Handler, HandlerResponse, Message, Reply, Result};
use std::sync::Arc;

use crate::messages::HELP_TEXT;

pub struct HelpHandler {
    bot: Arc<dyn Bot>,
}

impl HelpHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for HelpHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.command != Some(BotCommand::Help) {
            return Ok(HandlerResponse::Ignore);
        }

        self.bot.reply_to(message, Reply::html(HELP_TEXT)).await?;
        Ok(HandlerResponse::Reply(HELP_TEXT.to_string()))
    }
}
