//! `/start`: personalized greeting.

use async_trait::async_trait;
use dbot_core::{Bot, BotCommand, Handler, HandlerResponse, Message, Reply, Result};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::messages;

pub struct StartHandler {
    bot: Arc<dyn Bot>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.command != Some(BotCommand::Start) {
            return Ok(HandlerResponse::Ignore);
        }

        let text = messages::greeting(&message.user);
        self.bot.reply_to(message, Reply::html(text.clone())).await?;
        info!("Sent greeting");
        Ok(HandlerResponse::Reply(text))
    }
}
