//! Logs each message in before() and the outcome in after(); always continues.

use async_trait::async_trait;
use dbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        debug!(
            user_id = message.user.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            command = ?message.command,
            "Dispatching message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        match response {
            HandlerResponse::Reply(text) => info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                reply_len = text.len(),
                "Replied"
            ),
            other => debug!(
                user_id = message.user.id,
                response = ?other,
                "No reply"
            ),
        }
        Ok(())
    }
}
