//! Plain text: search the song and reply with a YouTube Music link.
//!
//! Always sends two messages: an acknowledgement echoing the query, then exactly one of the
//! found / not-found / error replies. Search failures end in the error reply and are never
//! returned to the chain; only send failures are.

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, Reply, Result};
use std::sync::Arc;
use tracing::{error, info, instrument};
use youtube_search::{search_top, SearchOutcome, VideoSearch};

use crate::messages;

pub struct SongSearchHandler {
    bot: Arc<dyn Bot>,
    search: Arc<dyn VideoSearch>,
}

impl SongSearchHandler {
    pub fn new(bot: Arc<dyn Bot>, search: Arc<dyn VideoSearch>) -> Self {
        Self { bot, search }
    }
}

#[async_trait]
impl Handler for SongSearchHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_plain_text() {
            return Ok(HandlerResponse::Ignore);
        }

        let query = message.content.trim();
        info!(user_id = message.user.id, query = %query, "Received song query");

        self.bot
            .reply_to(message, Reply::plain(messages::searching(query)))
            .await?;

        let (reply, title) = match search_top(self.search.as_ref(), query).await {
            SearchOutcome::Success(video) => {
                let reply = Reply::html(messages::found(&video));
                (reply, Some(video.title))
            }
            SearchOutcome::Empty => (Reply::plain(messages::NOT_FOUND_TEXT), None),
            SearchOutcome::Failure(detail) => {
                error!(query = %query, error = %detail, "Search failed");
                (Reply::plain(messages::ERROR_TEXT), None)
            }
        };

        let text = reply.text.clone();
        self.bot.reply_to(message, reply).await?;
        if let Some(title) = title {
            info!(user_id = message.user.id, title = %title, "Sent link");
        }

        Ok(HandlerResponse::Reply(text))
    }
}
