//! REPL runner: converts teloxide messages to core messages and passes them to the HandlerChain.
//! Calls get_me once before polling to learn the bot username.

use crate::adapters::TelegramMessageWrapper;
use crate::config::TelegramConfig;
use anyhow::Result;
use dbot_core::{DbotError, HandlerResponse, Message as CoreMessage, ToCoreMessage};
use handler_chain::HandlerChain;
use std::sync::Arc;
use teloxide::prelude::*;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};

/// Builds a teloxide Bot from config, applying the API URL override if set.
pub fn build_teloxide_bot(config: &TelegramConfig) -> dbot_core::Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match config.telegram_api_url {
        Some(ref url) => {
            let url = reqwest::Url::parse(url).map_err(|e| {
                DbotError::Config(format!("Invalid TELEGRAM_API_URL {}: {}", url, e))
            })?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Asks Telegram who we are. Failure is logged and yields `None`; polling still starts.
pub async fn fetch_bot_username(bot: &teloxide::Bot) -> Option<String> {
    match bot.get_me().await {
        Ok(me) => {
            let username = me.user.username.clone();
            info!(username = ?username, bot_id = me.user.id.0, "Fetched bot identity");
            username
        }
        Err(e) => {
            warn!(error = %e, "get_me failed; commands with @mentions will not be recognized");
            None
        }
    }
}

/// Runs one core message through the chain. Errors are logged, never returned, so one failing
/// message cannot stop the dispatcher.
#[instrument(skip(chain, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
pub async fn dispatch(chain: &HandlerChain, message: &CoreMessage) -> HandlerResponse {
    match chain.handle(message).await {
        Ok(HandlerResponse::Continue) => {
            debug!(command = ?message.command, "No handler took the message");
            HandlerResponse::Continue
        }
        Ok(response) => response,
        Err(e) => {
            error!(error = %e, "Handler chain failed");
            HandlerResponse::Stop
        }
    }
}

/// Starts long polling with the given teloxide Bot and HandlerChain.
///
/// Writes the username from get_me into `bot_username` before polling. Each text message is
/// converted to a core message and awaited in the REPL callback, so messages of one chat are
/// handled in order while different chats run concurrently.
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<RwLock<Option<String>>>,
) -> Result<()> {
    if let Some(username) = fetch_bot_username(&bot).await {
        *bot_username.write().await = Some(username);
    }

    info!("Bot is running...");

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();
        let bot_username = bot_username.clone();

        async move {
            if msg.text().is_none() {
                debug!(chat_id = msg.chat.id.0, "Ignoring non-text message");
                return respond(());
            }

            let username = bot_username.read().await.clone();
            let core_msg = TelegramMessageWrapper(&msg, username.as_deref()).to_core();
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_content = %core_msg.content,
                "Received message"
            );

            dispatch(&chain, &core_msg).await;
            respond(())
        }
    })
    .await;

    Ok(())
}
