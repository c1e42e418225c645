//! Builds the handler chain and runs the bot.

use anyhow::Result;
use dbot_core::{init_tracing, Bot};
use dbot_telegram::{build_teloxide_bot, run_repl, TelegramBotAdapter};
use handler_chain::HandlerChain;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument};
use youtube_search::{VideoSearch, YouTubeSearch};

use crate::config::BotConfig;
use crate::handlers::{HelpHandler, LoggingHandler, SongSearchHandler, StartHandler};

/// Registers handlers in dispatch order: logging, `/start`, `/help`, plain-text search.
pub fn build_handler_chain(bot: Arc<dyn Bot>, search: Arc<dyn VideoSearch>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(StartHandler::new(bot.clone())))
        .add_handler(Arc::new(HelpHandler::new(bot.clone())))
        .add_handler(Arc::new(SongSearchHandler::new(bot, search)))
}

/// Main entry: init logging, build the Telegram bot, search client and handler chain, then poll
/// until terminated. `config` comes from [`crate::load_config`], which has validated it.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    init_tracing(&config.log_file)?;

    info!(
        log_file = %config.log_file,
        search_base_url = %config.search.base_url,
        search_timeout_secs = config.search.timeout.as_secs(),
        "Initializing bot"
    );

    let teloxide_bot = build_teloxide_bot(&config.telegram)?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let search: Arc<dyn VideoSearch> = Arc::new(YouTubeSearch::new(config.search.clone())?);
    let chain = build_handler_chain(bot, search);
    let bot_username = Arc::new(RwLock::new(None));

    run_repl(teloxide_bot, chain, bot_username).await
}
