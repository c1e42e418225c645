//! Minimal framework config: token and optional Bot API URL.
//! Loaded from env: TELEGRAM_BOT_TOKEN, TELEGRAM_API_URL (or TELOXIDE_API_URL).

use dbot_core::{DbotError, Result};
use std::env;

/// Environment variable holding the bot token.
pub const TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Minimal Telegram bot config (connectivity only).
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from env. `token` overrides TELEGRAM_BOT_TOKEN when given. A missing or blank
    /// token is a [`DbotError::Config`].
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = token
            .or_else(|| env::var(TOKEN_ENV).ok())
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                DbotError::Config(format!("The {} environment variable is not set!", TOKEN_ENV))
            })?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok()
            .filter(|u| !u.trim().is_empty());
        Ok(Self {
            bot_token,
            telegram_api_url,
        })
    }

    /// Fails if `telegram_api_url` is set but not a valid URL.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url) = self.telegram_api_url {
            reqwest::Url::parse(url).map_err(|e| {
                DbotError::Config(format!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is not a valid URL: {} ({})",
                    url, e
                ))
            })?;
        }
        Ok(())
    }
}
