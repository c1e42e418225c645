//! Application config, loaded once from env at startup and passed into handler registration.

use dbot_core::{DbotError, Result};
use dbot_telegram::TelegramConfig;
use std::env;
use std::time::Duration;
use youtube_search::YouTubeSearchConfig;

const DEFAULT_LOG_FILE: &str = "logs/music-link-bot.log";
const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 10;

/// Bot config: Telegram connectivity, logging, and search provider settings.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    /// LOG_FILE
    pub log_file: String,
    /// YOUTUBE_BASE_URL, SEARCH_LANGUAGE, SEARCH_REGION, SEARCH_TIMEOUT_SECS
    pub search: YouTubeSearchConfig,
}

impl BotConfig {
    /// Loads from environment variables. `token` overrides TELEGRAM_BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let log_file = env_or("LOG_FILE", DEFAULT_LOG_FILE);

        let defaults = YouTubeSearchConfig::default();
        let timeout_secs = match env_var("SEARCH_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                DbotError::Config(format!("SEARCH_TIMEOUT_SECS is not a number: {}", raw))
            })?,
            None => DEFAULT_SEARCH_TIMEOUT_SECS,
        };
        let search = YouTubeSearchConfig {
            base_url: env_or("YOUTUBE_BASE_URL", &defaults.base_url),
            language: env_or("SEARCH_LANGUAGE", &defaults.language),
            region: env_or("SEARCH_REGION", &defaults.region),
            timeout: Duration::from_secs(timeout_secs),
        };

        Ok(Self {
            telegram,
            log_file,
            search,
        })
    }

    /// Validates URLs and the search timeout.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if reqwest::Url::parse(&self.search.base_url).is_err() {
            return Err(DbotError::Config(format!(
                "YOUTUBE_BASE_URL is not a valid URL: {}",
                self.search.base_url
            )));
        }
        if self.search.timeout.is_zero() {
            return Err(DbotError::Config(
                "SEARCH_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Blank values count as unset.
fn env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    env_var(key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "TELEGRAM_BOT_TOKEN",
        "TELEGRAM_API_URL",
        "TELOXIDE_API_URL",
        "LOG_FILE",
        "YOUTUBE_BASE_URL",
        "SEARCH_LANGUAGE",
        "SEARCH_REGION",
        "SEARCH_TIMEOUT_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();
        env::set_var("TELEGRAM_BOT_TOKEN", "test_token");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.telegram.bot_token, "test_token");
        assert!(config.telegram.telegram_api_url.is_none());
        assert_eq!(config.log_file, "logs/music-link-bot.log");
        assert_eq!(config.search.base_url, "https://www.youtube.com");
        assert_eq!(config.search.language, "en");
        assert_eq!(config.search.region, "US");
        assert_eq!(config.search.timeout, Duration::from_secs(10));
        assert!(config.validate().is_ok());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        clear_env();
        env::set_var("TELEGRAM_BOT_TOKEN", "custom_token");
        env::set_var("LOG_FILE", "/tmp/bot.log");
        env::set_var("YOUTUBE_BASE_URL", "http://127.0.0.1:9000");
        env::set_var("SEARCH_LANGUAGE", "de");
        env::set_var("SEARCH_REGION", "DE");
        env::set_var("SEARCH_TIMEOUT_SECS", "3");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.log_file, "/tmp/bot.log");
        assert_eq!(config.search.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.search.language, "de");
        assert_eq!(config.search.region, "DE");
        assert_eq!(config.search.timeout, Duration::from_secs(3));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_config_with_override_token() {
        clear_env();
        env::set_var("TELEGRAM_BOT_TOKEN", "env_token");

        let config = BotConfig::load(Some("override_token".to_string())).unwrap();
        assert_eq!(config.telegram.bot_token, "override_token");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_missing_token_is_fatal() {
        clear_env();
        let err = BotConfig::load(None).unwrap_err();
        assert!(matches!(
            err,
            DbotError::Config(ref m) if m == "The TELEGRAM_BOT_TOKEN environment variable is not set!"
        ));
    }

    #[test]
    #[serial]
    fn test_bad_timeout_rejected() {
        clear_env();
        env::set_var("TELEGRAM_BOT_TOKEN", "t");

        env::set_var("SEARCH_TIMEOUT_SECS", "soon");
        assert!(BotConfig::load(None).is_err());

        env::set_var("SEARCH_TIMEOUT_SECS", "0");
        let config = BotConfig::load(None).unwrap();
        assert!(config.validate().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_values_fall_back_to_defaults() {
        clear_env();
        env::set_var("TELEGRAM_BOT_TOKEN", "t");
        env::set_var("SEARCH_TIMEOUT_SECS", "");
        env::set_var("SEARCH_REGION", "  ");

        let config = BotConfig::load(None).unwrap();
        assert_eq!(config.search.timeout, Duration::from_secs(10));
        assert_eq!(config.search.region, "US");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_validate_rejects_invalid_urls() {
        clear_env();
        env::set_var("TELEGRAM_BOT_TOKEN", "t");
        env::set_var("YOUTUBE_BASE_URL", "youtube");
        assert!(BotConfig::load(None).unwrap().validate().is_err());

        env::remove_var("YOUTUBE_BASE_URL");
        env::set_var("TELEGRAM_API_URL", "not-a-valid-url");
        assert!(BotConfig::load(None).unwrap().validate().is_err());

        clear_env();
    }
}
