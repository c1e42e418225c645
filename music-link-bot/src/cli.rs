//! CLI parser and config loading.

use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser, Debug)]
#[command(name = "music-link-bot")]
#[command(about = "Telegram bot that finds YouTube Music links for songs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Defaults to `run`.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot (config from env; token can override TELEGRAM_BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Run { token: None }
    }
}

/// Loads and validates BotConfig from environment. If `token` is provided it overrides
/// TELEGRAM_BOT_TOKEN. Every failure is `DbotError::Config`.
pub fn load_config(token: Option<String>) -> dbot_core::Result<BotConfig> {
    let config = BotConfig::load(token)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbot_core::DbotError;
    use serial_test::serial;
    use std::env;

    #[test]
    fn test_no_subcommand_defaults_to_run() {
        let cli = Cli::try_parse_from(["music-link-bot"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Commands::Run { token: None });
    }

    #[test]
    fn test_run_with_token() {
        let cli = Cli::try_parse_from(["music-link-bot", "run", "--token", "abc"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Run {
                token: Some("abc".to_string())
            })
        );
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["music-link-bot", "serve"]).is_err());
    }

    #[test]
    #[serial]
    fn test_load_config_rejects_invalid_values() {
        env::remove_var("TELEGRAM_API_URL");
        env::remove_var("TELOXIDE_API_URL");
        env::set_var("TELEGRAM_BOT_TOKEN", "t");

        env::set_var("YOUTUBE_BASE_URL", "youtube");
        assert!(matches!(load_config(None), Err(DbotError::Config(_))));
        env::remove_var("YOUTUBE_BASE_URL");

        env::set_var("SEARCH_TIMEOUT_SECS", "0");
        assert!(matches!(load_config(None), Err(DbotError::Config(_))));
        env::remove_var("SEARCH_TIMEOUT_SECS");

        assert!(load_config(None).is_ok());
        env::remove_var("TELEGRAM_BOT_TOKEN");
    }
}
