//! Binary for the music link bot.

use anyhow::Result;
use clap::Parser;
use dbot_core::DbotError;
use music_link_bot::{load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Commands::Run { token } => {
            let config = match load_config(token) {
                Ok(config) => config,
                Err(DbotError::Config(msg)) => {
                    eprintln!("ERROR: {}", msg);
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            };
            run_bot(config).await
        }
    }
}
