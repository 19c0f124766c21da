//! gemini-bot: entry point. Loads config from env/CLI and runs the relay.

use anyhow::Result;
use clap::Parser;
use telegram_gemini_bot::{run_bot, BotConfig, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
    }
}
