//! Command line interface.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gemini-bot", about = "Telegram relay bot backed by Gemini")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (long-polling, or webhook when WEBHOOK_URL is set).
    Run {
        /// Telegram bot token; overrides the BOT_TOKEN environment variable.
        #[arg(long)]
        token: Option<String>,
    },
}
