//! # telegram-gemini-bot
//!
//! Telegram ↔ Gemini relay: dispatches inbound updates to command responders
//! or the conversational message handler, which keeps a bounded per-user
//! history and replays it to Gemini on every message.

pub mod assembly;
pub mod cli;
pub mod config;
pub mod handlers;
pub mod router;
pub mod telegram;

pub use assembly::{build_router, run_bot};
pub use cli::{Cli, Commands};
pub use config::BotConfig;
pub use router::Router;
