//! Bot configuration, loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

use conversation::DEFAULT_HISTORY_CAP;
use gemini_client::EnvInferenceConfig;
use relay_core::RelayError;

/// Process configuration. A missing `BOT_TOKEN` or `GEMINI_API_KEY` is a
/// fatal startup condition; everything else has a default.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub bot_token: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    /// Public base URL for the webhook transport. When set the bot registers
    /// `{WEBHOOK_URL}/webhook` with Telegram and serves updates over HTTP;
    /// when unset it long-polls.
    pub webhook_url: Option<String>,
    /// Listen port for the webhook transport.
    pub port: u16,
    /// Max turns retained per user.
    pub history_cap: usize,
    pub log_file: String,
    /// Optional: Telegram Bot API base URL. Points teloxide at a mock server
    /// in tests. Env: `TELEGRAM_API_URL` or `TELOXIDE_API_URL`.
    pub telegram_api_url: Option<String>,
}

impl BotConfig {
    /// Loads config from environment variables. A `token` argument (e.g.
    /// from the CLI) takes precedence over `BOT_TOKEN`.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let inference = EnvInferenceConfig::from_env()?;
        let webhook_url = env::var("WEBHOOK_URL").ok().filter(|s| !s.is_empty());
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);
        let history_cap = env::var("HISTORY_CAP")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_HISTORY_CAP);
        let log_file = "logs/gemini-bot.log".to_string();
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();

        Ok(Self {
            bot_token,
            gemini_api_key: inference.gemini_api_key,
            gemini_model: inference.gemini_model,
            gemini_base_url: inference.gemini_base_url,
            webhook_url,
            port,
            history_cap,
            log_file,
            telegram_api_url,
        })
    }

    /// Rejects configurations that cannot serve: blank credentials, a zero
    /// history cap, or an unparseable webhook URL.
    pub fn validate(&self) -> relay_core::Result<()> {
        if self.bot_token.trim().is_empty() {
            return Err(RelayError::Config("BOT_TOKEN is empty".to_string()));
        }
        if self.gemini_api_key.trim().is_empty() {
            return Err(RelayError::Config("GEMINI_API_KEY is empty".to_string()));
        }
        if self.history_cap == 0 {
            return Err(RelayError::Config(
                "HISTORY_CAP must be at least 1".to_string(),
            ));
        }
        if let Some(ref url) = self.webhook_url {
            reqwest::Url::parse(url)
                .map_err(|e| RelayError::Config(format!("Invalid WEBHOOK_URL {}: {}", url, e)))?;
        }
        Ok(())
    }
}
