//! Assembly: builds the store, inference client, transport, and router from
//! config, then runs the transport the config selects.

use std::sync::Arc;

use anyhow::Result;
use conversation::ConversationStore;
use gemini_client::{GeminiClient, InferenceClient};
use relay_core::{init_tracing, ChatTransport};
use tracing::{error, info};

use crate::config::BotConfig;
use crate::router::Router;
use crate::telegram::{run_polling, run_webhook, TelegramTransport};

fn build_teloxide_bot(config: &BotConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    if let Some(ref url_str) = config.telegram_api_url {
        match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        }
    } else {
        bot
    }
}

/// Builds the router around the given teloxide Bot. The store is owned by
/// the router's handlers and injected here, not a module-level singleton.
pub fn build_router(config: &BotConfig, bot: teloxide::Bot) -> Router {
    let store = ConversationStore::new(config.history_cap);
    let client: Arc<dyn InferenceClient> = Arc::new(
        GeminiClient::new(config.gemini_api_key.clone())
            .with_model(config.gemini_model.clone())
            .with_base_url(config.gemini_base_url.clone()),
    );
    let transport: Arc<dyn ChatTransport> = Arc::new(TelegramTransport::new(bot));
    Router::new(store, client, transport)
}

/// Main entry: validate config, init logging, build the router, then run
/// the webhook transport when `WEBHOOK_URL` is set, long-polling otherwise.
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        model = %config.gemini_model,
        history_cap = config.history_cap,
        webhook = config.webhook_url.is_some(),
        "Initializing bot"
    );

    let bot = build_teloxide_bot(&config);
    let router = build_router(&config, bot.clone());

    info!("Bot started successfully");

    match config.webhook_url {
        Some(ref url) => run_webhook(bot, router, url, config.port).await,
        None => run_polling(bot, router).await,
    }
}
