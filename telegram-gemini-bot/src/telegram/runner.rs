//! Long-lived runners: long-polling via `teloxide::repl`, webhook via
//! teloxide's axum update listener. Each update is dispatched in its own
//! spawned task; dispatch errors are logged, never propagated.

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use tracing::{error, info, instrument};

use super::event::to_inbound;
use crate::router::Router;

fn handle_update(router: &Router, msg: &teloxide::types::Message) {
    let Some((user, chat, event)) = to_inbound(msg) else {
        info!(chat_id = msg.chat.id.0, "Update without sender skipped");
        return;
    };

    info!(
        user_id = user.id,
        chat_id = chat.id,
        event = ?event,
        "Received update"
    );

    // Dispatch in a spawned task so the listener keeps draining updates.
    let router = router.clone();
    tokio::spawn(async move {
        if let Err(e) = router.dispatch(&user, &chat, event).await {
            error!(error = %e, user_id = user.id, "Dispatch failed");
        }
    });
}

/// Runs the long-polling loop until externally terminated.
#[instrument(skip(bot, router))]
pub async fn run_polling(bot: teloxide::Bot, router: Router) -> Result<()> {
    info!("Starting long-polling runner");
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let router = router.clone();
        async move {
            handle_update(&router, &msg);
            Ok(())
        }
    })
    .await;
    Ok(())
}

/// Registers `{public_url}/webhook` with Telegram, then serves updates over
/// HTTP on `0.0.0.0:port` until externally terminated.
#[instrument(skip(bot, router, public_url))]
pub async fn run_webhook(
    bot: teloxide::Bot,
    router: Router,
    public_url: &str,
    port: u16,
) -> Result<()> {
    let url: reqwest::Url = format!("{}/webhook", public_url.trim_end_matches('/')).parse()?;
    let addr = ([0, 0, 0, 0], port).into();

    info!(%url, port, "Starting webhook runner");
    let listener = webhooks::axum(bot.clone(), webhooks::Options::new(addr, url))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to register webhook: {}", e))?;

    teloxide::repl_with_listener(
        bot,
        move |_bot: Bot, msg: teloxide::types::Message| {
            let router = router.clone();
            async move {
                handle_update(&router, &msg);
                Ok(())
            }
        },
        listener,
    )
    .await;
    Ok(())
}
