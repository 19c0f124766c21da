//! Wraps teloxide::Bot and implements [`ChatTransport`]. Production code
//! sends through Telegram; tests substitute a recording implementation.

use async_trait::async_trait;
use relay_core::{Chat, ChatTransport, RelayError, Result};
use teloxide::prelude::*;
use teloxide::types::{ChatAction, ChatId};

/// Thin wrapper around teloxide::Bot implementing the core transport seam.
pub struct TelegramTransport {
    bot: teloxide::Bot,
}

impl TelegramTransport {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ChatTransport for TelegramTransport {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text)
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;
        Ok(())
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.bot
            .send_chat_action(ChatId(chat.id), ChatAction::Typing)
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;
        Ok(())
    }
}
