//! Chat transport abstraction.
//!
//! [`ChatTransport`] is the outbound seam: production code sends through
//! Telegram, tests substitute a recording implementation.

use crate::error::Result;
use crate::types::Chat;
use async_trait::async_trait;

/// Outbound calls to the chat platform. Implementations map to a transport
/// (e.g. Telegram).
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Signals a typing/presence indicator to the chat. Best-effort; callers
    /// treat failures as non-fatal.
    async fn send_typing(&self, chat: &Chat) -> Result<()>;
}
