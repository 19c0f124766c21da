//! Conversational message handler: records the user turn, replays the full
//! bounded history to Gemini, records the reply, and returns the text for
//! delivery.

use std::sync::Arc;

use conversation::{ConversationStore, Turn};
use gemini_client::InferenceClient;
use relay_core::{Chat, ChatTransport, User};
use tracing::{error, info, instrument, warn};

/// Sent to the user when the inference call fails for any reason.
pub const FALLBACK_REPLY: &str =
    "Sorry, I encountered an error while processing your request. Please try again later.";

/// Logs an error and its cause chain. First item with `first_msg`, rest with
/// "Caused by".
fn log_error_chain(e: &anyhow::Error, first_msg: &str) {
    for (i, cause) in e.chain().enumerate() {
        if i == 0 {
            error!(cause = %cause, "{}", first_msg);
        } else {
            error!(cause = %cause, "Caused by");
        }
    }
}

/// Handles one plain-text message.
///
/// The user turn is recorded before the inference call and is kept even when
/// the call fails: the conversation reflects what was asked whether or not
/// an answer arrived. On failure no model turn is recorded and the fixed
/// [`FALLBACK_REPLY`] is returned instead.
#[derive(Clone)]
pub struct ChatHandler {
    store: ConversationStore,
    client: Arc<dyn InferenceClient>,
    transport: Arc<dyn ChatTransport>,
}

impl ChatHandler {
    pub fn new(
        store: ConversationStore,
        client: Arc<dyn InferenceClient>,
        transport: Arc<dyn ChatTransport>,
    ) -> Self {
        Self {
            store,
            client,
            transport,
        }
    }

    /// Runs the record → infer → record sequence and returns the reply text
    /// for the caller to deliver. Never fails; inference errors degrade to
    /// the fallback text.
    #[instrument(skip(self, text), fields(user_id = user.id))]
    pub async fn handle(&self, user: &User, chat: &Chat, text: &str) -> String {
        self.store.append(user.id, Turn::user(text)).await;

        // Presence signal before the (potentially slow) inference call.
        if let Err(e) = self.transport.send_typing(chat).await {
            warn!(error = %e, user_id = user.id, "Failed to send typing indicator");
        }

        let history = self.store.history(user.id).await;
        info!(
            user_id = user.id,
            turn_count = history.len(),
            "Submitting conversation to inference"
        );

        match self.client.generate(&history).await {
            Ok(reply) => {
                self.store.append(user.id, Turn::model(reply.clone())).await;
                info!(user_id = user.id, reply_len = reply.len(), "Reply generated");
                reply
            }
            Err(e) => {
                log_error_chain(&e, "Inference call failed");
                FALLBACK_REPLY.to_string()
            }
        }
    }
}
