//! Event router: exhaustive dispatch over the tagged [`InboundEvent`].
//!
//! Commands go to fixed responders, plain text to the conversational
//! handler. Unknown commands and undecodable updates are logged and dropped;
//! no per-message failure escapes to the runner as anything but a logged
//! error.

use std::sync::Arc;

use conversation::ConversationStore;
use gemini_client::InferenceClient;
use relay_core::{Chat, ChatTransport, Command, InboundEvent, Result, User};
use tracing::{debug, info, instrument, warn};

use crate::handlers::{ChatHandler, CommandResponder};

/// Dispatches one inbound event to the matching handler and delivers the
/// response through the transport.
#[derive(Clone)]
pub struct Router {
    transport: Arc<dyn ChatTransport>,
    commands: CommandResponder,
    chat: ChatHandler,
}

impl Router {
    pub fn new(
        store: ConversationStore,
        client: Arc<dyn InferenceClient>,
        transport: Arc<dyn ChatTransport>,
    ) -> Self {
        let commands = CommandResponder::new(store.clone());
        let chat = ChatHandler::new(store, client, transport.clone());
        Self {
            transport,
            commands,
            chat,
        }
    }

    /// Handles one event end to end. The only errors surfaced are outbound
    /// transport failures; the runner logs them and keeps serving.
    #[instrument(skip(self, event), fields(user_id = user.id, chat_id = chat.id))]
    pub async fn dispatch(&self, user: &User, chat: &Chat, event: InboundEvent) -> Result<()> {
        match event {
            InboundEvent::Command(Command::Start) => {
                info!(user_id = user.id, "Dispatching /start");
                let text = self.commands.greeting(user.display_name());
                self.transport.send_message(chat, &text).await
            }
            InboundEvent::Command(Command::Help) => {
                info!(user_id = user.id, "Dispatching /help");
                self.transport.send_message(chat, self.commands.help()).await
            }
            InboundEvent::Command(Command::About) => {
                info!(user_id = user.id, "Dispatching /about");
                self.transport
                    .send_message(chat, self.commands.about())
                    .await
            }
            InboundEvent::Command(Command::Clear) => {
                info!(user_id = user.id, "Dispatching /clear");
                let text = self.commands.clear(user.id).await;
                self.transport.send_message(chat, text).await
            }
            InboundEvent::Command(Command::Unknown(name)) => {
                debug!(user_id = user.id, command = %name, "Unknown command ignored");
                Ok(())
            }
            InboundEvent::Text(body) => {
                let reply = self.chat.handle(user, chat, &body).await;
                self.transport.send_message(chat, &reply).await
            }
            InboundEvent::Error { cause } => {
                warn!(user_id = user.id, %cause, "Undecodable update ignored");
                Ok(())
            }
        }
    }
}
