//! Responders for the four reserved commands. All texts are static; only
//! `/clear` mutates state.

use conversation::ConversationStore;
use tracing::info;

const HELP_TEXT: &str = "\
Gemini relay bot

Available commands:
/start - Start the bot
/help - Show this help message
/about - Information about this bot
/clear - Forget our conversation so far

Just send me any message and I'll respond using Gemini.";

const ABOUT_TEXT: &str = "\
About this bot

An AI assistant backed by Google's Gemini model. It keeps a short window of
your recent messages as context and forgets everything on restart.

Built with Rust, teloxide, and the Gemini API.";

const CLEAR_CONFIRMATION: &str = "Conversation history cleared. Let's start fresh!";

/// Static command responders plus the `/clear` store reset.
#[derive(Clone)]
pub struct CommandResponder {
    store: ConversationStore,
}

impl CommandResponder {
    pub fn new(store: ConversationStore) -> Self {
        Self { store }
    }

    /// `/start`: greeting, personalised with the sender's display name.
    pub fn greeting(&self, display_name: &str) -> String {
        format!(
            "Hello {}! I'm your AI assistant powered by Gemini.\n\n\
             Just send me a message and I'll respond. Use /help to see what I can do.",
            display_name
        )
    }

    /// `/help`: static help listing.
    pub fn help(&self) -> &'static str {
        HELP_TEXT
    }

    /// `/about`: static metadata text.
    pub fn about(&self) -> &'static str {
        ABOUT_TEXT
    }

    /// `/clear`: resets the invoking user's conversation and confirms.
    pub async fn clear(&self, user_id: i64) -> &'static str {
        self.store.clear(user_id).await;
        info!(user_id, "History cleared by /clear command");
        CLEAR_CONFIRMATION
    }
}
