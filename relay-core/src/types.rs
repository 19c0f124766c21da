//! Core types: user, chat, and the tagged inbound event.

use serde::{Deserialize, Serialize};

/// User identity (id, username, names). The id is the stable key for the
/// user's conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Name to address the user with in replies: first name, then username,
    /// then a generic fallback.
    pub fn display_name(&self) -> &str {
        self.first_name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or("there")
    }
}

/// Chat (channel or private) identity. Replies go back to the chat the
/// message arrived in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// One reserved bot command. Exact name match only; anything else parses as
/// `Unknown` and is dropped by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    About,
    Clear,
    Unknown(String),
}

/// Inbound update, tagged by kind so router dispatch is exhaustive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// A reserved command (`/start`, `/help`, ...).
    Command(Command),
    /// Plain text for the message handler.
    Text(String),
    /// An update the transport could not decode into text (sticker, photo,
    /// malformed payload). Logged and ignored.
    Error { cause: String },
}

impl InboundEvent {
    /// Classifies raw message text. A leading `/` makes the first token a
    /// command name; Telegram may suffix it with `@botname`, which is
    /// stripped before matching. Everything else is plain text, passed
    /// through unchanged (including empty strings).
    pub fn from_text(text: &str) -> Self {
        if let Some(rest) = text.strip_prefix('/') {
            let name = rest.split_whitespace().next().unwrap_or("");
            let name = name.split('@').next().unwrap_or("");
            return InboundEvent::Command(Command::from_name(name));
        }
        InboundEvent::Text(text.to_string())
    }
}

impl Command {
    /// Maps a command name (without the leading `/`) to a [`Command`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "start" => Command::Start,
            "help" => Command::Help,
            "about" => Command::About,
            "clear" => Command::Clear,
            other => Command::Unknown(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_reserved_commands() {
        assert_eq!(
            InboundEvent::from_text("/start"),
            InboundEvent::Command(Command::Start)
        );
        assert_eq!(
            InboundEvent::from_text("/help"),
            InboundEvent::Command(Command::Help)
        );
        assert_eq!(
            InboundEvent::from_text("/about"),
            InboundEvent::Command(Command::About)
        );
        assert_eq!(
            InboundEvent::from_text("/clear"),
            InboundEvent::Command(Command::Clear)
        );
    }

    #[test]
    fn test_from_text_strips_bot_suffix() {
        assert_eq!(
            InboundEvent::from_text("/start@my_bot"),
            InboundEvent::Command(Command::Start)
        );
        assert_eq!(
            InboundEvent::from_text("/clear@my_bot extra"),
            InboundEvent::Command(Command::Clear)
        );
    }

    #[test]
    fn test_from_text_exact_match_only() {
        // No prefix or partial matching.
        assert_eq!(
            InboundEvent::from_text("/star"),
            InboundEvent::Command(Command::Unknown("star".to_string()))
        );
        assert_eq!(
            InboundEvent::from_text("/starting"),
            InboundEvent::Command(Command::Unknown("starting".to_string()))
        );
        assert_eq!(
            InboundEvent::from_text("/START"),
            InboundEvent::Command(Command::Unknown("START".to_string()))
        );
    }

    #[test]
    fn test_from_text_plain_text() {
        assert_eq!(
            InboundEvent::from_text("hello bot"),
            InboundEvent::Text("hello bot".to_string())
        );
        // Slash mid-text is not a command.
        assert_eq!(
            InboundEvent::from_text("either/or"),
            InboundEvent::Text("either/or".to_string())
        );
    }

    #[test]
    fn test_from_text_empty_passes_through() {
        assert_eq!(InboundEvent::from_text(""), InboundEvent::Text(String::new()));
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut user = User {
            id: 1,
            username: Some("ada_l".to_string()),
            first_name: Some("Ada".to_string()),
            last_name: None,
        };
        assert_eq!(user.display_name(), "Ada");
        user.first_name = None;
        assert_eq!(user.display_name(), "ada_l");
        user.username = None;
        assert_eq!(user.display_name(), "there");
    }
}
