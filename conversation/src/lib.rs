//! # conversation
//!
//! Bounded per-user conversation history. A [`Turn`] is one role-tagged
//! message; a user's conversation is the ordered sequence of turns replayed
//! verbatim to the inference call. [`ConversationStore`] keeps one capped
//! sequence per user for the lifetime of the process.

mod store;

use serde::{Deserialize, Serialize};

pub use store::{ConversationStore, DEFAULT_HISTORY_CAP};

/// Speaker role of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One message exchanged in a conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    /// A turn spoken by the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    /// A turn generated by the model.
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}
