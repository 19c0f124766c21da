//! Converts teloxide updates into core types. Messages without a sender
//! (channel posts etc.) are skipped; non-text messages become
//! [`InboundEvent::Error`] so the router can log and drop them.

use relay_core::{Chat, InboundEvent, User};

fn to_core_user(user: &teloxide::types::User) -> User {
    User {
        id: user.id.0 as i64,
        username: user.username.clone(),
        first_name: Some(user.first_name.clone()),
        last_name: user.last_name.clone(),
    }
}

fn to_core_chat(chat: &teloxide::types::Chat) -> Chat {
    let chat_type = if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else {
        "channel"
    };
    Chat {
        id: chat.id.0,
        chat_type: chat_type.to_string(),
    }
}

/// Converts one teloxide message into (sender, chat, event). Returns `None`
/// when there is no sender to key a conversation on.
pub fn to_inbound(msg: &teloxide::types::Message) -> Option<(User, Chat, InboundEvent)> {
    let user = msg.from.as_ref().map(to_core_user)?;
    let chat = to_core_chat(&msg.chat);
    let event = match msg.text() {
        Some(text) => InboundEvent::from_text(text),
        None => InboundEvent::Error {
            cause: "non-text message".to_string(),
        },
    };
    Some((user, chat, event))
}
