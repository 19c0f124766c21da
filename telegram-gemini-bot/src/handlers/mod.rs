pub mod chat;
pub mod command;

pub use chat::{ChatHandler, FALLBACK_REPLY};
pub use command::CommandResponder;
