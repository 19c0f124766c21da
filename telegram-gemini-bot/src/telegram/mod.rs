//! Telegram transport layer: the [`ChatTransport`](relay_core::ChatTransport)
//! adapter, teloxide-to-core event conversion, and the polling/webhook
//! runners.

pub mod event;
pub mod runner;
pub mod transport;

pub use event::to_inbound;
pub use runner::{run_polling, run_webhook};
pub use transport::TelegramTransport;
