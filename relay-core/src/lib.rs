//! # relay-core
//!
//! Core types and traits for the relay bot: [`User`], [`Chat`], the tagged
//! [`InboundEvent`], the [`ChatTransport`] seam, error taxonomy, and tracing
//! initialization. Transport-agnostic; the Telegram implementation lives in
//! the bot crate.

pub mod error;
pub mod logger;
pub mod transport;
pub mod types;

pub use error::{RelayError, Result};
pub use logger::init_tracing;
pub use transport::ChatTransport;
pub use types::{Chat, Command, InboundEvent, User};
