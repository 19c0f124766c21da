//! # Inference client abstraction
//!
//! Defines the [`InferenceClient`] trait and the Gemini REST implementation.
//! Transport-agnostic; handlers depend on the trait and tests substitute a
//! scripted implementation.

use anyhow::Result;
use async_trait::async_trait;
use conversation::Turn;

mod config;
mod gemini;

pub use config::EnvInferenceConfig;
pub use gemini::{GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Inference client interface: generate a reply from an ordered sequence of
/// role-tagged turns. The turns are replayed verbatim as prompt context.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Returns the generated reply text, or an error on network failure,
    /// non-success status, or a malformed/empty response.
    async fn generate(&self, turns: &[Turn]) -> Result<String>;
}
