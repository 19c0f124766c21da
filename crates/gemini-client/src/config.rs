//! Inference configuration loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

/// Gemini config loaded from environment variables. A missing API key is a
/// fatal startup condition.
#[derive(Debug, Clone)]
pub struct EnvInferenceConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

impl EnvInferenceConfig {
    /// Load from environment variables.
    pub fn from_env() -> Result<Self> {
        let gemini_api_key = env::var("GEMINI_API_KEY").context("GEMINI_API_KEY not set")?;
        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| super::DEFAULT_MODEL.to_string());
        let gemini_base_url =
            env::var("GEMINI_BASE_URL").unwrap_or_else(|_| super::DEFAULT_BASE_URL.to_string());
        Ok(Self {
            gemini_api_key,
            gemini_model,
            gemini_base_url,
        })
    }
}
