//! Gemini implementation of [`InferenceClient`]: posts the conversation to
//! the `generateContent` endpoint and extracts the first candidate's text.

use anyhow::{bail, Result};
use async_trait::async_trait;
use conversation::{Role, Turn};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::InferenceClient;

/// Default model, overridable via config.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";

/// Default API base; tests point this at a mock server.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Model => "model",
    }
}

fn to_request(turns: &[Turn]) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: turns
            .iter()
            .map(|t| Content {
                role: role_name(t.role).to_string(),
                parts: vec![Part {
                    text: t.text.clone(),
                }],
            })
            .collect(),
    }
}

/// Gemini REST client. No timeout or retry; a hung call hangs only the
/// request that issued it.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl InferenceClient for GeminiClient {
    #[instrument(skip(self, turns))]
    async fn generate(&self, turns: &[Turn]) -> Result<String> {
        let request = to_request(turns);
        debug!(
            model = %self.model,
            turn_count = turns.len(),
            "Submitting conversation to Gemini"
        );

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Gemini API returned {}: {}", status, body);
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let candidate = match parsed.candidates.into_iter().next() {
            Some(c) => c,
            None => bail!("Gemini API returned no candidates"),
        };

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|p| p.text)
            .collect();
        if text.is_empty() {
            bail!("Gemini API returned an empty candidate");
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape_matches_wire_format() {
        let turns = vec![Turn::user("hi"), Turn::model("hello"), Turn::user("how?")];
        let request = to_request(&turns);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "contents": [
                    { "role": "user", "parts": [{ "text": "hi" }] },
                    { "role": "model", "parts": [{ "text": "hello" }] },
                    { "role": "user", "parts": [{ "text": "how?" }] },
                ]
            })
        );
    }

    #[test]
    fn test_endpoint_includes_model() {
        let client = GeminiClient::new("k".to_string())
            .with_base_url("http://localhost:1234/".to_string())
            .with_model("gemini-test".to_string());
        assert_eq!(
            client.endpoint(),
            "http://localhost:1234/v1beta/models/gemini-test:generateContent"
        );
    }
}
