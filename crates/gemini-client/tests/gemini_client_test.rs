//! Integration tests for GeminiClient against a mockito server.
//!
//! Covers: successful generation, non-200 status, malformed JSON, and empty
//! candidate lists. Does not call the real Gemini API.

use conversation::Turn;
use gemini_client::{GeminiClient, InferenceClient};

const PATH: &str = "/v1beta/models/gemini-2.5-flash-lite:generateContent";

fn client_for(server: &mockito::ServerGuard) -> GeminiClient {
    GeminiClient::new("test-key".to_string()).with_base_url(server.url())
}

#[tokio::test]
async fn test_generate_returns_candidate_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_header("x-goog-api-key", "test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hello from Gemini"}]}}]}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let reply = client.generate(&[Turn::user("hi")]).await.unwrap();

    assert_eq!(reply, "Hello from Gemini");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_concatenates_parts() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"part one "},{"text":"part two"}]}}]}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let reply = client.generate(&[Turn::user("hi")]).await.unwrap();

    assert_eq!(reply, "part one part two");
}

#[tokio::test]
async fn test_generate_sends_full_history_in_order() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "contents": [
                { "role": "user", "parts": [{ "text": "q1" }] },
                { "role": "model", "parts": [{ "text": "a1" }] },
                { "role": "user", "parts": [{ "text": "q2" }] },
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"a2"}]}}]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let turns = vec![Turn::user("q1"), Turn::model("a1"), Turn::user("q2")];
    let reply = client.generate(&turns).await.unwrap();

    assert_eq!(reply, "a2");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_non_success_status_is_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.generate(&[Turn::user("hi")]).await.unwrap_err();

    assert!(err.to_string().contains("500"), "got: {}", err);
}

#[tokio::test]
async fn test_generate_malformed_body_is_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json at all")
        .create_async()
        .await;

    let client = client_for(&server);
    assert!(client.generate(&[Turn::user("hi")]).await.is_err());
}

#[tokio::test]
async fn test_generate_no_candidates_is_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates":[]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.generate(&[Turn::user("hi")]).await.unwrap_err();

    assert!(err.to_string().contains("no candidates"), "got: {}", err);
}
