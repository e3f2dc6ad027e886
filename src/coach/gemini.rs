//! Gemini `generateContent` REST client.
//!
//! Docs: https://ai.google.dev/api/generate-content

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

use super::{CoachError, GenerationRequest, TextGenerator};
use crate::config::CoachConfig;

pub struct GeminiClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Build a client, or `NotConfigured` when there is no API key.
    pub fn new(config: &CoachConfig) -> Result<Self, CoachError> {
        let api_key = config.api_key.clone().ok_or(CoachError::NotConfigured)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                warn!(
                    "Failed to build HTTP client with custom config: {}. Using default.",
                    e
                );
                Client::default()
            });

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, CoachError> {
        let body = request_body(&request);
        debug!(
            model = %self.model,
            structured = request.response_schema.is_some(),
            "Coach request"
        );

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoachError::Status {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        Ok(parsed.text())
    }
}

/// JSON body for `models/{model}:generateContent`
fn request_body(request: &GenerationRequest) -> Value {
    let mut body = json!({
        "contents": [
            { "role": "user", "parts": [ { "text": request.prompt } ] }
        ]
    });

    if let Some(schema) = &request.response_schema {
        body["generationConfig"] = json!({
            "responseMimeType": "application/json",
            "responseSchema": schema,
        });
    }

    body
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate. Empty when the
    /// service sent none; callers decide what an empty answer means.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coach::learning_plan_schema;

    fn config(api_key: Option<&str>) -> CoachConfig {
        CoachConfig {
            api_key: api_key.map(str::to_string),
            endpoint: "https://example.invalid/v1beta/".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_requires_api_key() {
        assert!(matches!(
            GeminiClient::new(&config(None)),
            Err(CoachError::NotConfigured)
        ));
    }

    #[test]
    fn test_url_strips_trailing_slash() {
        let client = GeminiClient::new(&config(Some("k"))).unwrap();
        assert_eq!(
            client.url(),
            "https://example.invalid/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_request_body_plain_text() {
        let body = request_body(&GenerationRequest::text("hello"));
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn test_request_body_with_schema() {
        let body = request_body(&GenerationRequest::json("plan", learning_plan_schema()));
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(
            body["generationConfig"]["responseSchema"]["properties"]["planName"]["type"],
            "STRING"
        );
    }

    #[test]
    fn test_response_text_extraction() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [ { "text": "{\"planName\":" }, { "text": "\"X\"}" } ] } },
                { "content": { "parts": [ { "text": "ignored" } ] } }
            ]
        }))
        .unwrap();
        assert_eq!(resp.text(), "{\"planName\":\"X\"}");

        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.text(), "");

        let blocked: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [ { "finishReason": "SAFETY" } ] }))
                .unwrap();
        assert_eq!(blocked.text(), "");
    }

    #[test]
    fn test_unreachable_service_is_an_error() {
        let client = GeminiClient::new(&CoachConfig {
            api_key: Some("k".to_string()),
            endpoint: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
            ..Default::default()
        })
        .unwrap();

        let result = tokio_test::block_on(client.generate(GenerationRequest::text("hi")));
        assert!(matches!(result, Err(CoachError::Request(_))));
    }
}
