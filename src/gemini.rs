use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use reqwest::Client;
use tracing::{info, error};

use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")] Http(String),
    #[error("invalid response: {0}")] InvalidResponse(String),
}

// The one upstream operation both pipelines share: prompt + schema in,
// raw JSON text out. Behind a trait so the services can be exercised with
// canned payloads.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate_structured(&self, prompt: &str, schema: &Value) -> Result<String, GeminiError>;
}

pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    // None when no credential is configured; the caller downgrades to mock
    // mode rather than constructing a client that can never succeed.
    pub fn from_config(config: &AppConfig) -> Option<Self> {
        config.api_key.as_ref().map(|key| Self {
            client: Client::new(),
            api_key: key.clone(),
            base_url: config.api_base.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate_structured(&self, prompt: &str, schema: &Value) -> Result<String, GeminiError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        info!("🔗 Making request to: {}", url.replace(&self.api_key, "***"));

        let request_body = json!({
            "contents": [{
                "parts": [{"text": prompt}]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema
            }
        });

        let response = self.client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GeminiError::Http(e.to_string()))?;

        let status = response.status();
        info!("📥 Response status: {}", status);

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!("❌ API Error response: {}", error_body);
            return Err(GeminiError::Http(format!("status={} body={}", status, error_body)));
        }

        let response_text = response.text().await
            .map_err(|e| GeminiError::Http(e.to_string()))?;

        let parsed: GeminiResponse = serde_json::from_str(&response_text)
            .map_err(|e| GeminiError::InvalidResponse(format!("parse error: {}", e)))?;

        match extract_first_text(&parsed) {
            Some(text) => {
                info!("✅ Extracted {} chars of structured output", text.len());
                Ok(text)
            }
            None => Err(GeminiError::InvalidResponse("no text content in response".into())),
        }
    }
}

// --- Response Parsing Helpers ---

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate { #[serde(default)] content: Content }

#[derive(Debug, Deserialize, Default)]
struct Content { #[serde(default)] parts: Vec<Part> }

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    Other(serde_json::Value),
}

fn extract_first_text(resp: &GeminiResponse) -> Option<String> {
    for c in &resp.candidates {
        for p in &c.content.parts {
            if let Part::Text { text } = p {
                return Some(text.clone());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(raw: &str) -> GeminiResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn first_text_part_wins() {
        let resp = parse(
            r#"{"candidates": [{"content": {"parts": [
                {"text": "{\"outfits\": []}"},
                {"text": "ignored"}
            ]}}]}"#,
        );
        assert_eq!(extract_first_text(&resp).unwrap(), "{\"outfits\": []}");
    }

    #[test]
    fn non_text_parts_are_skipped() {
        let resp = parse(
            r#"{"candidates": [{"content": {"parts": [
                {"functionCall": {"name": "noop"}},
                {"text": "payload"}
            ]}}]}"#,
        );
        assert_eq!(extract_first_text(&resp).unwrap(), "payload");
    }

    #[test]
    fn empty_candidates_yield_nothing() {
        assert!(extract_first_text(&parse(r#"{"candidates": []}"#)).is_none());
        assert!(extract_first_text(&parse(r#"{}"#)).is_none());
        assert!(extract_first_text(&parse(r#"{"candidates": [{"content": {}}]}"#)).is_none());
    }

    #[test]
    fn client_requires_a_credential() {
        let config = AppConfig {
            api_key: None,
            api_base: crate::config::DEFAULT_API_BASE.to_string(),
            model: crate::config::DEFAULT_MODEL.to_string(),
            port: 0,
        };
        assert!(GeminiClient::from_config(&config).is_none());

        let live = AppConfig { api_key: Some("key-123".to_string()), ..config };
        assert!(GeminiClient::from_config(&live).is_some());
    }
}
