//! Google Gemini API client.

use bon::Builder;
use serde::Deserialize;
use tracing::debug;

use crate::config::MealgenConfig;
use crate::error::MealgenError;

use super::http::shared_client;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// A single `generateContent` request.
#[derive(Debug, Clone, Builder)]
pub struct ContentRequest {
    /// User prompt text.
    #[builder(into)]
    pub prompt: String,
    /// System instruction (persona) sent alongside the prompt.
    #[builder(into)]
    pub system_instruction: Option<String>,
    /// Sampling temperature; omitted from the request when unset.
    pub temperature: Option<f64>,
    /// Structured-output schema. When set, the response MIME type is forced
    /// to `application/json` and the model must match the schema.
    pub response_schema: Option<serde_json::Value>,
}

/// Thin client over the Gemini `generateContent` endpoint.
///
/// Stateless apart from the credential and endpoint; a single instance may be
/// shared freely across tasks.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Override the API base URL (used by tests against a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build a client from a config, failing if no credential is set.
    pub fn from_config(config: &MealgenConfig) -> Result<Self, MealgenError> {
        let api_key = config.get_api_key().ok_or_else(|| {
            MealgenError::Authentication("Missing GEMINI_API_KEY".into())
        })?;
        let mut client = Self::new(api_key);
        if let Some(url) = config.get_base_url() {
            client.base_url = url;
        }
        Ok(client)
    }

    fn build_request_body(&self, request: &ContentRequest) -> serde_json::Value {
        let mut body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": request.prompt}],
            }],
        });
        let obj = body.as_object_mut().unwrap();

        if let Some(ref sys) = request.system_instruction {
            obj.insert(
                "systemInstruction".into(),
                serde_json::json!({"parts": [{"text": sys}]}),
            );
        }

        let mut gen_config = serde_json::Map::new();
        if let Some(temp) = request.temperature {
            gen_config.insert("temperature".into(), temp.into());
        }
        if let Some(ref schema) = request.response_schema {
            gen_config.insert("responseMimeType".into(), "application/json".into());
            gen_config.insert("responseSchema".into(), schema.clone());
        }
        if !gen_config.is_empty() {
            obj.insert("generationConfig".into(), serde_json::Value::Object(gen_config));
        }

        body
    }

    /// Call `generateContent` on the given model.
    pub async fn generate_content(
        &self,
        model: &str,
        request: &ContentRequest,
    ) -> Result<GenerateContentResponse, MealgenError> {
        let body = self.build_request_body(request);
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );

        debug!(model, "Gemini generate_content");

        let resp = shared_client().post(&url).json(&body).send().await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(super::http::status_to_error(status, &body_text));
        }

        Ok(resp.json().await?)
    }
}

// Gemini wire types

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Absent when generation was cut off before producing content
    /// (e.g. a safety block).
    #[serde(default)]
    pub content: Content,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub text: Option<String>,
    pub inline_data: Option<InlineData>,
}

/// Inline binary payload (base64) with its MIME type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, or `None` when the
    /// response carries no text.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let mut text = String::new();
        for part in &candidate.content.parts {
            if let Some(ref t) = part.text {
                text.push_str(t);
            }
        }
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// First inline-data part of the first candidate, in part order.
    pub fn inline_data(&self) -> Option<&InlineData> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|p| p.inline_data.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_from_json(json: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn text_concatenates_parts_of_first_candidate() {
        let resp = response_from_json(serde_json::json!({
            "candidates": [{
                "content": {"parts": [{"text": "Hello "}, {"text": "world"}]},
                "finishReason": "STOP"
            }]
        }));
        assert_eq!(resp.text().as_deref(), Some("Hello world"));
    }

    #[test]
    fn text_is_none_for_empty_candidates() {
        let resp = response_from_json(serde_json::json!({"candidates": []}));
        assert_eq!(resp.text(), None);
    }

    #[test]
    fn text_is_none_for_empty_text_parts() {
        let resp = response_from_json(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": ""}]}}]
        }));
        assert_eq!(resp.text(), None);
    }

    #[test]
    fn inline_data_skips_text_parts() {
        let resp = response_from_json(serde_json::json!({
            "candidates": [{
                "content": {"parts": [
                    {"text": "caption"},
                    {"inlineData": {"mimeType": "image/png", "data": "Zm9v"}},
                    {"inlineData": {"mimeType": "image/png", "data": "second"}}
                ]}
            }]
        }));
        let inline = resp.inline_data().unwrap();
        assert_eq!(inline.mime_type, "image/png");
        assert_eq!(inline.data, "Zm9v");
    }

    #[test]
    fn candidate_without_content_is_treated_as_empty() {
        let resp = response_from_json(serde_json::json!({
            "candidates": [{"finishReason": "SAFETY"}]
        }));
        assert_eq!(resp.text(), None);
        assert!(resp.inline_data().is_none());
    }

    #[test]
    fn inline_data_is_none_without_binary_parts() {
        let resp = response_from_json(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "just text"}]}}]
        }));
        assert!(resp.inline_data().is_none());
    }

    #[test]
    fn request_body_includes_generation_config_when_set() {
        let client = GeminiClient::new("k");
        let request = ContentRequest::builder()
            .prompt("suggest a meal")
            .system_instruction("You are a chef.")
            .temperature(1.2)
            .response_schema(serde_json::json!({"type": "OBJECT"}))
            .build();

        let body = client.build_request_body(&request);
        assert_eq!(
            body["contents"][0]["parts"][0]["text"],
            "suggest a meal"
        );
        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            "You are a chef."
        );
        assert_eq!(body["generationConfig"]["temperature"], 1.2);
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn request_body_omits_generation_config_for_defaults() {
        let client = GeminiClient::new("k");
        let request = ContentRequest::builder().prompt("a dish photo").build();

        let body = client.build_request_body(&request);
        assert!(body.get("generationConfig").is_none());
        assert!(body.get("systemInstruction").is_none());
    }
}
