//! Blocking JSON client for a generateContent-style model endpoint.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::Client;
use serde_json::json;
use url::Url;

use crate::error::AiError;
use crate::storage::AiConfig;

/// Client for a Gemini-style `models/{model}:generateContent` endpoint.
///
/// Owns a small runtime so sync callers (the CLI, tests) can use it
/// without standing up a reactor of their own. The API key is looked up
/// from `DAYBOARD_AI_KEY` first, then the config file.
pub struct GenerativeClient {
    http: Client,
    runtime: tokio::runtime::Runtime,
    endpoint: Url,
    model: String,
    api_key: String,
}

impl GenerativeClient {
    /// # Errors
    /// Fails when no API key is available, the endpoint is not a URL, or
    /// the runtime cannot be created.
    pub fn from_config(cfg: &AiConfig) -> Result<Self, AiError> {
        let api_key = std::env::var("DAYBOARD_AI_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .or_else(|| cfg.api_key.clone().filter(|key| !key.is_empty()))
            .ok_or(AiError::MissingApiKey)?;

        let endpoint =
            Url::parse(&cfg.endpoint).map_err(|e| AiError::InvalidEndpoint(e.to_string()))?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| AiError::Runtime(e.to_string()))?;

        Ok(Self {
            http: Client::new(),
            runtime,
            endpoint,
            model: cfg.model.clone(),
            api_key,
        })
    }

    /// A plain text part for a request body.
    pub fn text_part(text: &str) -> serde_json::Value {
        json!({ "text": text })
    }

    /// An inline image part (base64 payload plus MIME type).
    pub fn image_part(mime: &str, bytes: &[u8]) -> serde_json::Value {
        json!({
            "inline_data": {
                "mime_type": mime,
                "data": BASE64.encode(bytes),
            }
        })
    }

    /// POST one generateContent request and return the first candidate's
    /// text, which the prompt contract requires to be strict JSON.
    ///
    /// # Errors
    /// Transport failures, non-success statuses, and responses without a
    /// text part all map to [`AiError`].
    pub fn generate(&self, parts: Vec<serde_json::Value>) -> Result<String, AiError> {
        let mut url = self
            .endpoint
            .join(&format!("v1beta/models/{}:generateContent", self.model))
            .map_err(|e| AiError::InvalidEndpoint(e.to_string()))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);

        let body = json!({
            "contents": [{ "parts": parts }],
            "generationConfig": { "response_mime_type": "application/json" },
        });

        let response = self
            .runtime
            .block_on(self.http.post(url).json(&body).send())
            .map_err(|e| AiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AiError::Status(response.status().as_u16()));
        }

        let payload: serde_json::Value = self
            .runtime
            .block_on(response.json())
            .map_err(|e| AiError::Transport(e.to_string()))?;

        payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| AiError::Malformed("no text part in first candidate".into()))
    }
}
