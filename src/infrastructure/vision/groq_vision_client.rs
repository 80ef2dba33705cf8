use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::application::ports::{VisionClient, VisionError};
use crate::domain::EncodedImage;
use crate::presentation::config::VisionSettings;

/// Vision-language analysis over Groq's OpenAI-compatible chat completions
/// API. The image travels inline as a base64 data URI.
pub struct GroqVisionClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GroqVisionClient {
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

    pub fn new(settings: &VisionSettings) -> Self {
        let client = Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            api_key: settings.api_key.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
        }
    }
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[async_trait]
impl VisionClient for GroqVisionClient {
    async fn analyze(&self, prompt: &str, image: &EncodedImage) -> Result<String, VisionError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": [
                        {
                            "type": "text",
                            "text": prompt
                        },
                        {
                            "type": "image_url",
                            "image_url": { "url": image.as_data_uri() }
                        }
                    ]
                }
            ],
            "max_tokens": 1024,
            "stream": false
        });

        let url = format!("{}/chat/completions", self.base_url);

        tracing::debug!(model = %self.model, "Sending prompt and image for analysis");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| VisionError::Transport(format!("request: {}", e)))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let text = response.text().await.unwrap_or_default();
            return Err(VisionError::Unauthorized(format!(
                "status {}: {}",
                status, text
            )));
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(VisionError::Rejected(format!("status {}: {}", status, text)));
        }

        let raw_bytes = response
            .bytes()
            .await
            .map_err(|e| VisionError::Transport(format!("body: {}", e)))?;

        let completion: ChatCompletion = serde_json::from_slice(&raw_bytes).map_err(|e| {
            let raw_text = String::from_utf8_lossy(&raw_bytes);
            tracing::error!(raw_response = %raw_text, "Failed to parse chat completion JSON");
            VisionError::InvalidResponse(format!("JSON parse error: {}", e))
        })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| VisionError::InvalidResponse("empty choices".to_string()))?;

        tracing::info!(chars = content.len(), "Image analysis completed");

        Ok(content)
    }
}
