use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::application::ports::{SpeechClient, SpeechError};
use crate::presentation::config::SpeechSettings;

/// Text-to-speech over the ElevenLabs HTTP API. Returns MP3 bytes.
pub struct ElevenLabsSpeechClient {
    client: Client,
    api_key: String,
    base_url: String,
    voice_id: String,
    model: String,
}

impl ElevenLabsSpeechClient {
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

    pub fn new(settings: &SpeechSettings) -> Self {
        let client = Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            api_key: settings.api_key.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            voice_id: settings.voice_id.clone(),
            model: settings.model.clone(),
        }
    }
}

#[async_trait]
impl SpeechClient for ElevenLabsSpeechClient {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        let url = format!("{}/v1/text-to-speech/{}", self.base_url, self.voice_id);

        let body = serde_json::json!({
            "text": text,
            "model_id": self.model,
            "voice_settings": {
                "stability": 0.5,
                "similarity_boost": 0.5
            }
        });

        tracing::debug!(voice_id = %self.voice_id, chars = text.len(), "Sending text for synthesis");

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .header("Accept", "audio/mpeg")
            .json(&body)
            .send()
            .await
            .map_err(|e| SpeechError::Transport(format!("request: {}", e)))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let text = response.text().await.unwrap_or_default();
            return Err(SpeechError::Unauthorized(format!(
                "status {}: {}",
                status, text
            )));
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(SpeechError::Rejected(format!("status {}: {}", status, text)));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SpeechError::Transport(format!("body: {}", e)))?;

        tracing::info!(bytes = audio.len(), "Speech synthesis completed");

        Ok(audio.to_vec())
    }
}
