use async_trait::async_trait;

/// Hosted speech-to-text service.
#[async_trait]
pub trait TranscriptionClient: Send + Sync {
    /// Transcribes a complete recording and returns the recognized text.
    async fn transcribe(&self, audio: &[u8], mime: &str) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("authentication rejected: {0}")]
    Unauthorized(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("audio rejected by model: {0}")]
    Rejected(String),
}
