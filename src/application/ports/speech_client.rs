use async_trait::async_trait;

/// Hosted text-to-speech service. Returns encoded audio bytes; persisting
/// them is the caller's concern.
#[async_trait]
pub trait SpeechClient: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("authentication rejected: {0}")]
    Unauthorized(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("request rejected by service: {0}")]
    Rejected(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
