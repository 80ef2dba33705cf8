use async_trait::async_trait;

use crate::domain::EncodedImage;

/// Hosted multimodal model: text prompt plus one image in, free text out.
#[async_trait]
pub trait VisionClient: Send + Sync {
    async fn analyze(&self, prompt: &str, image: &EncodedImage) -> Result<String, VisionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum VisionError {
    #[error("authentication rejected: {0}")]
    Unauthorized(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("request rejected by model: {0}")]
    Rejected(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
