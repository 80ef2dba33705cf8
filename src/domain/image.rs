use base64::{engine::general_purpose, Engine as _};

/// Image formats accepted for analysis. The encoder never sniffs bytes; the
/// caller supplies the format from the upload's content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Webp,
}

impl ImageFormat {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "image/webp" => Some(Self::Webp),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Webp => "image/webp",
        }
    }
}

/// A transport-safe `data:` URI carrying base64 image bytes, ready to embed
/// in a chat-completions message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage(String);

impl EncodedImage {
    /// Encodes raw image bytes as-is. No resizing, compression or content
    /// validation happens here.
    pub fn from_bytes(format: ImageFormat, bytes: &[u8]) -> Self {
        let b64 = general_purpose::STANDARD.encode(bytes);
        Self(format!("data:{};base64,{}", format.as_mime(), b64))
    }

    pub fn from_data_uri(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_data_uri(&self) -> &str {
        &self.0
    }
}
