use std::io;
use std::path::Path;

use crate::domain::{EncodedImage, ImageFormat};

/// Encodes raw image bytes into a `data:` URI.
pub fn encode_bytes(format: ImageFormat, bytes: &[u8]) -> EncodedImage {
    EncodedImage::from_bytes(format, bytes)
}

/// Reads an image file and encodes it. The format is supplied by the caller;
/// the file contents are never sniffed.
pub fn encode_file(path: &Path, format: ImageFormat) -> io::Result<EncodedImage> {
    let bytes = std::fs::read(path)?;
    Ok(encode_bytes(format, &bytes))
}
