mod consultation;
mod image;
mod prompt;

pub use consultation::{Consultation, ConsultationId};
pub use image::{EncodedImage, ImageFormat};
pub use prompt::{build_prompt, SYSTEM_PROMPT};
