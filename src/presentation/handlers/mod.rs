mod consult;
mod consultation_audio;
mod health;

pub use consult::{consult_handler, ConsultationResponse};
pub use consultation_audio::consultation_audio_handler;
pub use health::health_handler;
