pub mod media;
pub mod observability;
pub mod speech;
pub mod transcription;
pub mod vision;
