mod speech_client;
mod transcription_client;
mod vision_client;

pub use speech_client::{SpeechClient, SpeechError};
pub use transcription_client::{TranscriptionClient, TranscriptionError};
pub use vision_client::{VisionClient, VisionError};
