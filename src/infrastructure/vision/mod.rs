mod groq_vision_client;

pub use groq_vision_client::GroqVisionClient;
