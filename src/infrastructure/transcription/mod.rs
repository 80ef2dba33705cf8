mod groq_whisper_client;

pub use groq_whisper_client::GroqWhisperClient;
