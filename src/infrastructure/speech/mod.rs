mod elevenlabs_client;

pub use elevenlabs_client::ElevenLabsSpeechClient;
