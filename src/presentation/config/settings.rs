use std::path::PathBuf;

/// Process configuration, built once at startup from environment variables
/// and passed by reference into the client constructors.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub transcription: TranscriptionSettings,
    pub vision: VisionSettings,
    pub speech: SpeechSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Directory holding per-consultation reply audio files.
    pub audio_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct TranscriptionSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct VisionSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct SpeechSettings {
    pub api_key: String,
    pub base_url: String,
    pub voice_id: String,
    pub model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

impl Settings {
    /// Reads configuration from the environment. Both Groq-hosted models
    /// share one credential; speech synthesis has its own.
    pub fn from_env() -> Result<Self, SettingsError> {
        let groq_api_key = require_var("GROQ_API_KEY")?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| SettingsError::InvalidVar("SERVER_PORT", raw))?,
            Err(_) => 7860,
        };

        Ok(Self {
            server: ServerSettings {
                host: var_or("SERVER_HOST", "0.0.0.0"),
                port,
                audio_dir: PathBuf::from(var_or("AUDIO_OUTPUT_DIR", "consultation_audio")),
            },
            transcription: TranscriptionSettings {
                api_key: groq_api_key.clone(),
                base_url: var_or("GROQ_BASE_URL", "https://api.groq.com/openai/v1"),
                model: var_or("STT_MODEL", "whisper-large-v3"),
            },
            vision: VisionSettings {
                api_key: groq_api_key,
                base_url: var_or("GROQ_BASE_URL", "https://api.groq.com/openai/v1"),
                model: var_or("VISION_MODEL", "meta-llama/llama-4-scout-17b-16e-instruct"),
            },
            speech: SpeechSettings {
                api_key: require_var("ELEVENLABS_API_KEY")?,
                base_url: var_or("ELEVENLABS_BASE_URL", "https://api.elevenlabs.io"),
                voice_id: var_or("ELEVENLABS_VOICE_ID", "21m00Tcm4TlvDq8ikWAM"),
                model: var_or("TTS_MODEL", "eleven_turbo_v2"),
            },
        })
    }
}

fn require_var(name: &'static str) -> Result<String, SettingsError> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(SettingsError::MissingVar(name)),
    }
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
