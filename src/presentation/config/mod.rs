mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ServerSettings, Settings, SettingsError, SpeechSettings, TranscriptionSettings, VisionSettings,
};
