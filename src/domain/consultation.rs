use std::fmt;
use std::path::PathBuf;

use uuid::Uuid;

/// Identifies one pipeline invocation and names its output audio resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConsultationId(Uuid);

impl ConsultationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Filename of the synthesized reply audio for this consultation.
    pub fn audio_filename(&self) -> String {
        format!("{}.mp3", self.0)
    }
}

impl Default for ConsultationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConsultationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of one successful pipeline run. Nothing persists beyond the
/// synthesized audio file at `audio_path`.
#[derive(Debug, Clone, PartialEq)]
pub struct Consultation {
    pub id: ConsultationId,
    pub transcript: String,
    pub analysis: String,
    pub audio_path: PathBuf,
}
