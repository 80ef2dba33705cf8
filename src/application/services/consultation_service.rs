use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{
    SpeechClient, SpeechError, TranscriptionClient, TranscriptionError, VisionClient, VisionError,
};
use crate::domain::{build_prompt, Consultation, ConsultationId, EncodedImage, ImageFormat};

/// A recorded voice note as received from the browser.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    pub bytes: Vec<u8>,
    pub mime: String,
}

/// An uploaded medical image as received from the browser.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub format: ImageFormat,
}

/// Sequences the three hosted calls into one consultation: transcribe the
/// voice note, analyze transcript plus image, speak the reply. Each stage
/// depends on the previous one's output, so the chain is strictly ordered
/// and stops at the first failure.
pub struct ConsultationService<T, V, S>
where
    T: TranscriptionClient,
    V: VisionClient,
    S: SpeechClient,
{
    transcription: Arc<T>,
    vision: Arc<V>,
    speech: Arc<S>,
    audio_dir: PathBuf,
}

impl<T, V, S> ConsultationService<T, V, S>
where
    T: TranscriptionClient,
    V: VisionClient,
    S: SpeechClient,
{
    pub fn new(transcription: Arc<T>, vision: Arc<V>, speech: Arc<S>, audio_dir: PathBuf) -> Self {
        Self {
            transcription,
            vision,
            speech,
            audio_dir,
        }
    }

    /// Runs the full pipeline. Audio is checked before image; either missing
    /// input short-circuits before any remote call. The reply audio is
    /// written under a per-consultation filename so concurrent invocations
    /// never overwrite each other.
    #[tracing::instrument(skip(self, audio, image))]
    pub async fn run(
        &self,
        audio: Option<AudioUpload>,
        image: Option<ImageUpload>,
    ) -> Result<Consultation, ConsultationError> {
        let audio = audio
            .filter(|a| !a.bytes.is_empty())
            .ok_or(ConsultationError::MissingAudio)?;
        let image = image
            .filter(|i| !i.bytes.is_empty())
            .ok_or(ConsultationError::MissingImage)?;

        tracing::debug!(
            audio_bytes = audio.bytes.len(),
            image_bytes = image.bytes.len(),
            "Starting consultation pipeline"
        );

        let transcript = self
            .transcription
            .transcribe(&audio.bytes, &audio.mime)
            .await
            .map_err(ConsultationError::Transcription)?;

        tracing::info!(chars = transcript.len(), "Transcription complete");

        let prompt = build_prompt(&transcript);
        let encoded = EncodedImage::from_bytes(image.format, &image.bytes);

        let analysis = self
            .vision
            .analyze(&prompt, &encoded)
            .await
            .map_err(ConsultationError::Analysis)?;

        tracing::info!(chars = analysis.len(), "Image analysis complete");

        let reply_audio = self
            .speech
            .synthesize(&analysis)
            .await
            .map_err(ConsultationError::Synthesis)?;

        let id = ConsultationId::new();
        let audio_path = self.audio_dir.join(id.audio_filename());

        tokio::fs::create_dir_all(&self.audio_dir)
            .await
            .map_err(|e| ConsultationError::Synthesis(SpeechError::Io(e)))?;
        tokio::fs::write(&audio_path, &reply_audio)
            .await
            .map_err(|e| ConsultationError::Synthesis(SpeechError::Io(e)))?;

        tracing::info!(consultation_id = %id, audio_bytes = reply_audio.len(), "Reply audio written");

        Ok(Consultation {
            id,
            transcript,
            analysis,
            audio_path,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConsultationError {
    #[error("no audio provided")]
    MissingAudio,
    #[error("no image provided")]
    MissingImage,
    #[error("transcription: {0}")]
    Transcription(TranscriptionError),
    #[error("analysis: {0}")]
    Analysis(VisionError),
    #[error("synthesis: {0}")]
    Synthesis(SpeechError),
}

impl ConsultationError {
    /// Maps a failure to the pair of strings shown in the transcript and
    /// analysis panels. Remote failures collapse to one generic message;
    /// missing inputs get field-specific guidance.
    pub fn user_facing(&self) -> (String, String) {
        match self {
            Self::MissingAudio => (
                "No audio provided".to_string(),
                "Please record your voice describing your symptoms".to_string(),
            ),
            Self::MissingImage => (
                "No image provided".to_string(),
                "Please upload a medical image for analysis".to_string(),
            ),
            Self::Transcription(e) => generic_failure(e),
            Self::Analysis(e) => generic_failure(e),
            Self::Synthesis(e) => generic_failure(e),
        }
    }
}

fn generic_failure(description: &dyn std::fmt::Display) -> (String, String) {
    (
        format!("Error: {description}"),
        "Please check your inputs and try again".to_string(),
    )
}
