use std::sync::Arc;

use crate::application::ports::{SpeechClient, TranscriptionClient, VisionClient};
use crate::application::services::ConsultationService;
use crate::presentation::config::Settings;

pub struct AppState<T, V, S>
where
    T: TranscriptionClient,
    V: VisionClient,
    S: SpeechClient,
{
    pub consultation_service: Arc<ConsultationService<T, V, S>>,
    pub settings: Settings,
}

impl<T, V, S> Clone for AppState<T, V, S>
where
    T: TranscriptionClient,
    V: VisionClient,
    S: SpeechClient,
{
    fn clone(&self) -> Self {
        Self {
            consultation_service: Arc::clone(&self.consultation_service),
            settings: self.settings.clone(),
        }
    }
}
