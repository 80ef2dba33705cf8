use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::{SpeechClient, TranscriptionClient, VisionClient};
use crate::domain::ConsultationId;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Serves the synthesized reply audio for one consultation.
#[tracing::instrument(skip(state))]
pub async fn consultation_audio_handler<T, V, S>(
    State(state): State<AppState<T, V, S>>,
    Path(id): Path<String>,
) -> impl IntoResponse
where
    T: TranscriptionClient + 'static,
    V: VisionClient + 'static,
    S: SpeechClient + 'static,
{
    let id = match id.parse::<Uuid>() {
        Ok(uuid) => ConsultationId::from_uuid(uuid),
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid consultation id: {}", id),
                }),
            )
                .into_response();
        }
    };

    let path = state.settings.server.audio_dir.join(id.audio_filename());

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            tracing::debug!(consultation_id = %id, bytes = bytes.len(), "Serving reply audio");
            ([(header::CONTENT_TYPE, "audio/mpeg")], bytes).into_response()
        }
        Err(e) => {
            tracing::warn!(consultation_id = %id, error = %e, "Reply audio not found");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("No audio for consultation {}", id),
                }),
            )
                .into_response()
        }
    }
}
