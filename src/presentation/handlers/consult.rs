use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{SpeechClient, TranscriptionClient, VisionClient};
use crate::application::services::{AudioUpload, ImageUpload};
use crate::domain::ImageFormat;
use crate::infrastructure::observability::sanitize_transcript;
use crate::presentation::state::AppState;

/// The contract with the browser: both text panels are always populated,
/// either with pipeline output or with user-facing guidance. The audio link
/// is present only when the full pipeline succeeded.
#[derive(Serialize)]
pub struct ConsultationResponse {
    pub transcript: String,
    pub analysis: String,
    pub audio_url: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Accepts a multipart form with an `audio` recording and an `image` upload
/// and runs the consultation pipeline. Pipeline outcomes, including missing
/// inputs and remote failures, always answer 200 so the UI can render them
/// in place; only malformed requests get error status codes.
#[tracing::instrument(skip(state, multipart))]
pub async fn consult_handler<T, V, S>(
    State(state): State<AppState<T, V, S>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    T: TranscriptionClient + 'static,
    V: VisionClient + 'static,
    S: SpeechClient + 'static,
{
    let mut audio: Option<AudioUpload> = None;
    let mut image: Option<ImageUpload> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();

        match name.as_str() {
            "audio" => {
                let data = match field.bytes().await {
                    Ok(d) => d,
                    Err(e) => return bad_field(&name, e),
                };
                tracing::debug!(bytes = data.len(), content_type = %content_type, "Audio field received");
                audio = Some(AudioUpload {
                    bytes: data.to_vec(),
                    mime: if content_type.is_empty() {
                        "audio/webm".to_string()
                    } else {
                        content_type
                    },
                });
            }
            "image" => {
                let format = match ImageFormat::from_mime(&content_type) {
                    Some(f) => f,
                    None => {
                        tracing::warn!(content_type = %content_type, "Unsupported image type");
                        return (
                            StatusCode::UNSUPPORTED_MEDIA_TYPE,
                            Json(ErrorResponse {
                                error: format!("Unsupported image type: {}", content_type),
                            }),
                        )
                            .into_response();
                    }
                };
                let data = match field.bytes().await {
                    Ok(d) => d,
                    Err(e) => return bad_field(&name, e),
                };
                tracing::debug!(bytes = data.len(), content_type = %content_type, "Image field received");
                image = Some(ImageUpload {
                    bytes: data.to_vec(),
                    format,
                });
            }
            other => {
                tracing::debug!(field = %other, "Ignoring unknown multipart field");
            }
        }
    }

    match state.consultation_service.run(audio, image).await {
        Ok(consultation) => {
            tracing::info!(
                consultation_id = %consultation.id,
                transcript = %sanitize_transcript(&consultation.transcript),
                "Consultation complete"
            );
            (
                StatusCode::OK,
                Json(ConsultationResponse {
                    transcript: consultation.transcript,
                    analysis: consultation.analysis,
                    audio_url: Some(format!(
                        "/api/v1/consultations/{}/audio",
                        consultation.id
                    )),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Consultation pipeline failed");
            let (transcript, analysis) = e.user_facing();
            (
                StatusCode::OK,
                Json(ConsultationResponse {
                    transcript,
                    analysis,
                    audio_url: None,
                }),
            )
                .into_response()
        }
    }
}

fn bad_field(name: &str, e: axum::extract::multipart::MultipartError) -> axum::response::Response {
    tracing::error!(field = %name, error = %e, "Failed to read multipart field");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: format!("Failed to read field {}: {}", name, e),
        }),
    )
        .into_response()
}
