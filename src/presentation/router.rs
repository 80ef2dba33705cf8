use axum::middleware;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{SpeechClient, TranscriptionClient, VisionClient};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    consult_handler, consultation_audio_handler, health_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<T, V, S>(state: AppState<T, V, S>) -> Router
where
    T: TranscriptionClient + 'static,
    V: VisionClient + 'static,
    S: SpeechClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(serve_index))
        .route("/health", get(health_handler))
        .route("/api/v1/consultations", post(consult_handler::<T, V, S>))
        .route(
            "/api/v1/consultations/{id}/audio",
            get(consultation_audio_handler::<T, V, S>),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

async fn serve_index() -> impl IntoResponse {
    Html(include_str!("../../static/index.html"))
}
