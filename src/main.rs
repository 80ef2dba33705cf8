use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use medivoice::application::services::ConsultationService;
use medivoice::infrastructure::observability::{init_tracing, TracingConfig};
use medivoice::infrastructure::speech::ElevenLabsSpeechClient;
use medivoice::infrastructure::transcription::GroqWhisperClient;
use medivoice::infrastructure::vision::GroqVisionClient;
use medivoice::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;

    init_tracing(TracingConfig::default(), settings.server.port);

    let transcription = Arc::new(GroqWhisperClient::new(&settings.transcription));
    let vision = Arc::new(GroqVisionClient::new(&settings.vision));
    let speech = Arc::new(ElevenLabsSpeechClient::new(&settings.speech));

    let consultation_service = Arc::new(ConsultationService::new(
        transcription,
        vision,
        speech,
        settings.server.audio_dir.clone(),
    ));

    let state = AppState {
        consultation_service,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
