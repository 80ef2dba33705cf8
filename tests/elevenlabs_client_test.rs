use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use medivoice::application::ports::{SpeechClient, SpeechError};
use medivoice::infrastructure::speech::ElevenLabsSpeechClient;
use medivoice::presentation::config::SpeechSettings;

async fn start_mock_server(
    response_status: u16,
    response_body: &'static [u8],
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/v1/text-to-speech/test-voice",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn settings(base_url: &str) -> SpeechSettings {
    SpeechSettings {
        api_key: "test-key".to_string(),
        base_url: base_url.to_string(),
        voice_id: "test-voice".to_string(),
        model: "test-tts".to_string(),
    }
}

#[tokio::test]
async fn given_audio_response_when_synthesizing_then_returns_raw_bytes() {
    let (base_url, shutdown_tx) = start_mock_server(200, b"mp3 audio bytes").await;

    let client = ElevenLabsSpeechClient::new(&settings(&base_url));
    let result = client.synthesize("You should rest the ankle.").await;

    assert_eq!(result.unwrap(), b"mp3 audio bytes");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unauthorized_response_when_synthesizing_then_auth_error() {
    let (base_url, shutdown_tx) = start_mock_server(401, b"{\"detail\":\"invalid key\"}").await;

    let client = ElevenLabsSpeechClient::new(&settings(&base_url));
    let result = client.synthesize("hello").await;

    assert!(matches!(result, Err(SpeechError::Unauthorized(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_service_rejection_when_synthesizing_then_rejection_error() {
    let (base_url, shutdown_tx) =
        start_mock_server(422, b"{\"detail\":\"text too long\"}").await;

    let client = ElevenLabsSpeechClient::new(&settings(&base_url));
    let result = client.synthesize("hello").await;

    match result {
        Err(SpeechError::Rejected(msg)) => assert!(msg.contains("text too long")),
        other => panic!("expected rejection, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_server_when_synthesizing_then_transport_error() {
    let client = ElevenLabsSpeechClient::new(&settings("http://127.0.0.1:1"));
    let result = client.synthesize("hello").await;

    assert!(matches!(result, Err(SpeechError::Transport(_))));
}
