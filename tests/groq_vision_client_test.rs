use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use medivoice::application::ports::{VisionClient, VisionError};
use medivoice::domain::{EncodedImage, ImageFormat};
use medivoice::infrastructure::media::encode_bytes;
use medivoice::infrastructure::vision::GroqVisionClient;
use medivoice::presentation::config::VisionSettings;

async fn start_mock_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/chat/completions",
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

fn settings(base_url: &str) -> VisionSettings {
    VisionSettings {
        api_key: "test-key".to_string(),
        base_url: base_url.to_string(),
        model: "test-vision".to_string(),
    }
}

fn test_image() -> EncodedImage {
    encode_bytes(ImageFormat::Jpeg, b"jpeg bytes")
}

#[tokio::test]
async fn given_completion_response_when_analyzing_then_returns_message_content() {
    let body = r#"{"choices":[{"message":{"content":"Based on what I can see and your description, this is mild."}}]}"#;
    let (base_url, shutdown_tx) = start_mock_server(200, body).await;

    let client = GroqVisionClient::new(&settings(&base_url));
    let result = client.analyze("describe this", &test_image()).await;

    assert_eq!(
        result.unwrap(),
        "Based on what I can see and your description, this is mild."
    );
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_choices_when_analyzing_then_invalid_response_error() {
    let (base_url, shutdown_tx) = start_mock_server(200, r#"{"choices":[]}"#).await;

    let client = GroqVisionClient::new(&settings(&base_url));
    let result = client.analyze("describe this", &test_image()).await;

    assert!(matches!(result, Err(VisionError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_non_json_body_when_analyzing_then_invalid_response_error() {
    let (base_url, shutdown_tx) = start_mock_server(200, "<html>not json</html>").await;

    let client = GroqVisionClient::new(&settings(&base_url));
    let result = client.analyze("describe this", &test_image()).await;

    assert!(matches!(result, Err(VisionError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_forbidden_response_when_analyzing_then_auth_error() {
    let (base_url, shutdown_tx) = start_mock_server(403, r#"{"error":"forbidden"}"#).await;

    let client = GroqVisionClient::new(&settings(&base_url));
    let result = client.analyze("describe this", &test_image()).await;

    assert!(matches!(result, Err(VisionError::Unauthorized(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_oversized_prompt_rejection_when_analyzing_then_generic_rejection() {
    let (base_url, shutdown_tx) =
        start_mock_server(413, r#"{"error":"context length exceeded"}"#).await;

    let client = GroqVisionClient::new(&settings(&base_url));
    let result = client.analyze("very long prompt", &test_image()).await;

    match result {
        Err(VisionError::Rejected(msg)) => assert!(msg.contains("context length exceeded")),
        other => panic!("expected rejection, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}
