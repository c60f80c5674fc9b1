//! Integration tests for the Ollama client against a throwaway axum server
//! standing in for the backend.

use std::time::Duration;

use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use gateway_core::{BackendCallError, GatewaySettings, GenerateCall, ModelBackendPort};
use gateway_ollama::OllamaClient;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio_test::assert_ok;

/// Serve `app` on an ephemeral localhost port and return its base URL.
async fn spawn_backend(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client_for(base_url: &str) -> OllamaClient {
    let settings = GatewaySettings {
        probe_timeout_secs: 1,
        generate_timeout_secs: 1,
        ..GatewaySettings::with_backend_url(base_url)
    };
    OllamaClient::new(&settings).unwrap()
}

/// A base URL nothing is listening on.
async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[tokio::test]
async fn lists_models_in_backend_order() {
    let app = Router::new().route(
        "/api/tags",
        get(|| async {
            Json(json!({"models": [{"name": "llama3"}, {"name": "gemma2:2b", "size": 42}]}))
        }),
    );
    let client = client_for(&spawn_backend(app).await);

    let models = assert_ok!(client.list_models().await);
    let names: Vec<_> = models.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["llama3", "gemma2:2b"]);
    assert_eq!(models[1].extra["size"], 42);
}

#[tokio::test]
async fn inventory_error_status_is_reported() {
    let app = Router::new().route(
        "/api/tags",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "broken").into_response() }),
    );
    let client = client_for(&spawn_backend(app).await);

    let err = client.list_models().await.unwrap_err();
    assert_eq!(
        err,
        BackendCallError::Status {
            status: 500,
            body: "broken".to_string()
        }
    );
}

#[tokio::test]
async fn inventory_garbage_is_invalid_response() {
    let app = Router::new().route("/api/tags", get(|| async { "not json" }));
    let client = client_for(&spawn_backend(app).await);

    let err = client.list_models().await.unwrap_err();
    assert!(matches!(err, BackendCallError::InvalidResponse(_)));
}

#[tokio::test]
async fn closed_port_is_unreachable() {
    let client = client_for(&closed_port_url().await);

    let err = client.list_models().await.unwrap_err();
    assert!(matches!(err, BackendCallError::Unreachable(_)));

    let err = client
        .generate(&GenerateCall::new("gemma2:2b", "hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, BackendCallError::Unreachable(_)));
}

#[tokio::test]
async fn slow_inventory_times_out_as_unreachable() {
    let app = Router::new().route(
        "/api/tags",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!({"models": []}))
        }),
    );
    let client = client_for(&spawn_backend(app).await);

    let err = client.list_models().await.unwrap_err();
    assert!(matches!(err, BackendCallError::Unreachable(_)));
}

#[tokio::test]
async fn generate_posts_non_streaming_body_and_returns_raw_object() {
    let app = Router::new().route(
        "/api/generate",
        post(|Json(body): Json<Value>| async move {
            Json(json!({
                "model": body["model"],
                "response": format!("echo: {}", body["prompt"].as_str().unwrap_or_default()),
                "stream_was": body["stream"],
                "done": true
            }))
        }),
    );
    let client = client_for(&spawn_backend(app).await);

    let reply = client
        .generate(&GenerateCall::new("gemma2:2b", "Hello"))
        .await
        .unwrap();
    assert_eq!(reply["model"], "gemma2:2b");
    assert_eq!(reply["response"], "echo: Hello");
    assert_eq!(reply["stream_was"], false);
    assert_eq!(reply["done"], true);
}

#[tokio::test]
async fn generate_error_status_is_reported() {
    let app = Router::new().route(
        "/api/generate",
        post(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "model 'gemma2:2b' not found"})),
            )
        }),
    );
    let client = client_for(&spawn_backend(app).await);

    let err = client
        .generate(&GenerateCall::new("gemma2:2b", "Hello"))
        .await
        .unwrap_err();
    match err {
        BackendCallError::Status { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("not found"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn generate_non_object_reply_is_invalid() {
    let app = Router::new().route("/api/generate", post(|| async { Json(json!(["a", "b"])) }));
    let client = client_for(&spawn_backend(app).await);

    let err = client
        .generate(&GenerateCall::new("gemma2:2b", "Hello"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        BackendCallError::InvalidResponse("expected a JSON object, got an array".to_string())
    );
}

#[tokio::test]
async fn base_url_trailing_slash_is_ignored() {
    let app = Router::new().route("/api/tags", get(|| async { Json(json!({"models": []})) }));
    let base = spawn_backend(app).await;
    let client = client_for(&format!("{base}/"));

    assert_eq!(client.base_url(), base);
    assert!(client.list_models().await.unwrap().is_empty());
}
