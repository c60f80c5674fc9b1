//! Shared fixtures for the router tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use gateway_axum::bootstrap::{AxumContext, CorsConfig};
use gateway_axum::routes::create_router;
use gateway_core::{
    BackendCallError, GatewaySettings, GenerateCall, ModelBackendPort, ModelDescriptor,
};
use http_body_util::BodyExt;
use serde_json::{Map, Value};
use tower::ServiceExt;

/// Backend whose answers are scripted by the test.
#[derive(Debug)]
pub struct StubBackend {
    pub inventory: Mutex<Result<Vec<ModelDescriptor>, BackendCallError>>,
    pub reply: Mutex<Result<Map<String, Value>, BackendCallError>>,
    pub calls: Mutex<Vec<GenerateCall>>,
}

impl StubBackend {
    pub fn with_models(names: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            inventory: Mutex::new(Ok(names.iter().copied().map(ModelDescriptor::named).collect())),
            reply: Mutex::new(Ok(Map::new())),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn unreachable() -> Arc<Self> {
        let backend = Self::with_models(&[]);
        *backend.inventory.lock().unwrap() =
            Err(BackendCallError::Unreachable("connection refused".to_string()));
        backend
    }

    pub fn reply_with(self: &Arc<Self>, reply: Value) -> Arc<Self> {
        let Value::Object(map) = reply else {
            panic!("stub reply must be a JSON object");
        };
        *self.reply.lock().unwrap() = Ok(map);
        Arc::clone(self)
    }

    pub fn fail_with(self: &Arc<Self>, err: BackendCallError) -> Arc<Self> {
        *self.reply.lock().unwrap() = Err(err);
        Arc::clone(self)
    }

    pub fn calls(&self) -> Vec<GenerateCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelBackendPort for StubBackend {
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, BackendCallError> {
        self.inventory.lock().unwrap().clone()
    }

    async fn generate(&self, call: &GenerateCall) -> Result<Map<String, Value>, BackendCallError> {
        self.calls.lock().unwrap().push(call.clone());
        self.reply.lock().unwrap().clone()
    }
}

/// Router over `backend` with default settings and no static directory.
pub fn app(backend: Arc<StubBackend>) -> Router {
    app_with_static(backend, None)
}

pub fn app_with_static(backend: Arc<StubBackend>, static_dir: Option<PathBuf>) -> Router {
    let ctx = AxumContext::from_backend(backend, &GatewaySettings::default(), static_dir);
    create_router(ctx, &CorsConfig::AllowAll)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
