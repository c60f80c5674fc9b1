//! In-memory backend used by the service tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::ModelDescriptor;
use crate::ports::{BackendCallError, GenerateCall, ModelBackendPort};

#[derive(Debug)]
pub struct FakeBackend {
    inventory: Mutex<Result<Vec<ModelDescriptor>, BackendCallError>>,
    reply: Mutex<Result<Map<String, Value>, BackendCallError>>,
    calls: Mutex<Vec<GenerateCall>>,
    inventory_calls: AtomicUsize,
}

impl FakeBackend {
    pub fn with_models(names: &[&str]) -> Self {
        Self {
            inventory: Mutex::new(Ok(names.iter().copied().map(ModelDescriptor::named).collect())),
            reply: Mutex::new(Ok(Map::new())),
            calls: Mutex::new(Vec::new()),
            inventory_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_inventory(err: BackendCallError) -> Self {
        let backend = Self::with_models(&[]);
        *backend.inventory.lock().unwrap() = Err(err);
        backend
    }

    pub fn set_models(&self, models: Vec<ModelDescriptor>) {
        *self.inventory.lock().unwrap() = Ok(models);
    }

    pub fn set_reply(&self, reply: Value) {
        let Value::Object(map) = reply else {
            panic!("fake reply must be a JSON object");
        };
        *self.reply.lock().unwrap() = Ok(map);
    }

    pub fn fail_generate(&self, err: BackendCallError) {
        *self.reply.lock().unwrap() = Err(err);
    }

    pub fn generate_calls(&self) -> Vec<GenerateCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn inventory_calls(&self) -> usize {
        self.inventory_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ModelBackendPort for FakeBackend {
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, BackendCallError> {
        self.inventory_calls.fetch_add(1, Ordering::SeqCst);
        self.inventory.lock().unwrap().clone()
    }

    async fn generate(&self, call: &GenerateCall) -> Result<Map<String, Value>, BackendCallError> {
        self.calls.lock().unwrap().push(call.clone());
        self.reply.lock().unwrap().clone()
    }
}
