#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use caminio_config::Config;
use caminio_contracts::{FetchError, JsonSource};
use caminio_core::CaminioClient;
use caminio_model::Conditions;
use parking_lot::Mutex;
use serde_json::Value;

/// One recorded GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub path: String,
    pub query: Conditions,
}

/// In-memory `JsonSource` answering from fixed routes and recording calls.
#[derive(Debug, Default)]
pub struct StubSource {
    routes: Mutex<HashMap<String, Result<Value, FetchError>>>,
    calls: Mutex<Vec<Call>>,
}

impl StubSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, path: &str, body: Value) {
        self.routes.lock().insert(path.to_string(), Ok(body));
    }

    pub fn fail(&self, path: &str, status: u16) {
        self.routes.lock().insert(
            path.to_string(),
            Err(FetchError::Status {
                url: format!("https://camin.io/caminio/{path}"),
                status,
                body: "boom".to_string(),
            }),
        );
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn calls_to(&self, path: &str) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| call.path == path)
            .collect()
    }

    pub fn reset_calls(&self) {
        self.calls.lock().clear();
    }
}

#[async_trait]
impl JsonSource for StubSource {
    async fn get_json(&self, path: &str, query: &Conditions) -> Result<Value, FetchError> {
        self.calls.lock().push(Call {
            path: path.to_string(),
            query: query.clone(),
        });

        self.routes
            .lock()
            .get(path)
            .cloned()
            .unwrap_or_else(|| {
                Err(FetchError::Status {
                    url: format!("https://camin.io/caminio/{path}"),
                    status: 404,
                    body: "no route".to_string(),
                })
            })
    }
}

pub fn config(lang: &str) -> Config {
    Config::new("https://camin.io", "test-key")
        .expect("config")
        .with_lang(lang)
}

pub fn client(source: &Arc<StubSource>) -> CaminioClient {
    let source: Arc<dyn JsonSource> = source.clone();
    CaminioClient::with_source(&config("en"), source)
}
