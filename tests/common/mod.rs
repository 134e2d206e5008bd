#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{Router, body::Body, http::Request};
use storefront_ai::{
    config::ProductDelay,
    message::TokenUsage,
    routes::create_router,
    services::completion::{Completion, CompletionError, CompletionParams, CompletionProvider},
    state::AppState,
};

/// Answers every prompt with fixed text and records what it was asked.
#[derive(Default)]
pub struct StubProvider {
    pub calls: Mutex<Vec<(String, CompletionParams)>>,
}

impl StubProvider {
    pub fn last_prompt(&self) -> String {
        self.calls.lock().unwrap().last().map(|(p, _)| p.clone()).unwrap_or_default()
    }

    pub fn last_params(&self) -> Option<CompletionParams> {
        self.calls.lock().unwrap().last().map(|(_, p)| *p)
    }
}

pub const STUB_USAGE: TokenUsage = TokenUsage {
    prompt_tokens: 42,
    completion_tokens: 8,
    total_tokens: 50,
};

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(
        &self,
        prompt: &str,
        params: CompletionParams,
    ) -> Result<Completion, CompletionError> {
        self.calls.lock().unwrap().push((prompt.to_string(), params));
        Ok(Completion {
            content: Some("stubbed answer".to_string()),
            usage: STUB_USAGE,
        })
    }
}

/// Fails every call with an upstream API error.
pub struct FailingProvider;

pub const FAILURE_BODY: &str = "quota exceeded for key demo-key";

#[async_trait]
impl CompletionProvider for FailingProvider {
    async fn complete(
        &self,
        _prompt: &str,
        _params: CompletionParams,
    ) -> Result<Completion, CompletionError> {
        Err(CompletionError::Api {
            status: 429,
            body: FAILURE_BODY.to_string(),
        })
    }
}

pub fn app_with(provider: Arc<dyn CompletionProvider>) -> Router {
    let state = Arc::new(AppState::new(provider, ProductDelay::NONE));
    create_router().with_state(state)
}

pub fn stub_app() -> (Router, Arc<StubProvider>) {
    let stub = Arc::new(StubProvider::default());
    (app_with(stub.clone()), stub)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}
