// src/state.rs
use std::sync::Arc;

use crate::config::{Config, ProductDelay};
use crate::services::clock::HealthClock;
use crate::services::completion::{CompletionError, CompletionProvider, OpenAiClient};
use crate::services::metrics_manager::MetricsManager;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub completions: Arc<dyn CompletionProvider>,
    pub metrics: MetricsManager,
    pub clock: HealthClock,
    pub products_delay: ProductDelay,
}

impl AppState {
    pub fn new(completions: Arc<dyn CompletionProvider>, products_delay: ProductDelay) -> Self {
        Self {
            completions,
            metrics: MetricsManager::new(),
            clock: HealthClock::new(),
            products_delay,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, CompletionError> {
        let client = OpenAiClient::new(
            config.openai_api_key.clone(),
            config.openai_base_url.clone(),
            config.openai_model.clone(),
            config.openai_timeout,
        )?;
        Ok(Self::new(Arc::new(client), config.products_delay))
    }
}
