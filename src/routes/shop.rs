use std::time::Duration;

use axum::{Json, extract::State};
use rand::Rng;

use crate::{
    message::{HealthResponse, ProductsResponse, StatusResponse},
    services::{catalog::products, metrics_manager::MetricsData},
    state::SharedState,
};

pub async fn root_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "E-commerce OpenLLMetry Demo".to_string(),
        status: "healthy".to_string(),
    })
}

pub async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: state.clock.now(),
    })
}

pub async fn products_handler(State(state): State<SharedState>) -> Json<ProductsResponse> {
    let delay = state.products_delay;
    // ThreadRng is !Send, so draw before awaiting.
    let millis = rand::thread_rng().gen_range(delay.min_ms..=delay.max_ms);
    if millis > 0 {
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }

    Json(ProductsResponse {
        products: products().to_vec(),
    })
}

pub async fn metrics_handler(State(state): State<SharedState>) -> Json<MetricsData> {
    Json(state.metrics.get_metrics())
}
