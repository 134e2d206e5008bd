// src/routes/mod.rs
pub mod ai;
pub mod shop;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use ai::{chatbot_handler, recommendations_handler, search_handler};
use shop::{health_handler, metrics_handler, products_handler, root_handler};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/products", get(products_handler))
        .route("/metrics", get(metrics_handler))
        .route("/recommendations", post(recommendations_handler))
        .route("/chatbot", post(chatbot_handler))
        .route("/search", post(search_handler))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
