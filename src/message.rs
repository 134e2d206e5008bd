// src/message.rs
use serde::{Deserialize, Serialize};

use crate::services::catalog::Product;

#[derive(Debug, Deserialize)]
pub struct ChatMessage {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub query: String,
    #[serde(default)]
    pub budget: Option<f64>,
}

/// Token counters exactly as reported by the completion provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub query: String,
    pub recommendations: Option<String>,
    pub token_usage: TokenUsage,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatbotResponse {
    pub user_message: String,
    pub bot_response: Option<String>,
    pub token_usage: TokenUsage,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<Product>,
    pub ai_analysis: Option<String>,
    pub token_usage: TokenUsage,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
