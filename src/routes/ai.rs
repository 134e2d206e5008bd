use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    error::AppError,
    message::{ChatMessage, ChatbotResponse, ProductQuery, RecommendationResponse, SearchResponse},
    services::{
        catalog::match_by_name,
        completion::CompletionParams,
        prompts::{recommendation_prompt, search_prompt, support_prompt},
    },
    state::SharedState,
};

pub async fn recommendations_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ProductQuery>, JsonRejection>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let Json(query) = payload?;

    let prompt = recommendation_prompt(&query.query, query.budget);
    let completion = state
        .completions
        .complete(&prompt, CompletionParams::RECOMMENDATION)
        .await
        .map_err(AppError::completion("Recommendation"))?;

    Ok(Json(RecommendationResponse {
        query: query.query,
        recommendations: completion.content,
        token_usage: completion.usage,
    }))
}

pub async fn chatbot_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatMessage>, JsonRejection>,
) -> Result<Json<ChatbotResponse>, AppError> {
    let Json(chat) = payload?;

    let prompt = support_prompt(&chat.message);
    let completion = state
        .completions
        .complete(&prompt, CompletionParams::SUPPORT)
        .await
        .map_err(AppError::completion("Chatbot"))?;

    Ok(Json(ChatbotResponse {
        user_message: chat.message,
        bot_response: completion.content,
        token_usage: completion.usage,
    }))
}

/// Local name matches and the model's ranking are returned side by side, unreconciled.
pub async fn search_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ProductQuery>, JsonRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Json(query) = payload?;

    let prompt = search_prompt(&query.query);
    let completion = state
        .completions
        .complete(&prompt, CompletionParams::SEARCH)
        .await
        .map_err(AppError::completion("Search"))?;

    let results = match_by_name(&query.query);
    tracing::debug!(query = %query.query, matches = results.len(), "local product match");

    Ok(Json(SearchResponse {
        query: query.query,
        results,
        ai_analysis: completion.content,
        token_usage: completion.usage,
    }))
}
