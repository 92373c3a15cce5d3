use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use faq_core::{FaqEngine, MatchResult, FALLBACK_REPLY};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[derive(Deserialize)]
pub struct AskParams {
    pub q: String,
}

#[derive(Serialize)]
pub struct AskResponse {
    pub query: String,
    pub reply: String,
    pub matched: bool,
    pub score: Option<f32>,
    pub index: Option<usize>,
    pub took_s: f64,
}

#[derive(Serialize)]
pub struct FaqEntryResponse {
    pub index: usize,
    pub question: String,
    pub answer: String,
}

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<FaqEngine>,
}

pub fn build_app(engine: Arc<FaqEngine>) -> Router {
    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val.split(',').filter_map(|s| s.trim().parse().ok()).collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new()
                    .allow_origin(AllowOrigin::list(origins))
                    .allow_methods(Any)
                    .allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/ask", get(ask_handler))
        .route("/faq/:index", get(faq_handler))
        .with_state(AppState { engine })
        .layer(cors)
}

pub async fn ask_handler(
    State(state): State<AppState>,
    Query(params): Query<AskParams>,
) -> Json<AskResponse> {
    let start = std::time::Instant::now();
    let response = match state.engine.answer(&params.q) {
        MatchResult::Match { index, score, answer } => AskResponse {
            query: params.q,
            reply: answer,
            matched: true,
            score: Some(score),
            index: Some(index),
            took_s: start.elapsed().as_secs_f64(),
        },
        MatchResult::NoMatch => AskResponse {
            query: params.q,
            reply: FALLBACK_REPLY.to_string(),
            matched: false,
            score: None,
            index: None,
            took_s: start.elapsed().as_secs_f64(),
        },
    };
    Json(response)
}

pub async fn faq_handler(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<FaqEntryResponse>, StatusCode> {
    match state.engine.corpus().get(index) {
        Some(entry) => Ok(Json(FaqEntryResponse {
            index,
            question: entry.question.clone(),
            answer: entry.answer.clone(),
        })),
        None => Err(StatusCode::NOT_FOUND),
    }
}
