use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use faq_core::{EngineOptions, FaqEngine};
use http_body_util::BodyExt;
use serde_json::Value;
use std::fs;
use std::sync::Arc;
use tempfile::tempdir;
use tower::ServiceExt;

fn build_tiny_app(dir: &std::path::Path) -> Router {
    let corpus = serde_json::json!([
        { "question": "What are your hours?", "answer": "9am-5pm" },
        { "question": "Where are you located?", "answer": "123 Main St" }
    ]);
    let path = dir.join("faqs.json");
    fs::write(&path, corpus.to_string()).unwrap();
    let engine = FaqEngine::from_path(&path, EngineOptions::default()).unwrap();
    faq_server::build_app(Arc::new(engine))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::get(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, json)
}

#[tokio::test]
async fn ask_returns_the_stored_answer() {
    let dir = tempdir().unwrap();
    let app = build_tiny_app(dir.path());

    let (status, json) = get(app, "/ask?q=What%20are%20your%20hours").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["matched"], Value::Bool(true));
    assert_eq!(json["reply"], "9am-5pm");
    assert_eq!(json["index"], 0);
    assert!(json["score"].as_f64().unwrap() > 0.2);
}

#[tokio::test]
async fn unknown_question_gets_the_fallback_reply() {
    let dir = tempdir().unwrap();
    let app = build_tiny_app(dir.path());

    let (status, json) = get(app, "/ask?q=penguin%20habitat%20migration").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["matched"], Value::Bool(false));
    assert_eq!(json["reply"], "Sorry, I couldn't understand your question.");
    assert_eq!(json["index"], Value::Null);
}

#[tokio::test]
async fn faq_endpoint_exposes_entries_by_index() {
    let dir = tempdir().unwrap();

    let app = build_tiny_app(dir.path());
    let (status, json) = get(app, "/faq/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["question"], "Where are you located?");
    assert_eq!(json["answer"], "123 Main St");

    let app = build_tiny_app(dir.path());
    let (status, _) = get(app, "/faq/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_is_ok() {
    let dir = tempdir().unwrap();
    let app = build_tiny_app(dir.path());
    let req = Request::get("/health").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
