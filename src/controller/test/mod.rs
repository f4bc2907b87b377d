use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DbErr;
use serde_json::{json, Value};
use test_utils::{
    builder::TestBuilder,
    fixture::catalogue::{seed_catalogue, SeededCatalogue},
};
use tower::ServiceExt;

use crate::{router, state::AppState};


/// Builds a full application router backed by a fresh in-memory database
/// seeded with the canonical catalogue.
async fn catalogue_app() -> Result<(Router, SeededCatalogue), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.unwrap();

    let seeded = seed_catalogue(&db).await?;

    Ok((router::app(AppState::new(db)), seeded))
}

/// Sends a GET request and returns the status and parsed JSON body.
async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

/// Sends a request with a JSON body and returns the status and parsed JSON
/// body.
async fn send_json(app: Router, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, method, uri, Some(body)).await
}

/// Sends a request whose body claims to be JSON but is forwarded verbatim,
/// for exercising parse failures.
async fn send_raw_json(
    app: Router,
    method: Method,
    uri: &str,
    body: &str,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();

    (status, json)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(value) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(request.body(body).unwrap()).await.unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();

    (status, json)
}
