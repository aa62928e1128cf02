use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Request, Uri, header};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use tower::ServiceExt;

use super::*;
use crate::config::ServerConfig;

fn state_for(backend_url: &str) -> AppState {
    let config = ServerConfig { port: 0, backend_url: backend_url.to_owned(), backend_timeout_secs: 5 };
    AppState::new(&config).unwrap()
}

/// Minimal stand-in for the TrainFlow API on an ephemeral port.
async fn spawn_backend() -> String {
    let backend = Router::new()
        .route(
            "/api/v1/users/me",
            get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "Not authenticated" }))) }),
        )
        .route(
            "/api/v1/users/login",
            post(|headers: HeaderMap, body: String| async move {
                let cookie = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()).unwrap_or_default().to_owned();
                (
                    [(header::SET_COOKIE, "session=abc; HttpOnly")],
                    Json(json!({ "received": body, "cookie": cookie })),
                )
            }),
        )
        .route("/api/notifications", get(|uri: Uri| async move { uri.query().unwrap_or_default().to_owned() }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, backend).await.unwrap();
    });
    format!("http://{addr}")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = api_routes(state_for("http://127.0.0.1:9"));
    let response = app.oneshot(Request::get("/healthz").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn proxy_relays_backend_status_and_detail() {
    let app = api_routes(state_for(&spawn_backend().await));
    let response = app.oneshot(Request::get("/api/v1/users/me").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["detail"], "Not authenticated");
}

#[tokio::test]
async fn proxy_forwards_body_cookies_and_set_cookie() {
    let app = api_routes(state_for(&spawn_backend().await));
    let request = Request::post("/api/v1/users/login")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, "csrf=1")
        .body(Body::from(r#"{"email":"a@b.test","password":"pw"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(header::SET_COOKIE).unwrap(), "session=abc; HttpOnly");
    let body = body_json(response).await;
    assert_eq!(body["received"], r#"{"email":"a@b.test","password":"pw"}"#);
    assert_eq!(body["cookie"], "csrf=1");
}

#[tokio::test]
async fn proxy_keeps_query_string() {
    let app = api_routes(state_for(&spawn_backend().await));
    let response = app
        .oneshot(Request::get("/api/notifications?limit=5").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"limit=5");
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway_with_detail() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = api_routes(state_for(&format!("http://{addr}")));
    let response = app.oneshot(Request::get("/api/v1/users/me").body(Body::empty()).unwrap()).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let detail = body_json(response).await["detail"].as_str().unwrap_or_default().to_owned();
    assert!(detail.starts_with("backend unreachable"));
}
