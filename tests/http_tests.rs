//! HTTP behavior tests.
//!
//! Router-level tests drive the axum router in-process via `oneshot`;
//! end-to-end tests bind a real listener on an ephemeral port and issue
//! requests with reqwest.

use std::net::SocketAddr;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use hostd::create_router;

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Bind an ephemeral port and serve the router on it.
async fn spawn_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, create_router()).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn health_returns_ok() {
    let response = create_router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "OK");
}

#[tokio::test]
async fn health_accepts_any_method() {
    for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE] {
        let response = create_router()
            .oneshot(
                Request::builder()
                    .method(method.clone())
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "method {method}");
        assert_eq!(body_string(response).await, "OK", "method {method}");
    }
}

#[tokio::test]
async fn root_returns_greeting_and_hostname_line() {
    let response = create_router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.starts_with("Hello from Go multi-stage build! 🚀\n"));
    assert!(body.contains("\nContainer hostname: "));
    assert!(body.ends_with('\n'));
}

#[tokio::test]
async fn root_accepts_any_method() {
    for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE] {
        let response = create_router()
            .oneshot(
                Request::builder()
                    .method(method.clone())
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "method {method}");
        let body = body_string(response).await;
        assert!(
            body.starts_with("Hello from Go multi-stage build! 🚀\n"),
            "method {method}"
        );
        assert!(body.contains("\nContainer hostname: "), "method {method}");
    }
}

#[tokio::test]
async fn unknown_path_is_404() {
    for path in ["/unknown", "/healthz", "/health/live", "/a/b"] {
        let response = create_router()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "path {path}");
    }
}

#[tokio::test]
async fn concurrent_health_requests_do_not_interfere() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..100 {
        let client = client.clone();
        tasks.spawn(async move {
            let response = client
                .get(format!("http://{addr}/health"))
                .send()
                .await
                .unwrap();
            (response.status(), response.text().await.unwrap())
        });
    }

    while let Some(result) = tasks.join_next().await {
        let (status, body) = result.unwrap();
        assert_eq!(status, reqwest::StatusCode::OK);
        assert_eq!(body, "OK");
    }
}

#[tokio::test]
async fn second_bind_on_same_port_fails_fast() {
    let addr = spawn_server().await;

    let second = tokio::net::TcpListener::bind(addr).await;
    assert!(second.is_err(), "second bind on {addr} should fail");

    // The running instance is unaffected.
    let response = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn end_to_end_scenario() {
    let addr = spawn_server().await;
    let base = format!("http://{addr}");

    let health = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(health.status(), reqwest::StatusCode::OK);
    assert_eq!(health.text().await.unwrap(), "OK");

    let root = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(root.status(), reqwest::StatusCode::OK);
    let body = root.text().await.unwrap();
    assert!(body.contains("Hello from Go multi-stage build!"));
    assert!(body.contains("Container hostname: "));

    let missing = reqwest::get(format!("{base}/unknown")).await.unwrap();
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
}
