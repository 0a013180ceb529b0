use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;
use vesla::domain::config::SiteConfig;
use vesla_server::Server;

async fn get(server: &Server, uri: &str) -> (StatusCode, String, String) {
    let response = server
        .router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn index_serves_prerendered_page() {
    let server = Server::builder().build();
    let (status, content_type, body) = get(&server, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Simple, Transparent Pricing"));
    assert!(!body.contains("Speed Sync"));
}

#[tokio::test]
async fn health_reports_up() {
    let server = Server::builder().build();
    let (status, content_type, body) = get(&server, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("application/json"));
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "up");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn page_uses_configured_erp_url() {
    let mut cfg = SiteConfig::default();
    cfg.erp.base_url = "https://erp.example.com".to_owned();

    let server = Server::builder().config(cfg).port(0).build();
    assert_eq!(server.state().config.server.port, 0);

    let (_, _, body) = get(&server, "/").await;
    assert!(body.contains("https://erp.example.com/login"));
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let server = Server::builder().build();
    let (status, _, _) = get(&server, "/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
