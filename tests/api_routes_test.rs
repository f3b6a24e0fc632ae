use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use tower::ServiceExt;

use demo_api::{
    app,
    config::{AppEnv, Config},
    state::AppState,
};

const DEMO_BODY: &[u8] = br#"{"version":"1.0.0","message":"hello world"}"#;
const CLOUD_BODY: &[u8] = br#"{"version":"1.0.0","message":"hello cloud"}"#;
const JSON_UTF8: &str = "application/json;charset=UTF-8";

fn test_app() -> Router {
    let config = Config {
        addr: "127.0.0.1:0".parse().unwrap(),
        app_env: AppEnv::Development,
        cors_allowed_origins: Vec::new(),
    };
    app::router(AppState::new(), &config)
}

async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let content_type = res
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();

    (status, content_type, body.to_vec())
}

#[tokio::test]
async fn demo_version_returns_fixed_payload() {
    let (status, content_type, body) = send(test_app(), Method::GET, "/demo/version").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some(JSON_UTF8));
    assert_eq!(&body[..], DEMO_BODY);
}

#[tokio::test]
async fn cloud_value_returns_fixed_payload() {
    let (status, content_type, body) = send(test_app(), Method::GET, "/cloud/value").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some(JSON_UTF8));
    assert_eq!(&body[..], CLOUD_BODY);
}

#[tokio::test]
async fn query_parameters_are_ignored() {
    let (status, _, body) = send(test_app(), Method::GET, "/demo/version?foo=bar").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], DEMO_BODY);
}

#[tokio::test]
async fn repeated_requests_return_identical_output() {
    let app = test_app();

    let first = send(app.clone(), Method::GET, "/demo/version").await;
    let second = send(app.clone(), Method::GET, "/demo/version").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (status, _, _) = send(test_app(), Method::GET, "/unknown").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_get_method_is_rejected() {
    let (status, _, body) = send(test_app(), Method::POST, "/demo/version").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_ne!(&body[..], DEMO_BODY);
}

#[tokio::test]
async fn concurrent_requests_do_not_cross_talk() {
    let app = test_app();

    let (demo, cloud) = tokio::join!(
        send(app.clone(), Method::GET, "/demo/version"),
        send(app.clone(), Method::GET, "/cloud/value"),
    );

    assert_eq!(demo.0, StatusCode::OK);
    assert_eq!(&demo.2[..], DEMO_BODY);
    assert_eq!(cloud.0, StatusCode::OK);
    assert_eq!(&cloud.2[..], CLOUD_BODY);
}
