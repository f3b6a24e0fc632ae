/*
 * Responsibility
 * - GET /demo/version (固定レスポンス)
 * - 入力は読まない・副作用なし
 */
use axum::{Json, http::header, response::IntoResponse};

use crate::api::dto::ServiceInfo;
use crate::api::handlers::{API_VERSION, JSON_UTF8};

pub async fn version() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, JSON_UTF8)],
        Json(ServiceInfo {
            version: API_VERSION,
            message: "hello world",
        }),
    )
}
