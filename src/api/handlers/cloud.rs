/*
 * Responsibility
 * - GET /cloud/value (固定レスポンス)
 * - demo::version と同形・payload のみ異なる
 */
use axum::{Json, http::header, response::IntoResponse};

use crate::api::dto::ServiceInfo;
use crate::api::handlers::{API_VERSION, JSON_UTF8};

pub async fn value() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, JSON_UTF8)],
        Json(ServiceInfo {
            version: API_VERSION,
            message: "hello cloud",
        }),
    )
}
