/*
 * Responsibility
 * - URL 構造を定義
 * - /demo/version, /cloud/value を route
 * - 未登録 path は 404 / 未対応 method は 405 (Router default)
 */
use axum::{Router, routing::get};

use crate::api::handlers::{cloud, demo};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/demo/version", get(demo::version))
        .route("/cloud/value", get(cloud::value))
}
