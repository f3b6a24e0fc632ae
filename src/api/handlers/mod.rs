/*
 * Responsibility
 * - handler を束ねる
 * - 共通の定数 (API version / content type)
 */
pub mod cloud;
pub mod demo;

/// Fixed version string reported by every endpoint.
pub(crate) const API_VERSION: &str = "1.0.0";

/// `axum::Json` emits `application/json` without a charset parameter,
/// so the header is set explicitly on each response.
pub(crate) const JSON_UTF8: &str = "application/json;charset=UTF-8";
