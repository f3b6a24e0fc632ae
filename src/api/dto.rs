/*
 * Responsibility
 * - 固定レスポンスの DTO
 * - field の宣言順 = wire format (version → message)
 */
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub version: &'static str,
    pub message: &'static str,
}
