/*
 * Responsibility
 * - HTTP 横断の middleware を束ねる (http / cors / security headers)
 * - 適用は app::router() 側で行う
 */
pub mod cors;
pub mod http;
pub mod security_headers;
