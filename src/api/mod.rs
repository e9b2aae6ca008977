/// API routes and handlers
pub mod profile;
pub mod well_known;

use crate::context::AppContext;
use crate::error::{GatewayError, GatewayResult};
use axum::http::{header, HeaderMap};
use axum::Router;

/// Build API routes
pub fn routes() -> Router<AppContext> {
    Router::new()
        .merge(well_known::routes())
        .merge(profile::routes())
}

/// Extract the serving instance from the Host header.
///
/// A `:port` suffix is stripped; everything else is taken literally. An
/// absent host is a missing-input error, answered before the resolver runs.
pub fn serving_host(headers: &HeaderMap) -> GatewayResult<String> {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| GatewayError::MissingInput("host header is required".to_string()))?;

    let host = match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    };

    if host.is_empty() {
        return Err(GatewayError::MissingInput("host header is required".to_string()));
    }

    Ok(host.to_string())
}
