/// Well-known endpoints
/// Handles /.well-known/* endpoints for WebFinger discovery and DID
/// resolution
use crate::{
    alias::{
        resolver,
        webfinger::{did_body, discovery_document, WebFingerDocument},
    },
    api::serving_host,
    context::AppContext,
    error::{GatewayError, GatewayResult},
};
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;

/// Build well-known routes
pub fn routes() -> Router<AppContext> {
    Router::new()
        .route("/.well-known/webfinger", get(webfinger))
        .route("/.well-known/atproto-did", get(atproto_did))
}

#[derive(Debug, Deserialize)]
pub struct WebFingerParams {
    pub resource: Option<String>,
}

/// /.well-known/webfinger?resource=...
///
/// Resolves the queried identity against the handle alias table and returns
/// the discovery document for the canonical target.
pub async fn webfinger(
    State(ctx): State<AppContext>,
    Query(params): Query<WebFingerParams>,
) -> GatewayResult<Json<WebFingerDocument>> {
    let resource = params
        .resource
        .ok_or_else(|| GatewayError::MissingInput("resource query is required".to_string()))?;

    tracing::debug!(resource = %resource, "webfinger query");

    let target = resolver::resolve_resource(&ctx.aliases, &resource)?;

    Ok(Json(discovery_document(&target)))
}

/// /.well-known/atproto-did
///
/// Returns the aliased DID for the serving instance in plain text.
/// Used for atproto handle verification.
pub async fn atproto_did(
    State(ctx): State<AppContext>,
    headers: HeaderMap,
) -> GatewayResult<Response> {
    let instance = serving_host(&headers)?;

    let did = resolver::resolve_did(&ctx.aliases, &instance)?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain")
        .body(did_body(did).into())
        .map_err(|e| GatewayError::Internal(format!("Failed to build response: {}", e)))?;

    Ok(response)
}
