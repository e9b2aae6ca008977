/// Profile redirect endpoint
///
/// Serves `GET /@handle` by resolving (handle, serving host) against the
/// handle alias table and issuing a permanent redirect to the canonical
/// profile. Axum path parameters span whole segments, so the route captures
/// the segment and the grammar parser decides whether it is an `@handle`
/// form.
use crate::{
    alias::{grammar, resolver, webfinger::profile_url, AliasKey},
    api::serving_host,
    context::AppContext,
    error::GatewayResult,
};
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Redirect,
    routing::get,
    Router,
};

/// Build profile routes
pub fn routes() -> Router<AppContext> {
    Router::new().route("/:segment", get(profile_redirect))
}

/// /@:handle
///
/// The path supplies only the handle; the instance comes from the Host
/// header, never from the path.
pub async fn profile_redirect(
    State(ctx): State<AppContext>,
    Path(segment): Path<String>,
    headers: HeaderMap,
) -> GatewayResult<Redirect> {
    let handle = grammar::parse_path_handle(&segment)?;
    let instance = serving_host(&headers)?;

    let key = AliasKey { handle, instance };
    let target = resolver::resolve_handle(&ctx.aliases, &key)?;

    Ok(Redirect::permanent(&profile_url(&target)))
}
