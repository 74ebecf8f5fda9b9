//! Request middleware: access control and request logging.

use std::time::Instant;

use auth::Tier;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::rejection::ApiError;
use crate::state::AppState;

/// Gate a route behind `tier`.
///
/// The token is verified once here and its claims are inserted into the
/// request extensions, where handlers pick them up with `Extension<Claims>`.
pub async fn authorize(
    State((state, tier)): State<(AppState, Tier)>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorization = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let claims = state.gate.decide(authorization, tier).into_result()?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Log each request and how long it took.
pub async fn request_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    tracing::info!("{} {} called", method, uri);

    let start = Instant::now();
    let response = next.run(req).await;

    tracing::info!(
        "{} {} executed in {:?} ({})",
        method,
        uri,
        start.elapsed(),
        response.status()
    );
    response
}
