use std::sync::Arc;

use auth::Authenticator;
use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;

/// Access gate for protected routes.
///
/// The raw Authorization header value is the token — no `Bearer ` prefix
/// handling, per this service's contract. Every request is judged
/// independently; nothing is cached across requests.
pub async fn require_token(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::TokenRequired.into_response())?;

    let token = header
        .to_str()
        .map_err(|_| ApiError::TokenInvalid.into_response())?;

    let claims = authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "token validation failed");
        ApiError::TokenInvalid.into_response()
    })?;

    // Decoded claims ride along for downstream handlers.
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
