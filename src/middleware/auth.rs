use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;

use crate::{error::ApiError, AppState};

/// Bearer token authentication middleware for the mutating company routes.
/// The token is a single static secret from configuration; there are no users
/// or sessions behind it.
pub async fn require_auth(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let provided = extract_bearer_token(&headers)
        .ok_or_else(|| ApiError::authentication("missing bearer token"))?;

    if !constant_time_token_eq(provided, &state.settings.api_token) {
        tracing::warn!(
            method = %request.method(),
            uri = %request.uri(),
            "rejected request with invalid token"
        );
        return Err(ApiError::authentication("invalid token"));
    }

    Ok(next.run(request).await)
}

/// Pull the token out of `Authorization: Bearer <token>`. The scheme name is
/// matched case-insensitively, the token itself is taken verbatim.
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    Some(token)
}

/// Compare a presented token against the configured secret without leaking
/// the match length through timing.
fn constant_time_token_eq(provided: &str, expected: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}
