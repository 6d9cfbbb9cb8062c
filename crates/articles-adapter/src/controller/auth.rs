//! Bearer-token gate for mutating routes

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use super::error::ApiError;
use super::ApiToken;

/// Reject the request with 403 unless it carries `Authorization: Bearer <token>`
/// with the configured token. The scheme name is case-insensitive.
pub async fn require_bearer(
    State(token): State<ApiToken>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| ApiError::Forbidden("missing bearer token".to_string()))?;

    let value = header
        .to_str()
        .map_err(|_| ApiError::Forbidden("malformed authorization header".to_string()))?;

    let candidate = match value.split_once(' ') {
        Some((scheme, candidate)) if scheme.eq_ignore_ascii_case("bearer") => candidate.trim(),
        _ => return Err(ApiError::Forbidden("missing bearer token".to_string())),
    };

    if !token.matches(candidate) {
        tracing::warn!("rejected request with invalid bearer token");
        return Err(ApiError::Forbidden("invalid bearer token".to_string()));
    }

    Ok(next.run(request).await)
}
