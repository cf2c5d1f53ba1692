use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::state::AppState;

/// JWT validation middleware.
///
/// Requires `Authorization: Bearer <token>` and verifies it against the
/// user pool's key set. On success, inserts [`AuthUser`] into request
/// extensions. Requests pass through untouched when no verifier is
/// configured.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(verifier) = state.verifier.as_deref() else {
        return Ok(next.run(req).await);
    };

    let token = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("missing bearer token".to_string()))?;

    let claims = verifier.verify(token)?;
    req.extensions_mut().insert(AuthUser {
        sub: claims.sub,
        email: claims.email,
    });

    Ok(next.run(req).await)
}

/// Authenticated user extracted from JWT claims.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub sub: String,
    pub email: Option<String>,
}
