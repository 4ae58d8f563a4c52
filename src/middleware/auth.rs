use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth::{verify_token, AuthError, Claims};
use crate::error::ApiError;
use crate::state::AppContext;

/// Permission guard composed in front of a handler with
/// `axum::middleware::from_fn_with_state`. The checks short-circuit in
/// order: missing header, malformed header, bad token, expired token,
/// missing permission. The wrapped handler only runs once the claims have
/// been verified and injected as a request extension, so a rejected request
/// never touches the database.
pub async fn authorize(
    State(ctx): State<AppContext>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
    permission: &'static str,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers)?;
    let claims = verify_token(&token, &ctx.config.security.jwt_secret)?;

    if !claims.has_permission(permission) {
        return Err(AuthError::PermissionNotFound.into());
    }

    request.extensions_mut().insert::<Claims>(claims);
    Ok(next.run(request).await)
}

fn extract_bearer_token(headers: &HeaderMap) -> Result<String, AuthError> {
    let header = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingHeader)?;

    let value = header.to_str().map_err(|_| AuthError::InvalidHeader)?;
    let token = value.strip_prefix("Bearer ").ok_or(AuthError::InvalidHeader)?;
    if token.trim().is_empty() {
        return Err(AuthError::InvalidHeader);
    }

    Ok(token.to_string())
}
