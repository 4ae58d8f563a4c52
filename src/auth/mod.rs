use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims carried by a bearer token. Tokens are issued by an external
/// service in production; the `token` subcommand and the test suite mint
/// them locally with the shared secret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub permissions: Vec<String>,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(sub: String, permissions: Vec<String>, ttl_hours: i64) -> Self {
        let now = Utc::now();
        Self {
            sub,
            permissions,
            iat: now.timestamp(),
            exp: (now + Duration::hours(ttl_hours)).timestamp(),
        }
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

/// Stages of the bearer-token check, in the order they short-circuit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authorization header is expected")]
    MissingHeader,

    #[error("Authorization header must be a Bearer token")]
    InvalidHeader,

    #[error("Unable to verify token")]
    InvalidToken,

    #[error("Token is expired")]
    TokenExpired,

    #[error("Permission not found.")]
    PermissionNotFound,

    #[error("Token signing failed")]
    TokenGeneration,
}

impl AuthError {
    /// Stable machine-readable reason code for the response body.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingHeader => "authorization_header_missing",
            AuthError::InvalidHeader => "invalid_header",
            AuthError::InvalidToken => "invalid_token",
            AuthError::TokenExpired => "token_expired",
            AuthError::PermissionNotFound => "permission_not_found",
            AuthError::TokenGeneration => "token_generation_failed",
        }
    }
}

pub fn issue_token(
    sub: &str,
    permissions: Vec<String>,
    secret: &str,
    ttl_hours: i64,
) -> Result<String, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::TokenGeneration);
    }
    let claims = Claims::new(sub.to_string(), permissions, ttl_hours);
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::TokenGeneration)
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::InvalidToken);
    }
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    decode::<Claims>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    #[test]
    fn round_trip_preserves_claims() {
        let token = issue_token("user-1", vec!["post:drinks".into()], SECRET, 1).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert!(claims.has_permission("post:drinks"));
        assert!(!claims.has_permission("delete:drinks"));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token("user-1", vec![], SECRET, 1).unwrap();
        assert_eq!(verify_token(&token, "other-secret"), Err(AuthError::InvalidToken));
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        // Negative TTL puts exp well past the default validation leeway.
        let token = issue_token("user-1", vec![], SECRET, -2).unwrap();
        assert_eq!(verify_token(&token, SECRET), Err(AuthError::TokenExpired));
    }

    #[test]
    fn garbage_token_is_invalid() {
        assert_eq!(verify_token("not-a-jwt", SECRET), Err(AuthError::InvalidToken));
    }
}
