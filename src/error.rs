// HTTP API error types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::auth::AuthError;
use crate::database::StoreError;

/// HTTP API error with the status codes and client-facing bodies shared by
/// all four apps. Bodies are always
/// `{"success": false, "error": <status>, "message": <string>}`, plus a
/// stable string `code` for auth failures and a `field` for field-level
/// validation failures.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),
    MissingField(String),
    Conflict(String),

    // 401 Unauthorized / 403 Forbidden
    Unauthorized { code: &'static str, message: String },
    Forbidden { code: &'static str, message: String },

    // 404 Not Found
    NotFound(String),

    // 422 Unprocessable Entity
    Unprocessable(String),

    // 500 Internal Server Error
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            // Duplicate unique fields answer 400 with a message, matching the
            // JSON apps' own error handlers.
            ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::MissingField(field) => format!("{} field is missing a value", field),
            ApiError::Conflict(msg) => msg.clone(),
            ApiError::Unauthorized { message, .. } => message.clone(),
            ApiError::Forbidden { message, .. } => message.clone(),
            ApiError::NotFound(msg) => msg.clone(),
            ApiError::Unprocessable(msg) => msg.clone(),
            ApiError::Internal(msg) => msg.clone(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        ApiError::MissingField(field.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    /// Convert to the JSON response body.
    pub fn to_json(&self) -> Value {
        let mut body = json!({
            "success": false,
            "error": self.status_code().as_u16(),
            "message": self.message(),
        });

        match self {
            ApiError::Unauthorized { code, .. } | ApiError::Forbidden { code, .. } => {
                body["code"] = json!(code);
            }
            ApiError::MissingField(field) => {
                body["field"] = json!(field);
            }
            _ => {}
        }

        body
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(msg) => ApiError::NotFound(msg),
            StoreError::AlreadyExists(msg) => ApiError::Conflict(msg),
            StoreError::Sqlx(sqlx_err) => {
                // Log the real error but return a generic message
                tracing::error!("sqlx error: {}", sqlx_err);
                ApiError::Internal("An error occurred while processing your request".to_string())
            }
            StoreError::Migration(e) => {
                tracing::error!("migration error: {}", e);
                ApiError::Internal("Service is being updated, please try again later".to_string())
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        let message = err.to_string();
        let code = err.code();
        match err {
            AuthError::PermissionNotFound => ApiError::Forbidden { code, message },
            _ => ApiError::Unauthorized { code, message },
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_the_field() {
        let err = ApiError::missing_field("answer");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        let body = err.to_json();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!(400));
        assert_eq!(body["field"], json!("answer"));
        assert_eq!(body["message"], json!("answer field is missing a value"));
    }

    #[test]
    fn auth_errors_carry_a_reason_code() {
        let err: ApiError = AuthError::MissingHeader.into();
        let body = err.to_json();
        assert_eq!(body["error"], json!(401));
        assert_eq!(body["code"], json!("authorization_header_missing"));

        let err: ApiError = AuthError::PermissionNotFound.into();
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(err.to_json()["code"], json!("permission_not_found"));
    }

    #[test]
    fn store_conflicts_map_to_bad_request() {
        let err: ApiError = StoreError::AlreadyExists("Drink already exists".into()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
