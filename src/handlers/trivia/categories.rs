use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AppJson;
use crate::services::TriviaService;
use crate::state::AppContext;

#[derive(Debug, Deserialize)]
pub struct CategoryPayload {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// GET /api/categories
pub async fn list(State(ctx): State<AppContext>) -> Result<Json<Value>, ApiError> {
    let categories = TriviaService::new(ctx.pool.clone()).categories().await?;
    Ok(Json(json!({ "categories": categories })))
}

/// POST /api/categories
pub async fn create(
    State(ctx): State<AppContext>,
    AppJson(payload): AppJson<CategoryPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let kind = payload.kind.unwrap_or_default().trim().to_string();
    if kind.is_empty() {
        return Err(ApiError::missing_field("type"));
    }

    let category = TriviaService::new(ctx.pool.clone()).create_category(&kind).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "category": category })),
    ))
}

/// DELETE /api/categories/:id - questions in the category go with it
pub async fn destroy(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    TriviaService::new(ctx.pool.clone()).delete_category(id).await?;
    Ok(Json(json!({ "success": true, "message": "Category was deleted" })))
}
