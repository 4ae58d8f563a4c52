use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::ClassroomQuestion;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AppJson};
use crate::services::ClassroomService;
use crate::state::AppContext;

#[derive(Debug, Deserialize)]
pub struct QuestionPayload {
    pub question: Option<String>,
    pub teacher_id: Option<String>,
}

/// GET /questions
pub async fn list(State(ctx): State<AppContext>) -> ApiResult<Vec<ClassroomQuestion>> {
    let questions = ClassroomService::new(ctx.pool.clone()).questions().await?;
    Ok(ApiResponse::success(questions))
}

/// GET /questions/:id
pub async fn show(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> ApiResult<ClassroomQuestion> {
    let question = ClassroomService::new(ctx.pool.clone()).question(id).await?;
    Ok(ApiResponse::success(question))
}

/// POST /questions
pub async fn create(
    State(ctx): State<AppContext>,
    AppJson(payload): AppJson<QuestionPayload>,
) -> ApiResult<ClassroomQuestion> {
    let question = payload.question.unwrap_or_default().trim().to_string();
    if question.is_empty() {
        return Err(ApiError::missing_field("question"));
    }
    let teacher_id = payload.teacher_id.unwrap_or_default().trim().to_string();
    if teacher_id.is_empty() {
        return Err(ApiError::missing_field("teacher_id"));
    }

    let created = ClassroomService::new(ctx.pool.clone())
        .create_question(&question, &teacher_id)
        .await?;
    Ok(ApiResponse::created(created))
}

/// DELETE /questions/:id
pub async fn destroy(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    ClassroomService::new(ctx.pool.clone()).delete_question(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Question has been deleted successfully",
    })))
}
