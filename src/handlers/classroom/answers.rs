use axum::extract::{Extension, Path, State};
use serde::Deserialize;

use crate::auth::Claims;
use crate::database::models::Answer;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AppJson};
use crate::services::ClassroomService;
use crate::state::AppContext;

#[derive(Debug, Deserialize)]
pub struct AnswerPayload {
    pub answer: Option<String>,
    pub teacher_id: Option<String>,
}

/// GET /questions/:id/answers
pub async fn list(
    State(ctx): State<AppContext>,
    Path(question_id): Path<i64>,
) -> ApiResult<Vec<Answer>> {
    let service = ClassroomService::new(ctx.pool.clone());
    // 404 for a dangling question id, not an empty list.
    service.question(question_id).await?;
    let answers = service.answers_for(question_id).await?;
    Ok(ApiResponse::success(answers))
}

/// POST /questions/:id/answers
pub async fn create(
    State(ctx): State<AppContext>,
    Path(question_id): Path<i64>,
    Extension(claims): Extension<Claims>,
    AppJson(payload): AppJson<AnswerPayload>,
) -> ApiResult<Answer> {
    let answer = payload.answer.unwrap_or_default().trim().to_string();
    if answer.is_empty() {
        return Err(ApiError::missing_field("answer"));
    }
    // The authenticated subject stands in when no teacher id is supplied.
    let teacher_id = payload
        .teacher_id
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(claims.sub);

    let created = ClassroomService::new(ctx.pool.clone())
        .create_answer(question_id, &answer, &teacher_id)
        .await?;
    Ok(ApiResponse::created(created))
}
