use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AppJson;
use crate::services::trivia::QuestionInput;
use crate::services::TriviaService;
use crate::state::AppContext;

use super::QUESTIONS_PER_PAGE;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuestionPayload {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

/// GET /api/questions?page=N - paginated question list
///
/// Pages slice the full insertion-ordered list; a page past the end is an
/// empty list, not an error.
pub async fn list(
    State(ctx): State<AppContext>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Value>, ApiError> {
    let service = TriviaService::new(ctx.pool.clone());
    let page = query.page.unwrap_or(1).max(1);

    let questions = service.questions_page(page, QUESTIONS_PER_PAGE).await?;
    let total_questions = service.count_questions().await?;
    let categories = service.categories().await?;

    let questions: Vec<Value> = questions.iter().map(|q| q.format()).collect();
    Ok(Json(json!({
        "questions": questions,
        "page": page,
        "total_questions": total_questions,
        "categories": categories,
        "current_category": "",
    })))
}

/// POST /api/questions - create a question
pub async fn create(
    State(ctx): State<AppContext>,
    AppJson(payload): AppJson<QuestionPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let question = payload.question.unwrap_or_default().trim().to_string();
    if question.is_empty() {
        return Err(ApiError::missing_field("question"));
    }
    let answer = payload.answer.unwrap_or_default().trim().to_string();
    if answer.is_empty() {
        return Err(ApiError::missing_field("answer"));
    }
    let category_id = match payload.category {
        Some(id) if id > 0 => id,
        _ => return Err(ApiError::missing_field("category")),
    };
    let difficulty = match payload.difficulty {
        Some(d) if d >= 1 => d,
        _ => return Err(ApiError::missing_field("difficulty")),
    };

    let service = TriviaService::new(ctx.pool.clone());
    if !service.category_exists(category_id).await? {
        return Err(ApiError::bad_request("category does not exist"));
    }

    let created = service
        .create_question(&QuestionInput { question, answer, category_id, difficulty })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Question was created",
            "question": created.format(),
        })),
    ))
}

/// DELETE /api/questions/:id/delete
pub async fn destroy(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    TriviaService::new(ctx.pool.clone()).delete_question(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Question was deleted successfully",
    })))
}

/// POST /api/search/questions?search=term - substring match on question text
pub async fn search(
    State(ctx): State<AppContext>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Value>, ApiError> {
    let term = query.search.unwrap_or_default();
    let questions = TriviaService::new(ctx.pool.clone()).search_questions(&term).await?;
    let questions: Vec<Value> = questions.iter().map(|q| q.format()).collect();
    Ok(Json(json!({ "success": true, "questions": questions })))
}

/// GET /api/categories/:id/questions
pub async fn by_category(
    State(ctx): State<AppContext>,
    Path(category_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let questions = TriviaService::new(ctx.pool.clone())
        .questions_in_category(category_id)
        .await?;
    let questions: Vec<Value> = questions.iter().map(|q| q.format()).collect();
    Ok(Json(json!({ "success": true, "questions": questions })))
}
