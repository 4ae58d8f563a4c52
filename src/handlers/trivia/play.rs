use axum::{extract::State, response::Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AppJson;
use crate::services::TriviaService;
use crate::state::AppContext;

#[derive(Debug, Deserialize)]
pub struct PlayPayload {
    /// Category id; `0` or omitted means all categories.
    pub category: Option<i64>,
    #[serde(default)]
    pub previous_questions: Vec<String>,
}

/// POST /api/questions/play - draw a random eligible question
///
/// Eligible means in the requested category (when one is given) and not
/// among the previously seen question texts. An exhausted pool yields an
/// empty-string question so the client knows the game is over.
pub async fn next_question(
    State(ctx): State<AppContext>,
    AppJson(payload): AppJson<PlayPayload>,
) -> Result<Json<Value>, ApiError> {
    let category = payload.category.filter(|&id| id > 0);

    let drawn = TriviaService::new(ctx.pool.clone())
        .draw_question(category, &payload.previous_questions)
        .await?;

    let question = match drawn {
        Some(q) => q.format(),
        None => json!(""),
    };
    Ok(Json(json!({ "success": true, "question": question })))
}
