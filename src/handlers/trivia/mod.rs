use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppContext;

pub mod categories;
pub mod play;
pub mod questions;

/// Questions per page for GET /api/questions.
pub const QUESTIONS_PER_PAGE: i64 = 10;

pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .route("/api/categories", get(categories::list).post(categories::create))
        .route("/api/categories/:id", delete(categories::destroy))
        .route("/api/categories/:id/questions", get(questions::by_category))
        .route("/api/questions", get(questions::list).post(questions::create))
        .route("/api/questions/:id/delete", delete(questions::destroy))
        .route("/api/questions/play", post(play::next_question))
        .route("/api/search/questions", post(questions::search))
        .with_state(ctx)
}
