use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClassroomQuestion {
    pub id: i64,
    pub question: String,
    pub teacher_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Answer {
    pub id: i64,
    pub answer: String,
    pub question_id: i64,
    pub teacher_id: String,
}
