use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TriviaQuestion {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category_id: i64,
    pub difficulty: i64,
}

impl TriviaQuestion {
    /// API shape: the category foreign key is exposed as `category`.
    pub fn format(&self) -> Value {
        json!({
            "id": self.id,
            "question": &self.question,
            "answer": &self.answer,
            "category": self.category_id,
            "difficulty": self.difficulty,
        })
    }
}
