use sqlx::SqlitePool;

use crate::database::models::{Category, TriviaQuestion};
use crate::database::StoreError;

#[derive(Debug, Clone)]
pub struct QuestionInput {
    pub question: String,
    pub answer: String,
    pub category_id: i64,
    pub difficulty: i64,
}

pub struct TriviaService {
    pool: SqlitePool,
}

impl TriviaService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ----- categories -----

    pub async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        let categories = sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(categories)
    }

    pub async fn category_exists(&self, id: i64) -> Result<bool, StoreError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0 > 0)
    }

    pub async fn create_category(&self, kind: &str) -> Result<Category, StoreError> {
        let category =
            sqlx::query_as::<_, Category>("INSERT INTO categories (type) VALUES (?) RETURNING *")
                .bind(kind)
                .fetch_one(&self.pool)
                .await?;
        Ok(category)
    }

    /// Questions in the category go with it (FK cascade).
    pub async fn delete_category(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("Category not found".to_string()));
        }
        Ok(())
    }

    // ----- questions -----

    pub async fn count_questions(&self) -> Result<i64, StoreError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM trivia_questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }

    /// One page in insertion order; pages past the end come back empty.
    pub async fn questions_page(&self, page: i64, per_page: i64) -> Result<Vec<TriviaQuestion>, StoreError> {
        let offset = (page - 1).max(0) * per_page;
        let questions = sqlx::query_as::<_, TriviaQuestion>(
            "SELECT * FROM trivia_questions ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(per_page)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    pub async fn create_question(&self, input: &QuestionInput) -> Result<TriviaQuestion, StoreError> {
        let question = sqlx::query_as::<_, TriviaQuestion>(
            r#"
            INSERT INTO trivia_questions (question, answer, category_id, difficulty)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&input.question)
        .bind(&input.answer)
        .bind(input.category_id)
        .bind(input.difficulty)
        .fetch_one(&self.pool)
        .await?;
        Ok(question)
    }

    pub async fn delete_question(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM trivia_questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("Question not found".to_string()));
        }
        Ok(())
    }

    /// Case-insensitive substring match on the question text, ordered by id.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<TriviaQuestion>, StoreError> {
        let questions = sqlx::query_as::<_, TriviaQuestion>(
            "SELECT * FROM trivia_questions WHERE LOWER(question) LIKE '%' || ? || '%' ORDER BY id",
        )
        .bind(term.to_lowercase())
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    pub async fn questions_in_category(&self, category_id: i64) -> Result<Vec<TriviaQuestion>, StoreError> {
        let questions = sqlx::query_as::<_, TriviaQuestion>(
            "SELECT * FROM trivia_questions WHERE category_id = ? ORDER BY id",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    /// Uniform-random question from the eligible set: matching the category
    /// when one is given, never one whose text appears in `previous`.
    pub async fn draw_question(
        &self,
        category_id: Option<i64>,
        previous: &[String],
    ) -> Result<Option<TriviaQuestion>, StoreError> {
        let mut sql = String::from("SELECT * FROM trivia_questions WHERE 1 = 1");
        if category_id.is_some() {
            sql.push_str(" AND category_id = ?");
        }
        if !previous.is_empty() {
            sql.push_str(" AND question NOT IN (");
            sql.push_str(&vec!["?"; previous.len()].join(", "));
            sql.push(')');
        }
        sql.push_str(" ORDER BY RANDOM() LIMIT 1");

        let mut query = sqlx::query_as::<_, TriviaQuestion>(&sql);
        if let Some(id) = category_id {
            query = query.bind(id);
        }
        for text in previous {
            query = query.bind(text);
        }
        Ok(query.fetch_optional(&self.pool).await?)
    }
}
