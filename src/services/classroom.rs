use sqlx::SqlitePool;

use crate::database::models::{Answer, ClassroomQuestion};
use crate::database::StoreError;

pub struct ClassroomService {
    pool: SqlitePool,
}

impl ClassroomService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn questions(&self) -> Result<Vec<ClassroomQuestion>, StoreError> {
        let questions =
            sqlx::query_as::<_, ClassroomQuestion>("SELECT * FROM classroom_questions ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(questions)
    }

    pub async fn question(&self, id: i64) -> Result<ClassroomQuestion, StoreError> {
        sqlx::query_as::<_, ClassroomQuestion>("SELECT * FROM classroom_questions WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound("Question not found".to_string()))
    }

    pub async fn create_question(
        &self,
        question: &str,
        teacher_id: &str,
    ) -> Result<ClassroomQuestion, StoreError> {
        let question = sqlx::query_as::<_, ClassroomQuestion>(
            "INSERT INTO classroom_questions (question, teacher_id) VALUES (?, ?) RETURNING *",
        )
        .bind(question)
        .bind(teacher_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(question)
    }

    /// Answers go with the question (FK cascade).
    pub async fn delete_question(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM classroom_questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("Question not found".to_string()));
        }
        Ok(())
    }

    pub async fn answers_for(&self, question_id: i64) -> Result<Vec<Answer>, StoreError> {
        let answers =
            sqlx::query_as::<_, Answer>("SELECT * FROM answers WHERE question_id = ? ORDER BY id")
                .bind(question_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(answers)
    }

    pub async fn create_answer(
        &self,
        question_id: i64,
        answer: &str,
        teacher_id: &str,
    ) -> Result<Answer, StoreError> {
        // The parent must exist; a dangling id is a 404, not an FK error.
        self.question(question_id).await?;

        let answer = sqlx::query_as::<_, Answer>(
            "INSERT INTO answers (answer, question_id, teacher_id) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(answer)
        .bind(question_id)
        .bind(teacher_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(answer)
    }
}
