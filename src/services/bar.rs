use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::database::models::{Drink, RecipeItem};
use crate::database::{is_unique_violation, StoreError};

pub struct BarService {
    pool: SqlitePool,
}

impl BarService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn drinks(&self) -> Result<Vec<Drink>, StoreError> {
        let drinks = sqlx::query_as::<_, Drink>("SELECT * FROM drinks ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(drinks)
    }

    pub async fn drink(&self, id: i64) -> Result<Drink, StoreError> {
        sqlx::query_as::<_, Drink>("SELECT * FROM drinks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound("Drink not found".to_string()))
    }

    pub async fn drink_by_title(&self, title: &str) -> Result<Option<Drink>, StoreError> {
        let drink = sqlx::query_as::<_, Drink>("SELECT * FROM drinks WHERE title = ?")
            .bind(title)
            .fetch_optional(&self.pool)
            .await?;
        Ok(drink)
    }

    pub async fn create_drink(&self, title: &str, recipe: &[RecipeItem]) -> Result<Drink, StoreError> {
        sqlx::query_as::<_, Drink>("INSERT INTO drinks (title, recipe) VALUES (?, ?) RETURNING *")
            .bind(title)
            .bind(Json(recipe))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StoreError::AlreadyExists(format!("Drink with title {} already exists", title))
                } else {
                    StoreError::Sqlx(e)
                }
            })
    }

    /// Partial update: only the provided fields are overwritten.
    pub async fn update_drink(
        &self,
        id: i64,
        title: Option<&str>,
        recipe: Option<&[RecipeItem]>,
    ) -> Result<Drink, StoreError> {
        let mut drink = self.drink(id).await?;
        if let Some(title) = title {
            drink.title = title.to_string();
        }
        if let Some(recipe) = recipe {
            drink.recipe = Json(recipe.to_vec());
        }

        sqlx::query_as::<_, Drink>(
            "UPDATE drinks SET title = ?, recipe = ? WHERE id = ? RETURNING *",
        )
        .bind(&drink.title)
        .bind(Json(&*drink.recipe))
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StoreError::AlreadyExists(format!("Drink with title {} already exists", drink.title))
            } else {
                StoreError::Sqlx(e)
            }
        })
    }

    /// Returns the deleted id for client-side cache invalidation.
    pub async fn delete_drink(&self, id: i64) -> Result<i64, StoreError> {
        let drink = self.drink(id).await?;
        sqlx::query("DELETE FROM drinks WHERE id = ?")
            .bind(drink.id)
            .execute(&self.pool)
            .await?;
        Ok(drink.id)
    }
}
