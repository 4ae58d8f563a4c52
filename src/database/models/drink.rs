use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::types::Json;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeItem {
    pub color: String,
    pub name: String,
    pub parts: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Drink {
    pub id: i64,
    pub title: String,
    pub recipe: Json<Vec<RecipeItem>>,
}

impl Drink {
    /// Public representation: ingredient names stay hidden.
    pub fn short(&self) -> Value {
        let recipe: Vec<Value> = self
            .recipe
            .iter()
            .map(|item| json!({ "color": &item.color, "parts": item.parts }))
            .collect();
        json!({ "id": self.id, "title": &self.title, "recipe": recipe })
    }

    /// Full representation for permissioned callers.
    pub fn long(&self) -> Value {
        json!({ "id": self.id, "title": &self.title, "recipe": &*self.recipe })
    }
}
