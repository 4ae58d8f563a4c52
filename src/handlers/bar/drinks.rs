use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::RecipeItem;
use crate::error::ApiError;
use crate::middleware::AppJson;
use crate::services::BarService;
use crate::state::AppContext;

#[derive(Debug, Deserialize)]
pub struct DrinkPayload {
    pub title: Option<String>,
    pub recipe: Option<Value>,
}

fn parse_recipe(recipe: Value) -> Result<Vec<RecipeItem>, ApiError> {
    if !recipe.is_array() {
        return Err(ApiError::Unprocessable(
            "Recipe field must contain a list of recipe objects e.g [{\"color\": \"blue\", \"name\": \"water\", \"parts\": 1}]"
                .to_string(),
        ));
    }
    serde_json::from_value(recipe).map_err(|_| {
        ApiError::Unprocessable("Recipe items must each provide color, name and parts".to_string())
    })
}

/// GET /drinks - public listing, short representation
pub async fn list(State(ctx): State<AppContext>) -> Result<Json<Value>, ApiError> {
    let drinks = BarService::new(ctx.pool.clone()).drinks().await?;
    let drinks: Vec<Value> = drinks.iter().map(|d| d.short()).collect();
    Ok(Json(json!({ "success": true, "drinks": drinks })))
}

/// GET /drinks-detail - long representation, permissioned
pub async fn detail(State(ctx): State<AppContext>) -> Result<Json<Value>, ApiError> {
    let drinks = BarService::new(ctx.pool.clone()).drinks().await?;
    let drinks: Vec<Value> = drinks.iter().map(|d| d.long()).collect();
    Ok(Json(json!({ "success": true, "drinks": drinks })))
}

/// POST /drinks
pub async fn create(
    State(ctx): State<AppContext>,
    AppJson(payload): AppJson<DrinkPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let title = payload.title.unwrap_or_default().trim().to_string();
    if title.is_empty() {
        return Err(ApiError::missing_field("title"));
    }
    let recipe = parse_recipe(payload.recipe.unwrap_or(Value::Null))?;

    let service = BarService::new(ctx.pool.clone());
    if service.drink_by_title(&title).await?.is_some() {
        return Err(ApiError::conflict(format!(
            "Drink with title {} already exists",
            title
        )));
    }

    let drink = service.create_drink(&title, &recipe).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "drink": drink.long() })),
    ))
}

/// PATCH /drinks/:id - partial update, only provided fields change
pub async fn update(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<DrinkPayload>,
) -> Result<Json<Value>, ApiError> {
    let recipe = match payload.recipe {
        Some(value) => Some(parse_recipe(value)?),
        None => None,
    };
    let title = payload
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());

    let drink = BarService::new(ctx.pool.clone())
        .update_drink(id, title.as_deref(), recipe.as_deref())
        .await?;
    Ok(Json(json!({ "success": true, "drink": drink.long() })))
}

/// DELETE /drinks/:id - returns the deleted id
pub async fn destroy(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let deleted = BarService::new(ctx.pool.clone()).delete_drink(id).await?;
    Ok(Json(json!({ "success": true, "delete": deleted })))
}
