use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AppJson;
use crate::services::booking::VenueInput;
use crate::services::BookingService;
use crate::state::AppContext;

#[derive(Debug, Deserialize)]
pub struct VenuePayload {
    pub name: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub seeking_talent: bool,
    #[serde(default)]
    pub seeking_description: String,
}

impl VenuePayload {
    fn into_input(self) -> Result<VenueInput, ApiError> {
        let name = self.name.unwrap_or_default().trim().to_string();
        if name.is_empty() {
            return Err(ApiError::missing_field("name"));
        }
        Ok(VenueInput {
            name,
            genres: self.genres,
            address: self.address,
            city: self.city,
            state: self.state,
            phone: self.phone,
            website: self.website,
            facebook_link: self.facebook_link,
            image_link: self.image_link,
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchPayload {
    #[serde(default)]
    pub search_term: String,
}

/// GET /venues - list all venues
pub async fn list(State(ctx): State<AppContext>) -> Result<Json<Value>, ApiError> {
    let venues = BookingService::new(ctx.pool.clone()).list_venues().await?;
    Ok(Json(json!({ "success": true, "venues": venues })))
}

/// GET /venues/:id - full venue record
pub async fn show(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let venue = BookingService::new(ctx.pool.clone()).venue(id).await?;
    Ok(Json(json!({ "success": true, "venue": venue })))
}

/// POST /venues/create
pub async fn create(
    State(ctx): State<AppContext>,
    AppJson(payload): AppJson<VenuePayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let service = BookingService::new(ctx.pool.clone());
    let input = payload.into_input()?;

    // Advisory pre-check; the UNIQUE constraint stays authoritative under
    // concurrent submissions.
    if service.venue_by_name(&input.name).await?.is_some() {
        return Err(ApiError::conflict("A venue with that name already exists"));
    }

    let venue = service.create_venue(&input).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": format!("Venue {} was successfully listed!", venue.name),
            "venue": venue,
        })),
    ))
}

/// POST /venues/:id/edit - overwrite every field from the payload
pub async fn edit(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<VenuePayload>,
) -> Result<Json<Value>, ApiError> {
    let service = BookingService::new(ctx.pool.clone());
    let input = payload.into_input()?;
    let venue = service.update_venue(id, &input).await?;
    Ok(Json(json!({
        "success": true,
        "message": format!("{} data was updated", venue.name),
        "venue": venue,
    })))
}

/// DELETE /venues/:id/delete - remove the venue and its shows
pub async fn destroy(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let venue = BookingService::new(ctx.pool.clone()).delete_venue(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "deleted",
        "venue": venue.name,
    })))
}

/// POST /venues/search - tokenized case-insensitive name search
pub async fn search(
    State(ctx): State<AppContext>,
    AppJson(payload): AppJson<SearchPayload>,
) -> Result<Json<Value>, ApiError> {
    let venues = BookingService::new(ctx.pool.clone())
        .search_venues(&payload.search_term)
        .await?;
    Ok(Json(json!({
        "success": true,
        "count": venues.len(),
        "search_term": payload.search_term,
        "venues": venues,
    })))
}
