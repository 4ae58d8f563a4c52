use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AppJson;
use crate::services::booking::ArtistInput;
use crate::services::BookingService;
use crate::state::AppContext;

use super::venues::SearchPayload;

#[derive(Debug, Deserialize)]
pub struct ArtistPayload {
    pub name: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
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
    pub seeking_venue: bool,
    #[serde(default)]
    pub seeking_description: String,
}

impl ArtistPayload {
    fn into_input(self) -> Result<ArtistInput, ApiError> {
        let name = self.name.unwrap_or_default().trim().to_string();
        if name.is_empty() {
            return Err(ApiError::missing_field("name"));
        }
        Ok(ArtistInput {
            name,
            genres: self.genres,
            city: self.city,
            state: self.state,
            phone: self.phone,
            website: self.website,
            facebook_link: self.facebook_link,
            image_link: self.image_link,
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description,
        })
    }
}

/// GET /artists - list all artists
pub async fn list(State(ctx): State<AppContext>) -> Result<Json<Value>, ApiError> {
    let artists = BookingService::new(ctx.pool.clone()).list_artists().await?;
    Ok(Json(json!({ "success": true, "artists": artists })))
}

/// GET /artists/:id
pub async fn show(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let artist = BookingService::new(ctx.pool.clone()).artist(id).await?;
    Ok(Json(json!({ "success": true, "artist": artist })))
}

/// POST /artists/create
pub async fn create(
    State(ctx): State<AppContext>,
    AppJson(payload): AppJson<ArtistPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let service = BookingService::new(ctx.pool.clone());
    let input = payload.into_input()?;

    if service.artist_by_name(&input.name).await?.is_some() {
        return Err(ApiError::conflict("An artist with that name already exists"));
    }

    let artist = service.create_artist(&input).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": format!("Artist {} was successfully added!", artist.name),
            "artist": artist,
        })),
    ))
}

/// POST /artists/:id/edit - overwrite every field from the payload
pub async fn edit(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<ArtistPayload>,
) -> Result<Json<Value>, ApiError> {
    let service = BookingService::new(ctx.pool.clone());
    let input = payload.into_input()?;
    let artist = service.update_artist(id, &input).await?;
    Ok(Json(json!({
        "success": true,
        "message": format!("{} data was updated", artist.name),
        "artist": artist,
    })))
}

/// POST /artists/search
pub async fn search(
    State(ctx): State<AppContext>,
    AppJson(payload): AppJson<SearchPayload>,
) -> Result<Json<Value>, ApiError> {
    let artists = BookingService::new(ctx.pool.clone())
        .search_artists(&payload.search_term)
        .await?;
    Ok(Json(json!({
        "success": true,
        "count": artists.len(),
        "search_term": payload.search_term,
        "artists": artists,
    })))
}
