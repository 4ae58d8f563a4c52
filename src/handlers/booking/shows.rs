use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AppJson;
use crate::services::booking::ShowInput;
use crate::services::BookingService;
use crate::state::AppContext;

#[derive(Debug, Deserialize)]
pub struct ShowPayload {
    pub name: Option<String>,
    pub artist_id: Option<i64>,
    pub venue_id: Option<i64>,
    pub date: Option<String>,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub fee: String,
}

/// GET /shows - shows with a date today or later
pub async fn list(State(ctx): State<AppContext>) -> Result<Json<Value>, ApiError> {
    let today = Utc::now().date_naive();
    let shows = BookingService::new(ctx.pool.clone()).upcoming_shows(today).await?;
    Ok(Json(json!({ "success": true, "shows": shows })))
}

/// POST /shows/create
///
/// Cross-entity validation runs in the order the booking flow presents it:
/// the artist must exist and be seeking a venue, the venue must exist, and
/// the (name, venue) pair must be new.
pub async fn create(
    State(ctx): State<AppContext>,
    AppJson(payload): AppJson<ShowPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let service = BookingService::new(ctx.pool.clone());

    let artist_id = payload.artist_id.ok_or_else(|| ApiError::missing_field("artist_id"))?;
    let venue_id = payload.venue_id.ok_or_else(|| ApiError::missing_field("venue_id"))?;

    let artist = service
        .find_artist(artist_id)
        .await?
        .ok_or_else(|| ApiError::bad_request("Artist does not exist"))?;
    if !artist.seeking_venue {
        return Err(ApiError::bad_request("Artist not available"));
    }
    if service.find_venue(venue_id).await?.is_none() {
        return Err(ApiError::bad_request("Venue does not exist"));
    }

    let name = payload.name.unwrap_or_default().trim().to_string();
    if name.is_empty() {
        return Err(ApiError::missing_field("name"));
    }
    let date = payload.date.unwrap_or_default();
    if date.is_empty() {
        return Err(ApiError::missing_field("date"));
    }
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| ApiError::bad_request("date must be an ISO date (YYYY-MM-DD)"))?;

    if service.show_by_name_and_venue(&name, venue_id).await?.is_some() {
        return Err(ApiError::conflict("Show already exists"));
    }

    let show = service
        .create_show(&ShowInput {
            name,
            artist_id,
            venue_id,
            date,
            start_time: payload.start_time,
            end_time: payload.end_time,
            fee: payload.fee,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": format!("Show {} was successfully added!", show.name),
            "show": show,
        })),
    ))
}
