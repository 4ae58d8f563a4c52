use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Show {
    pub id: i64,
    pub name: String,
    pub artist_id: i64,
    pub venue_id: i64,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub fee: String,
}

/// Listing projection for GET /shows with the parent names joined in.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ShowListing {
    pub id: i64,
    pub name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub venue_id: i64,
    pub venue_name: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub fee: String,
}
