use chrono::NaiveDate;
use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::database::models::{Artist, Show, ShowListing, Venue, VenueSummary};
use crate::database::{is_unique_violation, StoreError};

use super::search_tokens;

/// Field set shared by venue create and edit. Edits overwrite every field.
#[derive(Debug, Clone)]
pub struct VenueInput {
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: String,
    pub facebook_link: String,
    pub image_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

#[derive(Debug, Clone)]
pub struct ArtistInput {
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: String,
    pub facebook_link: String,
    pub image_link: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

#[derive(Debug, Clone)]
pub struct ShowInput {
    pub name: String,
    pub artist_id: i64,
    pub venue_id: i64,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub fee: String,
}

pub struct BookingService {
    pool: SqlitePool,
}

impl BookingService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ----- venues -----

    pub async fn list_venues(&self) -> Result<Vec<VenueSummary>, StoreError> {
        let venues =
            sqlx::query_as::<_, VenueSummary>("SELECT id, name, city, state FROM venues ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(venues)
    }

    pub async fn venue(&self, id: i64) -> Result<Venue, StoreError> {
        sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound("Venue not found".to_string()))
    }

    pub async fn venue_by_name(&self, name: &str) -> Result<Option<Venue>, StoreError> {
        let venue = sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(venue)
    }

    pub async fn create_venue(&self, input: &VenueInput) -> Result<Venue, StoreError> {
        sqlx::query_as::<_, Venue>(
            r#"
            INSERT INTO venues
                (name, genres, address, city, state, phone, website, facebook_link,
                 image_link, seeking_talent, seeking_description)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&input.name)
        .bind(Json(&input.genres))
        .bind(&input.address)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.phone)
        .bind(&input.website)
        .bind(&input.facebook_link)
        .bind(&input.image_link)
        .bind(input.seeking_talent)
        .bind(&input.seeking_description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StoreError::AlreadyExists("A venue with that name already exists".to_string())
            } else {
                StoreError::Sqlx(e)
            }
        })
    }

    pub async fn update_venue(&self, id: i64, input: &VenueInput) -> Result<Venue, StoreError> {
        sqlx::query_as::<_, Venue>(
            r#"
            UPDATE venues SET
                name = ?, genres = ?, address = ?, city = ?, state = ?, phone = ?,
                website = ?, facebook_link = ?, image_link = ?, seeking_talent = ?,
                seeking_description = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&input.name)
        .bind(Json(&input.genres))
        .bind(&input.address)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.phone)
        .bind(&input.website)
        .bind(&input.facebook_link)
        .bind(&input.image_link)
        .bind(input.seeking_talent)
        .bind(&input.seeking_description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StoreError::AlreadyExists("A venue with that name already exists".to_string())
            } else {
                StoreError::Sqlx(e)
            }
        })?
        .ok_or_else(|| StoreError::NotFound("Venue not found".to_string()))
    }

    /// Deletes the venue and, via the foreign keys, its shows. Returns the
    /// deleted record so callers can name it.
    pub async fn delete_venue(&self, id: i64) -> Result<Venue, StoreError> {
        let venue = self.venue(id).await?;
        sqlx::query("DELETE FROM venues WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(venue)
    }

    pub async fn search_venues(&self, term: &str) -> Result<Vec<Venue>, StoreError> {
        let tokens = search_tokens(term);
        let mut sql = String::from("SELECT * FROM venues WHERE 1 = 1");
        for _ in &tokens {
            sql.push_str(" AND LOWER(name) LIKE '%' || ? || '%'");
        }
        sql.push_str(" ORDER BY id");

        let mut query = sqlx::query_as::<_, Venue>(&sql);
        for token in &tokens {
            query = query.bind(token);
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    // ----- artists -----

    pub async fn list_artists(&self) -> Result<Vec<Artist>, StoreError> {
        let artists = sqlx::query_as::<_, Artist>("SELECT * FROM artists ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(artists)
    }

    pub async fn artist(&self, id: i64) -> Result<Artist, StoreError> {
        sqlx::query_as::<_, Artist>("SELECT * FROM artists WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound("Artist not found".to_string()))
    }

    pub async fn find_artist(&self, id: i64) -> Result<Option<Artist>, StoreError> {
        let artist = sqlx::query_as::<_, Artist>("SELECT * FROM artists WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(artist)
    }

    pub async fn find_venue(&self, id: i64) -> Result<Option<Venue>, StoreError> {
        let venue = sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(venue)
    }

    pub async fn artist_by_name(&self, name: &str) -> Result<Option<Artist>, StoreError> {
        let artist = sqlx::query_as::<_, Artist>("SELECT * FROM artists WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(artist)
    }

    pub async fn create_artist(&self, input: &ArtistInput) -> Result<Artist, StoreError> {
        sqlx::query_as::<_, Artist>(
            r#"
            INSERT INTO artists
                (name, genres, city, state, phone, website, facebook_link,
                 image_link, seeking_venue, seeking_description)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&input.name)
        .bind(Json(&input.genres))
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.phone)
        .bind(&input.website)
        .bind(&input.facebook_link)
        .bind(&input.image_link)
        .bind(input.seeking_venue)
        .bind(&input.seeking_description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StoreError::AlreadyExists("An artist with that name already exists".to_string())
            } else {
                StoreError::Sqlx(e)
            }
        })
    }

    pub async fn update_artist(&self, id: i64, input: &ArtistInput) -> Result<Artist, StoreError> {
        sqlx::query_as::<_, Artist>(
            r#"
            UPDATE artists SET
                name = ?, genres = ?, city = ?, state = ?, phone = ?, website = ?,
                facebook_link = ?, image_link = ?, seeking_venue = ?, seeking_description = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&input.name)
        .bind(Json(&input.genres))
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.phone)
        .bind(&input.website)
        .bind(&input.facebook_link)
        .bind(&input.image_link)
        .bind(input.seeking_venue)
        .bind(&input.seeking_description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StoreError::AlreadyExists("An artist with that name already exists".to_string())
            } else {
                StoreError::Sqlx(e)
            }
        })?
        .ok_or_else(|| StoreError::NotFound("Artist not found".to_string()))
    }

    pub async fn search_artists(&self, term: &str) -> Result<Vec<Artist>, StoreError> {
        let tokens = search_tokens(term);
        let mut sql = String::from("SELECT * FROM artists WHERE 1 = 1");
        for _ in &tokens {
            sql.push_str(" AND LOWER(name) LIKE '%' || ? || '%'");
        }
        sql.push_str(" ORDER BY id");

        let mut query = sqlx::query_as::<_, Artist>(&sql);
        for token in &tokens {
            query = query.bind(token);
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    // ----- shows -----

    pub async fn upcoming_shows(&self, today: NaiveDate) -> Result<Vec<ShowListing>, StoreError> {
        let shows = sqlx::query_as::<_, ShowListing>(
            r#"
            SELECT s.id, s.name, s.artist_id, a.name AS artist_name,
                   s.venue_id, v.name AS venue_name,
                   s.date, s.start_time, s.end_time, s.fee
            FROM shows s
            JOIN artists a ON a.id = s.artist_id
            JOIN venues v ON v.id = s.venue_id
            WHERE s.date >= ?
            ORDER BY s.date, s.id
            "#,
        )
        .bind(today)
        .fetch_all(&self.pool)
        .await?;
        Ok(shows)
    }

    pub async fn show_by_name_and_venue(
        &self,
        name: &str,
        venue_id: i64,
    ) -> Result<Option<Show>, StoreError> {
        let show = sqlx::query_as::<_, Show>("SELECT * FROM shows WHERE name = ? AND venue_id = ?")
            .bind(name)
            .bind(venue_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(show)
    }

    pub async fn create_show(&self, input: &ShowInput) -> Result<Show, StoreError> {
        sqlx::query_as::<_, Show>(
            r#"
            INSERT INTO shows (name, artist_id, venue_id, date, start_time, end_time, fee)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&input.name)
        .bind(input.artist_id)
        .bind(input.venue_id)
        .bind(input.date)
        .bind(&input.start_time)
        .bind(&input.end_time)
        .bind(&input.fee)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StoreError::AlreadyExists("Show already exists".to_string())
            } else {
                StoreError::Sqlx(e)
            }
        })
    }
}
