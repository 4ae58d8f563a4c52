use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppContext;

pub mod artists;
pub mod shows;
pub mod venues;

pub fn router(ctx: AppContext) -> Router {
    Router::new()
        // Venues
        .route("/venues", get(venues::list))
        .route("/venues/create", post(venues::create))
        .route("/venues/search", post(venues::search))
        .route("/venues/:id", get(venues::show))
        .route("/venues/:id/edit", post(venues::edit))
        .route("/venues/:id/delete", delete(venues::destroy))
        // Artists
        .route("/artists", get(artists::list))
        .route("/artists/create", post(artists::create))
        .route("/artists/search", post(artists::search))
        .route("/artists/:id", get(artists::show))
        .route("/artists/:id/edit", post(artists::edit))
        // Shows
        .route("/shows", get(shows::list))
        .route("/shows/create", post(shows::create))
        .with_state(ctx)
}
