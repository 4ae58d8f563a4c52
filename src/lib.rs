pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod state;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use state::AppContext;

/// Build the full application router: four app route tables plus the shared
/// root and health endpoints.
pub fn app(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .with_state(ctx.clone())
        .merge(handlers::booking::router(ctx.clone()))
        .merge(handlers::trivia::router(ctx.clone()))
        .merge(handlers::bar::router(ctx.clone()))
        .merge(handlers::classroom::router(ctx))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Campus API",
            "version": version,
            "endpoints": {
                "booking": "/venues, /artists, /shows (public)",
                "trivia": "/api/categories, /api/questions (public)",
                "bar": "/drinks (public), /drinks-detail, /drinks/:id (permissioned)",
                "classroom": "/questions[/:id[/answers]] (permissioned)",
            }
        }
    }))
}

async fn health(State(ctx): State<AppContext>) -> impl IntoResponse {
    match database::health_check(&ctx.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": { "status": "ok", "database": "ok" }
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": 503,
                "message": "database unavailable",
                "data": { "status": "degraded", "database_error": e.to_string() }
            })),
        ),
    }
}
