use axum::{
    extract::{Request, State},
    handler::Handler,
    http::HeaderMap,
    middleware::{self, Next},
    routing::get,
    Router,
};

use crate::middleware::authorize;
use crate::state::AppContext;

pub mod drinks;

pub fn router(ctx: AppContext) -> Router {
    let guard = |permission: &'static str| {
        middleware::from_fn_with_state(
            ctx.clone(),
            move |state: State<AppContext>, headers: HeaderMap, request: Request, next: Next| {
                authorize(state, headers, request, next, permission)
            },
        )
    };

    Router::new()
        .route(
            "/drinks",
            get(drinks::list).post(drinks::create.layer(guard("post:drinks"))),
        )
        .route(
            "/drinks-detail",
            get(drinks::detail.layer(guard("get:drinks-detail"))),
        )
        .route(
            "/drinks/:id",
            axum::routing::patch(drinks::update.layer(guard("patch:drinks")))
                .delete(drinks::destroy.layer(guard("delete:drinks"))),
        )
        .with_state(ctx)
}
