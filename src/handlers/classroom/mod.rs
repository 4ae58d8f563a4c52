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

pub mod answers;
pub mod questions;

/// Every classroom route sits behind a permission; there is no public
/// surface.
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
            "/questions",
            get(questions::list.layer(guard("read:questions")))
                .post(questions::create.layer(guard("add:question"))),
        )
        .route(
            "/questions/:id",
            get(questions::show.layer(guard("read:question")))
                .delete(questions::destroy.layer(guard("delete:question"))),
        )
        .route(
            "/questions/:id/answers",
            get(answers::list.layer(guard("read:answers")))
                .post(answers::create.layer(guard("add:answer"))),
        )
        .with_state(ctx)
}
