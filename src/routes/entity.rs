//! Resource routes built over parameterized paths; handlers resolve the
//! entity by path segment. Unsupported verbs fall through to the 405 handler
//! so the response names the method instead of axum's empty default.

use crate::handlers::entity::{create, list, method_not_allowed, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/:path_segment",
            get(list).post(create).fallback(method_not_allowed),
        )
        .route(
            "/:path_segment/:id",
            get(read).put(update).fallback(method_not_allowed),
        )
        .with_state(state)
}
