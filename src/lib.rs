//! Bistro Admin: schema-driven restaurant admin CRUD backend and client.
//!
//! The server side exposes one resource endpoint per entity (list, create,
//! read by id, update) over PostgreSQL; the client side reproduces the admin
//! form pages: schema validation, foreign-key selects, a record cache, and
//! list-route navigation on success.

pub mod client;
pub mod error;
pub mod form;
pub mod handlers;
pub mod migration;
pub mod records;
pub mod routes;
pub mod schema;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use client::{ApiClient, ClientError};
pub use error::{AppError, SchemaError};
pub use migration::apply_migrations;
pub use routes::{common_routes, entity_routes};
pub use schema::{restaurant_model, AdminModel};
pub use service::CrudService;
pub use state::AppState;
pub use store::ensure_database_exists;

use axum::Router;

/// The full API router: common routes at the root, resource endpoints under
/// `/api`.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", entity_routes(state))
}
