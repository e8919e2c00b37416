//! Shared application state for all routes.

use crate::schema::AdminModel;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub model: Arc<AdminModel>,
}
