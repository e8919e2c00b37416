//! Example consumer: a separate project that uses bistro-admin as a
//! dependency and mounts its routes in a custom binary.

use bistro_admin::{
    app_router, apply_migrations, ensure_database_exists, restaurant_model, AppState,
};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bistro_admin=info")),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/bistro".into());
    ensure_database_exists(&database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    let model = restaurant_model();
    apply_migrations(&pool, &model).await?;
    let state = AppState {
        pool,
        model: Arc::new(model),
    };

    let app = app_router(state);
    let listener = TcpListener::bind("127.0.0.1:3000").await?;
    tracing::info!("example consumer listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
