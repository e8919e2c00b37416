//! End-to-end round trip against a real PostgreSQL instance.
//!
//! Ignored by default; run with a reachable DATABASE_URL:
//! `DATABASE_URL=postgres://localhost/bistro_test cargo test -- --ignored`

use bistro_admin::records::User;
use bistro_admin::{
    app_router, apply_migrations, ensure_database_exists, restaurant_model, ApiClient, AppState,
};
use serde_json::{json, Value};
use std::sync::Arc;

async fn spawn_live_server() -> String {
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "postgres://localhost/bistro_test".into());
    ensure_database_exists(&database_url).await.unwrap();
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .unwrap();
    let model = restaurant_model();
    apply_migrations(&pool, &model).await.unwrap();
    let state = AppState {
        pool,
        model: Arc::new(model),
    };
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = app_router(state);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
#[ignore = "needs a live PostgreSQL at DATABASE_URL"]
async fn crud_round_trip() {
    let base = spawn_live_server().await;
    let client = ApiClient::new(base);

    let created: User = client
        .create(
            "users",
            &json!({ "email": "maria@example.com", "first_name": "Maria" }),
        )
        .await
        .unwrap();
    assert_eq!(created.email, "maria@example.com");
    assert_eq!(created.first_name.as_deref(), Some("Maria"));
    let id = created.id.to_string();

    let listed: Vec<User> = client.list("users").await.unwrap();
    assert!(listed.iter().any(|u| u.id == created.id));

    let fetched: User = client.get_by_id("users", &id).await.unwrap();
    assert_eq!(fetched.email, "maria@example.com");

    let updated: Value = client
        .update_by_id("users", &id, &json!({ "last_name": "Rossi" }))
        .await
        .unwrap();
    assert_eq!(updated["last_name"], "Rossi");
    assert_eq!(updated["email"], "maria@example.com");
}
