//! Form-page flow against a stub backend: create submit, edit submit with
//! cache mutation and navigation, and the failure path that keeps the user
//! on the form.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use bistro_admin::form::{create_page, edit_page, FormPhase, RecordCache};
use bistro_admin::{restaurant_model, ApiClient, ClientError};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type Store = Arc<Mutex<HashMap<String, Value>>>;

const ITEM_ID: &str = "9f2c6f0a-7f3b-4c22-9d5f-0b1a2c3d4e5f";
const MENU_ID: &str = "1a2b3c4d-0000-4e5f-8a9b-c0d1e2f3a4b5";

fn seed_item() -> Value {
    json!({
        "id": ITEM_ID,
        "name": "Tiramisu",
        "description": null,
        "price": 700,
        "menu_id": MENU_ID,
        "created_at": "2026-08-26T00:00:00Z",
        "updated_at": "2026-08-26T00:00:00Z",
    })
}

async fn list_menus() -> Json<Value> {
    Json(json!([{ "id": MENU_ID, "name": "Desserts" }]))
}

async fn create_item(State(store): State<Store>, Json(body): Json<Value>) -> Json<Value> {
    let mut record = seed_item();
    if let (Value::Object(rec), Value::Object(body)) = (&mut record, body) {
        for (k, v) in body {
            rec.insert(k, v);
        }
    }
    store
        .lock()
        .unwrap()
        .insert(record["id"].as_str().unwrap().to_string(), record.clone());
    Json(record)
}

async fn read_item(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    store.lock().unwrap().get(&id).cloned().map(Json).ok_or((
        StatusCode::NOT_FOUND,
        Json(json!({ "message": format!("{} not found", id) })),
    ))
}

async fn update_item(
    State(store): State<Store>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mut store = store.lock().unwrap();
    let Some(record) = store.get_mut(&id) else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "message": format!("{} not found", id) })),
        ));
    };
    if let (Value::Object(rec), Value::Object(body)) = (&mut *record, body) {
        for (k, v) in body {
            rec.insert(k, v);
        }
    }
    Ok(Json(record.clone()))
}

/// Stub admin API over an in-memory map, shaped like the real surface.
async fn spawn_stub() -> (String, Store) {
    let store: Store = Arc::new(Mutex::new(HashMap::from([(
        ITEM_ID.to_string(),
        seed_item(),
    )])));
    let app = Router::new()
        .route("/api/menus", get(list_menus))
        .route("/api/menu-items", axum::routing::post(create_item))
        .route("/api/menu-items/:id", get(read_item).put(update_item))
        .with_state(store.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), store)
}

#[tokio::test]
async fn create_flow_submits_and_navigates_to_list_route() {
    let (base, _store) = spawn_stub().await;
    let client = ApiClient::new(base);
    let model = restaurant_model();
    let mut cache = RecordCache::new();

    let mut page = create_page(&model, "menu-items", &client).await.unwrap();
    assert_eq!(page.selects.len(), 1);
    assert_eq!(page.selects[0].options()[0].value, MENU_ID);
    assert!(!page.form.can_submit());

    page.form.set_value("name", json!("Affogato"));
    page.form.set_value("price", json!(550));
    page.form.set_value("menu_id", json!(MENU_ID));
    assert!(page.form.can_submit());

    let nav = page.form.submit(&client, &mut cache).await.unwrap();
    assert_eq!(nav.route, "/menu-items");
    // Form state reset after a successful create.
    assert_eq!(page.form.values["name"], json!(""));
    assert_eq!(page.form.phase(), FormPhase::Idle);
}

#[tokio::test]
async fn edit_flow_mutates_cache_and_navigates() {
    let (base, _store) = spawn_stub().await;
    let client = ApiClient::new(base);
    let model = restaurant_model();
    let mut cache = RecordCache::new();

    let mut page = edit_page(&model, "menu-items", ITEM_ID, &client, &mut cache)
        .await
        .unwrap();
    assert!(page.selects[0].is_loaded());
    assert_eq!(page.form.values["price"], json!(700));

    page.form.set_value("price", json!(850));
    let nav = page.form.submit(&client, &mut cache).await.unwrap();
    assert_eq!(nav.route, "/menu-items");
    assert_eq!(cache.get(ITEM_ID).unwrap()["price"], json!(850));
}

#[tokio::test]
async fn failed_update_keeps_error_on_the_form() {
    let (base, store) = spawn_stub().await;
    let client = ApiClient::new(base);
    let model = restaurant_model();
    let mut cache = RecordCache::new();

    let mut page = edit_page(&model, "menu-items", ITEM_ID, &client, &mut cache)
        .await
        .unwrap();
    // Record vanishes behind the form's back; the update now 404s.
    store.lock().unwrap().clear();

    page.form.set_value("price", json!(999));
    let nav = page.form.submit(&client, &mut cache).await;
    assert!(nav.is_none());
    assert_eq!(page.form.phase(), FormPhase::Idle);
    match page.form.submit_error {
        Some(ClientError::Api { status, ref message }) => {
            assert_eq!(status, 404);
            assert!(message.contains("not found"));
        }
        ref other => panic!("expected api error, got {:?}", other),
    }
    // Unchanged value survives for the user to retry.
    assert_eq!(page.form.values["price"], json!(999));
}

#[tokio::test]
async fn created_record_echoes_submitted_fields() {
    let (base, _store) = spawn_stub().await;
    let client = ApiClient::new(base);
    let created: bistro_admin::records::MenuItem = client
        .create(
            "menu-items",
            &json!({ "name": "Espresso", "price": 300, "menu_id": MENU_ID }),
        )
        .await
        .unwrap();
    assert_eq!(created.name, "Espresso");
    assert_eq!(created.price, 300);
    assert_eq!(created.menu_id.to_string(), MENU_ID);
}
