//! Resource endpoint handlers: list, create, read, update.
//!
//! The endpoint is deliberately thin: it resolves the entity from the path,
//! delegates one call to the store, and returns the rows as bare JSON. Any
//! server-side data rules beyond declared columns are the store's business.

use crate::error::AppError;
use crate::schema::EntityDef;
use crate::service::CrudService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::Method,
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

fn resolve_entity<'a>(state: &'a AppState, path_segment: &str) -> Result<&'a EntityDef, AppError> {
    state
        .model
        .entity_by_path(path_segment)
        .ok_or_else(|| AppError::NotFound(path_segment.to_string()))
}

fn parse_id(entity: &EntityDef, id_str: &str) -> Result<Value, AppError> {
    // All primary keys in the model are uuid; reject garbage before the store
    // sees it so the caller gets a 404 rather than a database error.
    let u = uuid::Uuid::parse_str(id_str)
        .map_err(|_| AppError::NotFound(format!("{} {}", entity.path_segment, id_str)))?;
    Ok(Value::String(u.to_string()))
}

fn body_to_map(value: Value) -> Result<HashMap<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m.into_iter().collect()),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

pub async fn list(
    State(state): State<AppState>,
    Path(path_segment): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    let entity = resolve_entity(&state, &path_segment)?;
    let rows = CrudService::list(&state.pool, entity).await?;
    Ok(Json(rows))
}

pub async fn create(
    State(state): State<AppState>,
    Path(path_segment): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let entity = resolve_entity(&state, &path_segment)?;
    let body = body_to_map(body)?;
    let row = CrudService::create(&state.pool, entity, &body).await?;
    Ok(Json(row))
}

pub async fn read(
    State(state): State<AppState>,
    Path((path_segment, id_str)): Path<(String, String)>,
) -> Result<Json<Value>, AppError> {
    let entity = resolve_entity(&state, &path_segment)?;
    let id = parse_id(entity, &id_str)?;
    let row = CrudService::read(&state.pool, entity, &id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} {}", entity.path_segment, id_str)))?;
    Ok(Json(row))
}

pub async fn update(
    State(state): State<AppState>,
    Path((path_segment, id_str)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let entity = resolve_entity(&state, &path_segment)?;
    let id = parse_id(entity, &id_str)?;
    let body = body_to_map(body)?;
    let row = CrudService::update(&state.pool, entity, &id, &body)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} {}", entity.path_segment, id_str)))?;
    Ok(Json(row))
}

/// Fallback for any verb a resource route does not support.
pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed(method.to_string())
}
