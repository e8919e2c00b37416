//! Generic CRUD execution against PostgreSQL.

use crate::error::AppError;
use crate::schema::EntityDef;
use crate::sql::{insert, select_by_id, select_list, update, PgBindValue, QueryBuf};
use serde_json::Value;
use sqlx::PgPool;
use std::collections::HashMap;

pub struct CrudService;

impl CrudService {
    /// All rows of the entity's table, unfiltered.
    pub async fn list(pool: &PgPool, entity: &EntityDef) -> Result<Vec<Value>, AppError> {
        let q = select_list(entity);
        Self::query_many(pool, &q).await
    }

    /// One row by primary key, or None.
    pub async fn read(
        pool: &PgPool,
        entity: &EntityDef,
        id: &Value,
    ) -> Result<Option<Value>, AppError> {
        let mut q = select_by_id(entity);
        q.params.push(id.clone());
        Self::query_one(pool, &q).await
    }

    /// Insert one row from the body; only declared columns are written.
    /// Returns the created row as stored.
    pub async fn create(
        pool: &PgPool,
        entity: &EntityDef,
        body: &HashMap<String, Value>,
    ) -> Result<Value, AppError> {
        let q = insert(entity, body);
        let row = Self::query_one(pool, &q)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
        Ok(row)
    }

    /// Update one row by id from the body's declared columns. None if absent.
    pub async fn update(
        pool: &PgPool,
        entity: &EntityDef,
        id: &Value,
        body: &HashMap<String, Value>,
    ) -> Result<Option<Value>, AppError> {
        let q = update(entity, id, body);
        Self::query_one(pool, &q).await
    }

    async fn query_one(pool: &PgPool, q: &QueryBuf) -> Result<Option<Value>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(PgBindValue::from_json(p));
        }
        let row = query.fetch_optional(pool).await?;
        Ok(row.map(|r| row_to_json(&r)))
    }

    async fn query_many(pool: &PgPool, q: &QueryBuf) -> Result<Vec<Value>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(PgBindValue::from_json(p));
        }
        let rows = query.fetch_all(pool).await?;
        Ok(rows.iter().map(row_to_json).collect())
    }
}

fn row_to_json(row: &sqlx::postgres::PgRow) -> Value {
    use sqlx::Column;
    use sqlx::Row;
    let mut map = serde_json::Map::new();
    for col in row.columns() {
        let name = col.name();
        map.insert(name.to_string(), cell_to_value(row, name));
    }
    Value::Object(map)
}

fn cell_to_value(row: &sqlx::postgres::PgRow, name: &str) -> Value {
    use sqlx::Row;
    if let Ok(Some(n)) = row.try_get::<Option<i32>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<i64>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<f64>, _>(name) {
        if let Some(n) = serde_json::Number::from_f64(n) {
            return Value::Number(n);
        }
    }
    if let Ok(Some(b)) = row.try_get::<Option<bool>, _>(name) {
        return Value::Bool(b);
    }
    if let Ok(Some(u)) = row.try_get::<Option<uuid::Uuid>, _>(name) {
        return Value::String(u.to_string());
    }
    if let Ok(Some(d)) = row.try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(name) {
        return Value::String(d.to_rfc3339());
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(name) {
        return Value::String(s);
    }
    if let Ok(Some(j)) = row.try_get::<Option<serde_json::Value>, _>(name) {
        return j;
    }
    Value::Null
}
