//! Builds parameterized SELECT, INSERT, and UPDATE statements from the entity
//! model. Identifiers come only from the model, never from requests.

use crate::schema::{ColumnDef, EntityDef};
use serde_json::Value;
use std::collections::HashMap;

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: Value) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

fn select_column_list(entity: &EntityDef) -> String {
    entity
        .columns
        .iter()
        .map(|c| quoted(&c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Bind placeholder with a type cast so text-encoded parameters coerce to the
/// column's PostgreSQL type (e.g. `$1::timestamptz`).
fn placeholder(n: usize, col: &ColumnDef) -> String {
    format!("${}::{}", n, col.kind.pg_type())
}

/// SELECT of the whole table, ordered by creation time so lists render in a
/// stable insertion order.
pub fn select_list(entity: &EntityDef) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}, {}",
        select_column_list(entity),
        quoted(&entity.table),
        quoted("created_at"),
        quoted(&entity.pk().name),
    );
    q
}

/// SELECT by primary key. Caller binds the id as the sole parameter.
pub fn select_by_id(entity: &EntityDef) -> QueryBuf {
    let mut q = QueryBuf::new();
    let pk = entity.pk();
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = $1::{}",
        select_column_list(entity),
        quoted(&entity.table),
        quoted(&pk.name),
        pk.kind.pg_type(),
    );
    q
}

/// INSERT from body. Only declared columns are written; unknown body keys are
/// dropped. Columns with a DB default are omitted when the body has no value
/// for them (so the default applies).
pub fn insert(entity: &EntityDef, body: &HashMap<String, Value>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for c in &entity.columns {
        let val = body.get(&c.name).cloned();
        if val.is_none() && c.has_default {
            continue;
        }
        let n = q.push_param(val.unwrap_or(Value::Null));
        cols.push(quoted(&c.name));
        placeholders.push(placeholder(n, c));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(&entity.table),
        cols.join(", "),
        placeholders.join(", "),
        select_column_list(entity),
    );
    q
}

/// UPDATE by id: SET only the declared columns present in body (never the
/// primary key). An update with no settable columns degrades to a SELECT so
/// the caller still gets the row back.
pub fn update(entity: &EntityDef, id: &Value, body: &HashMap<String, Value>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let pk = entity.pk();
    let mut sets = Vec::new();
    for c in &entity.columns {
        if c.primary_key {
            continue;
        }
        let Some(v) = body.get(&c.name) else { continue };
        let n = q.push_param(v.clone());
        sets.push(format!("{} = {}", quoted(&c.name), placeholder(n, c)));
    }
    if sets.is_empty() {
        q.params.push(id.clone());
        q.sql = format!(
            "SELECT {} FROM {} WHERE {} = $1::{}",
            select_column_list(entity),
            quoted(&entity.table),
            quoted(&pk.name),
            pk.kind.pg_type(),
        );
        return q;
    }
    let id_param = q.push_param(id.clone());
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${}::{} RETURNING {}",
        quoted(&entity.table),
        sets.join(", "),
        quoted(&pk.name),
        id_param,
        pk.kind.pg_type(),
        select_column_list(entity),
    );
    q
}
