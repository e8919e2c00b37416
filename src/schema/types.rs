//! Entity model types: tables, columns, field rules, foreign keys.

use std::collections::HashMap;

/// Column type, mapped one-to-one onto a PostgreSQL type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Uuid,
    Text,
    Integer,
    Number,
    Boolean,
    Timestamptz,
}

impl ColumnKind {
    /// PostgreSQL type name, used both in DDL and as a bind cast
    /// (`$n::timestamptz`) so string parameters coerce correctly.
    pub fn pg_type(self) -> &'static str {
        match self {
            ColumnKind::Uuid => "uuid",
            ColumnKind::Text => "text",
            ColumnKind::Integer => "integer",
            ColumnKind::Number => "double precision",
            ColumnKind::Boolean => "boolean",
            ColumnKind::Timestamptz => "timestamptz",
        }
    }
}

/// Per-field validation rule, evaluated by the form layer before submit.
#[derive(Clone, Debug, Default)]
pub struct FieldRule {
    pub required: bool,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
}

impl FieldRule {
    pub fn required() -> Self {
        FieldRule {
            required: true,
            ..Default::default()
        }
    }

    pub fn optional() -> Self {
        FieldRule::default()
    }

    pub fn range(min: f64, max: f64) -> Self {
        FieldRule {
            required: true,
            minimum: Some(min),
            maximum: Some(max),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ColumnDef {
    pub name: String,
    pub kind: ColumnKind,
    pub primary_key: bool,
    pub nullable: bool,
    /// Column has a DB default (gen_random_uuid(), NOW()); omitted from INSERT
    /// when the body does not provide a value.
    pub has_default: bool,
    pub rule: FieldRule,
}

/// Foreign key: `column` on this entity references the primary key of the
/// entity at `references` (a path segment).
#[derive(Clone, Debug)]
pub struct Relation {
    pub column: String,
    pub references: String,
}

#[derive(Clone, Debug)]
pub struct EntityDef {
    pub table: String,
    /// URL segment for both the API resource and the admin list route
    /// (e.g. "menu-items" -> `/api/menu-items`, list route `/menu-items`).
    pub path_segment: String,
    pub columns: Vec<ColumnDef>,
    pub relations: Vec<Relation>,
}

impl EntityDef {
    pub fn pk(&self) -> &ColumnDef {
        self.columns
            .iter()
            .find(|c| c.primary_key)
            .expect("entity defined without a primary key column")
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn relation_for(&self, column: &str) -> Option<&Relation> {
        self.relations.iter().find(|r| r.column == column)
    }

    /// Columns rendered as form fields: everything except the primary key.
    pub fn form_columns(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().filter(|c| !c.primary_key)
    }

    pub fn api_path(&self) -> String {
        format!("/api/{}", self.path_segment)
    }

    /// Admin route the form navigates to after a successful submit.
    pub fn list_route(&self) -> String {
        format!("/{}", self.path_segment)
    }
}

/// The full entity model, indexed by path segment.
#[derive(Clone, Debug)]
pub struct AdminModel {
    pub entities: Vec<EntityDef>,
    by_path: HashMap<String, usize>,
}

impl AdminModel {
    pub fn new(entities: Vec<EntityDef>) -> Self {
        let by_path = entities
            .iter()
            .enumerate()
            .map(|(i, e)| (e.path_segment.clone(), i))
            .collect();
        AdminModel { entities, by_path }
    }

    pub fn entity_by_path(&self, path: &str) -> Option<&EntityDef> {
        self.by_path.get(path).map(|&i| &self.entities[i])
    }
}
