//! The built-in restaurant admin model: users, restaurants, menus, menu
//! items, reservations, staff, feedbacks.
//!
//! Every table gets a uuid primary key with a DB default plus form-visible
//! created_at/updated_at timestamps.

use super::types::{AdminModel, ColumnDef, ColumnKind, EntityDef, FieldRule, Relation};

fn id() -> ColumnDef {
    ColumnDef {
        name: "id".into(),
        kind: ColumnKind::Uuid,
        primary_key: true,
        nullable: false,
        has_default: true,
        rule: FieldRule::optional(),
    }
}

fn col(name: &str, kind: ColumnKind, rule: FieldRule) -> ColumnDef {
    ColumnDef {
        name: name.into(),
        kind,
        primary_key: false,
        nullable: !rule.required,
        has_default: false,
        rule,
    }
}

fn timestamp(name: &str) -> ColumnDef {
    ColumnDef {
        name: name.into(),
        kind: ColumnKind::Timestamptz,
        primary_key: false,
        nullable: false,
        has_default: true,
        rule: FieldRule::required(),
    }
}

fn fk(column: &str, references: &str) -> Relation {
    Relation {
        column: column.into(),
        references: references.into(),
    }
}

pub fn restaurant_model() -> AdminModel {
    AdminModel::new(vec![
        EntityDef {
            table: "users".into(),
            path_segment: "users".into(),
            columns: vec![
                id(),
                col("email", ColumnKind::Text, FieldRule::required()),
                col("first_name", ColumnKind::Text, FieldRule::optional()),
                col("last_name", ColumnKind::Text, FieldRule::optional()),
                timestamp("created_at"),
                timestamp("updated_at"),
            ],
            relations: vec![],
        },
        EntityDef {
            table: "restaurants".into(),
            path_segment: "restaurants".into(),
            columns: vec![
                id(),
                col("name", ColumnKind::Text, FieldRule::required()),
                col("description", ColumnKind::Text, FieldRule::optional()),
                col("location", ColumnKind::Text, FieldRule::optional()),
                col("user_id", ColumnKind::Uuid, FieldRule::required()),
                timestamp("created_at"),
                timestamp("updated_at"),
            ],
            relations: vec![fk("user_id", "users")],
        },
        EntityDef {
            table: "menus".into(),
            path_segment: "menus".into(),
            columns: vec![
                id(),
                col("name", ColumnKind::Text, FieldRule::required()),
                col("description", ColumnKind::Text, FieldRule::optional()),
                col("restaurant_id", ColumnKind::Uuid, FieldRule::required()),
                timestamp("created_at"),
                timestamp("updated_at"),
            ],
            relations: vec![fk("restaurant_id", "restaurants")],
        },
        EntityDef {
            table: "menu_items".into(),
            path_segment: "menu-items".into(),
            columns: vec![
                id(),
                col("name", ColumnKind::Text, FieldRule::required()),
                col("description", ColumnKind::Text, FieldRule::optional()),
                col("price", ColumnKind::Integer, FieldRule::required()),
                col("menu_id", ColumnKind::Uuid, FieldRule::required()),
                timestamp("created_at"),
                timestamp("updated_at"),
            ],
            relations: vec![fk("menu_id", "menus")],
        },
        EntityDef {
            table: "reservations".into(),
            path_segment: "reservations".into(),
            columns: vec![
                id(),
                col("date", ColumnKind::Timestamptz, FieldRule::required()),
                col("time", ColumnKind::Timestamptz, FieldRule::required()),
                col("customer_id", ColumnKind::Uuid, FieldRule::required()),
                col("restaurant_id", ColumnKind::Uuid, FieldRule::required()),
                timestamp("created_at"),
                timestamp("updated_at"),
            ],
            relations: vec![fk("customer_id", "users"), fk("restaurant_id", "restaurants")],
        },
        EntityDef {
            table: "staff".into(),
            path_segment: "staff".into(),
            columns: vec![
                id(),
                col("user_id", ColumnKind::Uuid, FieldRule::required()),
                col("restaurant_id", ColumnKind::Uuid, FieldRule::required()),
                timestamp("created_at"),
                timestamp("updated_at"),
            ],
            relations: vec![fk("user_id", "users"), fk("restaurant_id", "restaurants")],
        },
        EntityDef {
            table: "feedbacks".into(),
            path_segment: "feedbacks".into(),
            columns: vec![
                id(),
                col("rating", ColumnKind::Integer, FieldRule::range(1.0, 5.0)),
                col("comment", ColumnKind::Text, FieldRule::optional()),
                col("customer_id", ColumnKind::Uuid, FieldRule::required()),
                col("restaurant_id", ColumnKind::Uuid, FieldRule::required()),
                timestamp("created_at"),
                timestamp("updated_at"),
            ],
            relations: vec![fk("customer_id", "users"), fk("restaurant_id", "restaurants")],
        },
    ])
}
