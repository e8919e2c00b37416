//! Apply the entity model to the database: CREATE TABLE and foreign keys.
//! Tables first, constraints second, so FK targets exist regardless of the
//! order entities are declared in.

use crate::error::AppError;
use crate::schema::{validate, AdminModel, ColumnKind, EntityDef};
use sqlx::PgPool;

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn column_ddl(entity: &EntityDef) -> Vec<String> {
    let mut defs = Vec::new();
    for c in &entity.columns {
        let mut def = format!("{} {}", quote(&c.name), c.kind.pg_type().to_uppercase());
        if !c.nullable {
            def.push_str(" NOT NULL");
        }
        if c.has_default {
            match c.kind {
                ColumnKind::Uuid => def.push_str(" DEFAULT gen_random_uuid()"),
                ColumnKind::Timestamptz => def.push_str(" DEFAULT NOW()"),
                _ => {}
            }
        }
        defs.push(def);
    }
    defs.push(format!("PRIMARY KEY ({})", quote(&entity.pk().name)));
    defs
}

/// Idempotent DDL for the whole model. Existing tables are left alone;
/// duplicate FK constraints are tolerated.
pub async fn apply_migrations(pool: &PgPool, model: &AdminModel) -> Result<(), AppError> {
    validate(model)?;

    for entity in &model.entities {
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {} (\n  {}\n)",
            quote(&entity.table),
            column_ddl(entity).join(",\n  ")
        );
        tracing::debug!(sql = %sql, "migrate");
        sqlx::query(&sql).execute(pool).await?;
    }

    for entity in &model.entities {
        for rel in &entity.relations {
            let target = model
                .entity_by_path(&rel.references)
                .expect("validated above");
            let constraint = format!("{}_{}_fkey", entity.table, rel.column);
            let sql = format!(
                "ALTER TABLE {} ADD CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({})",
                quote(&entity.table),
                quote(&constraint),
                quote(&rel.column),
                quote(&target.table),
                quote(&target.pk().name),
            );
            tracing::debug!(sql = %sql, "migrate");
            // Re-running against an existing schema hits duplicate_object.
            let _ = sqlx::query(&sql).execute(pool).await;
        }
    }
    Ok(())
}
