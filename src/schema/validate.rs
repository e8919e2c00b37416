//! Model validation: referential integrity and path consistency.

use crate::error::SchemaError;
use crate::schema::types::{AdminModel, ColumnKind};
use std::collections::HashSet;

pub fn validate(model: &AdminModel) -> Result<(), SchemaError> {
    let mut path_segments = HashSet::new();
    for e in &model.entities {
        if !path_segments.insert(e.path_segment.as_str()) {
            return Err(SchemaError::DuplicatePathSegment(e.path_segment.clone()));
        }

        let pks: Vec<_> = e.columns.iter().filter(|c| c.primary_key).collect();
        if pks.len() != 1 || pks[0].kind != ColumnKind::Uuid {
            return Err(SchemaError::InvalidPrimaryKey {
                table: e.table.clone(),
            });
        }

        for r in &e.relations {
            let col = e
                .column(&r.column)
                .ok_or_else(|| SchemaError::UnknownColumn {
                    table: e.table.clone(),
                    column: r.column.clone(),
                })?;
            if col.kind != ColumnKind::Uuid {
                return Err(SchemaError::UnknownColumn {
                    table: e.table.clone(),
                    column: r.column.clone(),
                });
            }
            if model.entity_by_path(&r.references).is_none() {
                return Err(SchemaError::MissingRelationTarget {
                    table: e.table.clone(),
                    column: r.column.clone(),
                    target: r.references.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::{ColumnDef, EntityDef, FieldRule, Relation};

    fn entity(table: &str, path: &str, relations: Vec<Relation>) -> EntityDef {
        EntityDef {
            table: table.into(),
            path_segment: path.into(),
            columns: vec![ColumnDef {
                name: "id".into(),
                kind: ColumnKind::Uuid,
                primary_key: true,
                nullable: false,
                has_default: true,
                rule: FieldRule::optional(),
            }],
            relations,
        }
    }

    #[test]
    fn duplicate_path_segment_rejected() {
        let model = AdminModel::new(vec![entity("a", "same", vec![]), entity("b", "same", vec![])]);
        assert!(matches!(
            validate(&model),
            Err(SchemaError::DuplicatePathSegment(_))
        ));
    }

    #[test]
    fn dangling_relation_rejected() {
        let mut e = entity("a", "a", vec![]);
        e.columns.push(ColumnDef {
            name: "b_id".into(),
            kind: ColumnKind::Uuid,
            primary_key: false,
            nullable: false,
            has_default: false,
            rule: FieldRule::required(),
        });
        e.relations.push(Relation {
            column: "b_id".into(),
            references: "missing".into(),
        });
        let model = AdminModel::new(vec![e]);
        assert!(matches!(
            validate(&model),
            Err(SchemaError::MissingRelationTarget { .. })
        ));
    }

    #[test]
    fn relation_on_unknown_column_rejected() {
        let mut e = entity("a", "a", vec![]);
        e.relations.push(Relation {
            column: "nope".into(),
            references: "a".into(),
        });
        let model = AdminModel::new(vec![e]);
        assert!(matches!(
            validate(&model),
            Err(SchemaError::UnknownColumn { .. })
        ));
    }
}
