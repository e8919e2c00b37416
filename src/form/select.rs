//! Foreign-key select: options loaded from the related entity's list
//! endpoint, each keyed and labeled by the record id.

use crate::client::{ApiClient, ClientError};
use crate::schema::{EntityDef, Relation};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FkOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug)]
pub struct FkSelect {
    /// Form field this select binds to (e.g. "restaurant_id").
    pub field: String,
    /// Path segment of the related entity; also used for the label/placeholder.
    pub related: String,
    options: Vec<FkOption>,
    loaded: bool,
}

impl FkSelect {
    pub fn new(relation: &Relation) -> Self {
        FkSelect {
            field: relation.column.clone(),
            related: relation.references.clone(),
            options: Vec::new(),
            loaded: false,
        }
    }

    pub fn placeholder(&self) -> String {
        format!("Select {}", self.related)
    }

    /// Fetch candidate records and keep one option per record id.
    pub async fn load(&mut self, client: &ApiClient) -> Result<(), ClientError> {
        let records: Vec<Value> = client.list(&self.related).await?;
        self.options = records
            .iter()
            .filter_map(|r| r.get("id").and_then(Value::as_str))
            .map(|id| FkOption {
                value: id.to_string(),
                label: id.to_string(),
            })
            .collect();
        self.loaded = true;
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn options(&self) -> &[FkOption] {
        &self.options
    }
}

/// One select per declared relation of the entity.
pub fn fk_selects(entity: &EntityDef) -> Vec<FkSelect> {
    entity.relations.iter().map(FkSelect::new).collect()
}
