//! Client-side record cache keyed by id; fetches populate it, successful
//! updates mutate it in place.

use crate::client::{ApiClient, ClientError};
use crate::schema::EntityDef;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct RecordCache {
    entries: HashMap<String, Value>,
}

impl RecordCache {
    pub fn new() -> Self {
        RecordCache::default()
    }

    pub fn get(&self, id: &str) -> Option<&Value> {
        self.entries.get(id)
    }

    /// Cached record, or a fetch from the entity's by-id endpoint.
    pub async fn get_or_fetch(
        &mut self,
        client: &ApiClient,
        entity: &EntityDef,
        id: &str,
    ) -> Result<Value, ClientError> {
        if let Some(v) = self.entries.get(id) {
            return Ok(v.clone());
        }
        let record: Value = client.get_by_id(&entity.path_segment, id).await?;
        self.entries.insert(id.to_string(), record.clone());
        Ok(record)
    }

    /// Replace the cached record after a successful update.
    pub fn mutate(&mut self, id: &str, record: Value) {
        self.entries.insert(id.to_string(), record);
    }
}
