//! Form-page state: values, per-field errors, and the submit cycle
//! `idle -> submitting -> (success: navigate) | (failure: error, idle)`.

use crate::client::{ApiClient, ClientError};
use crate::form::cache::RecordCache;
use crate::form::validate::validate_values;
use crate::schema::{ColumnKind, EntityDef};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// Where the router goes after a successful submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub route: String,
}

#[derive(Debug)]
pub struct FormPage {
    entity: EntityDef,
    mode: FormMode,
    phase: FormPhase,
    pub values: HashMap<String, Value>,
    /// Per-field validation messages, refreshed on every set_value.
    pub errors: HashMap<String, String>,
    /// Last submission failure, shown inline until the next attempt.
    pub submit_error: Option<ClientError>,
}

impl FormPage {
    /// Empty create form: date fields default to today, everything else
    /// starts blank.
    pub fn create(entity: &EntityDef) -> Self {
        let mut values = HashMap::new();
        for col in entity.form_columns() {
            let initial = match col.kind {
                ColumnKind::Timestamptz => Value::String(today()),
                ColumnKind::Text | ColumnKind::Uuid => Value::String(String::new()),
                _ => Value::Null,
            };
            values.insert(col.name.clone(), initial);
        }
        let errors = validate_values(entity, &values);
        FormPage {
            entity: entity.clone(),
            mode: FormMode::Create,
            phase: FormPhase::Idle,
            values,
            errors,
            submit_error: None,
        }
    }

    /// Edit form pre-populated from a fetched record.
    pub fn edit(entity: &EntityDef, id: impl Into<String>, record: &Value) -> Self {
        let mut values = HashMap::new();
        for col in entity.form_columns() {
            let v = record.get(&col.name).cloned().unwrap_or(Value::Null);
            values.insert(col.name.clone(), v);
        }
        let errors = validate_values(entity, &values);
        FormPage {
            entity: entity.clone(),
            mode: FormMode::Edit { id: id.into() },
            phase: FormPhase::Idle,
            values,
            errors,
            submit_error: None,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn entity(&self) -> &EntityDef {
        &self.entity
    }

    pub fn set_value(&mut self, field: &str, value: Value) {
        self.values.insert(field.to_string(), value);
        self.errors = validate_values(&self.entity, &self.values);
    }

    /// Submit-control gate: enabled only when idle and every rule passes.
    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Idle && self.errors.is_empty()
    }

    /// Run the submit cycle. On success the form resets (create) or mutates
    /// the cached record (edit) and yields the list-route navigation; on
    /// failure the error is stored and the form returns to idle.
    pub async fn submit(
        &mut self,
        client: &ApiClient,
        cache: &mut RecordCache,
    ) -> Option<Navigation> {
        if !self.can_submit() {
            return None;
        }
        self.submit_error = None;
        self.phase = FormPhase::Submitting;

        let body = submit_body(&self.values);
        let result: Result<Value, ClientError> = match &self.mode {
            FormMode::Create => client.create(&self.entity.path_segment, &body).await,
            FormMode::Edit { id } => {
                client
                    .update_by_id(&self.entity.path_segment, id, &body)
                    .await
            }
        };

        self.phase = FormPhase::Idle;
        match result {
            Ok(record) => {
                if let FormMode::Edit { id } = &self.mode {
                    cache.mutate(id, record);
                }
                self.reset();
                Some(Navigation {
                    route: self.entity.list_route(),
                })
            }
            Err(e) => {
                self.submit_error = Some(e);
                None
            }
        }
    }

    fn reset(&mut self) {
        let fresh = FormPage::create(&self.entity);
        self.values = fresh.values;
        self.errors = fresh.errors;
    }
}

/// Blank optional fields are dropped from the request body so the store's
/// defaults and NULLs apply.
fn submit_body(values: &HashMap<String, Value>) -> serde_json::Map<String, Value> {
    values
        .iter()
        .filter(|(_, v)| match v {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            _ => true,
        })
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::restaurant_model;
    use serde_json::json;

    #[test]
    fn create_form_starts_blocked_on_required_fields() {
        let model = restaurant_model();
        let entity = model.entity_by_path("menu-items").unwrap();
        let mut form = FormPage::create(entity);
        assert!(!form.can_submit());
        assert!(form.errors.contains_key("name"));

        form.set_value("name", json!("Carbonara"));
        assert!(!form.can_submit(), "price and menu_id are still missing");
        form.set_value("price", json!(1450));
        form.set_value("menu_id", json!("9f2c6f0a-7f3b-4c22-9d5f-0b1a2c3d4e5f"));
        assert!(form.can_submit());
    }

    #[test]
    fn date_fields_default_to_today() {
        let model = restaurant_model();
        let entity = model.entity_by_path("reservations").unwrap();
        let form = FormPage::create(entity);
        let date = form.values.get("date").unwrap().as_str().unwrap();
        assert!(chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok());
        assert!(!form.errors.contains_key("date"));
    }

    #[test]
    fn edit_form_prefills_from_record() {
        let model = restaurant_model();
        let entity = model.entity_by_path("menu-items").unwrap();
        let record = json!({
            "id": "9f2c6f0a-7f3b-4c22-9d5f-0b1a2c3d4e5f",
            "name": "Tiramisu",
            "description": null,
            "price": 700,
            "menu_id": "1a2b3c4d-0000-4e5f-8a9b-c0d1e2f3a4b5",
            "created_at": "2026-08-26T00:00:00Z",
            "updated_at": "2026-08-26T00:00:00Z",
        });
        let form = FormPage::edit(entity, "9f2c6f0a-7f3b-4c22-9d5f-0b1a2c3d4e5f", &record);
        assert_eq!(form.values["price"], json!(700));
        assert!(form.can_submit());
    }

    #[test]
    fn blank_optionals_are_dropped_from_submit_body() {
        let values: HashMap<String, Value> = [
            ("name".to_string(), json!("Pasta")),
            ("description".to_string(), json!("")),
            ("price".to_string(), json!(900)),
        ]
        .into();
        let body = submit_body(&values);
        assert!(body.contains_key("name"));
        assert!(!body.contains_key("description"));
    }
}
