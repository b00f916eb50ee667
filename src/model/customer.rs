use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A runner registration as stored in the realtime database.
///
/// The hosted service owns these records: it assigns the identifier on
/// creation and other clients may attach fields this application does not
/// model, which round-trip untouched through `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Key assigned by the database service; `None` until persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bib: Option<u32>,
    /// Finish time in whole seconds; `None` while the runner is on course.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<NaiveDateTime>,
    /// Fields present in the stored record that this app does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Customer {
    pub fn finished(&self) -> bool {
        self.finish_seconds.is_some()
    }

    /// Applies a field-level patch the way the database service does: each
    /// entry overwrites the named field, a null value deletes it. Fails if
    /// the patched record no longer decodes as a customer.
    pub fn merge_fields(&self, fields: &Map<String, Value>) -> Result<Customer, serde_json::Error> {
        let mut value = serde_json::to_value(self)?;
        if let Value::Object(record) = &mut value {
            for (field, patch) in fields {
                if patch.is_null() {
                    record.remove(field);
                } else {
                    record.insert(field.clone(), patch.clone());
                }
            }
        }

        serde_json::from_value(value)
    }
}
