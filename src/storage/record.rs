//! Book record type.
//!
//! A book is an open record: arbitrary client-supplied key/value fields
//! plus a distinguished, server-generated `id`. No schema is enforced —
//! `title` and `author` are conventions, not requirements.

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier field present on every persisted record.
pub const ID_FIELD: &str = "id";

/// Length of generated id tokens.
pub const ID_LEN: usize = 8;

/// Arbitrary key/value fields supplied by a client.
pub type Fields = Map<String, Value>;

/// A single book record.
///
/// Serializes as a plain JSON object. The `id` field is server-controlled
/// and immutable after creation; every other field passes through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Book {
    fields: Fields,
}

impl Book {
    /// Build a new record from client fields with a freshly generated id.
    /// A client-supplied `id` key is discarded.
    pub(crate) fn create(mut fields: Fields) -> Book {
        fields.remove(ID_FIELD);
        fields.insert(ID_FIELD.to_string(), Value::String(generate_id()));
        Book { fields }
    }

    /// The record's identifier.
    pub fn id(&self) -> &str {
        self.fields
            .get(ID_FIELD)
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// Shallow-merge `fields` into this record: new keys are added,
    /// existing keys overwritten, `id` left untouched even if supplied.
    /// Nested structures are replaced, not recursively merged.
    pub(crate) fn merge(&mut self, fields: Fields) {
        for (key, value) in fields {
            if key != ID_FIELD {
                self.fields.insert(key, value);
            }
        }
    }

    /// Look up a single field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// All fields, including `id`.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }
}

/// Generate a fresh record id: [`ID_LEN`] random alphanumeric characters.
/// Collisions are not checked; at this length and the expected collection
/// sizes the probability is treated as negligible.
pub fn generate_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LEN)
        .map(char::from)
        .collect()
}
