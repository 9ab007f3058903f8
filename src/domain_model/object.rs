use super::ClassName;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(
    Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(transparent)]
#[serde(transparent)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ObjectId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(ObjectId)
    }
}

/// Capability shared by everything the object store persists.
pub trait PersistentObject {
    fn id(&self) -> ObjectId;
    fn class_name(&self) -> &ClassName;
}

/// A content object as handed out by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub id: ObjectId,
    pub class: ClassName,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl ObjectRecord {
    pub fn new(id: u64, class: impl Into<ClassName>) -> Self {
        ObjectRecord {
            id: ObjectId(id),
            class: class.into(),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Whether `field` holds `value`, comparing strings by content and
    /// scalars by their textual form.
    pub fn field_matches(&self, field: &str, value: &str) -> bool {
        match self.fields.get(field) {
            Some(Value::String(s)) => s == value,
            Some(Value::Number(n)) => n.to_string() == value,
            Some(Value::Bool(b)) => b.to_string() == value,
            _ => false,
        }
    }
}

impl PersistentObject for ObjectRecord {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn class_name(&self) -> &ClassName {
        &self.class
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_matches_compares_scalars_textually() {
        let record = ObjectRecord::new(7, "App\\User")
            .with_field("username", "alice")
            .with_field("pin", 1234)
            .with_field("active", true)
            .with_field("roles", serde_json::json!(["admin"]));

        assert!(record.field_matches("username", "alice"));
        assert!(!record.field_matches("username", "Alice"));
        assert!(record.field_matches("pin", "1234"));
        assert!(record.field_matches("active", "true"));
        assert!(!record.field_matches("roles", "admin"));
        assert!(!record.field_matches("missing", "alice"));
    }

    #[test]
    fn record_deserializes_with_default_fields() {
        let record: ObjectRecord =
            serde_json::from_str(r#"{"id": 3, "class": "App\\User"}"#).unwrap();
        assert_eq!(record.id(), ObjectId(3));
        assert_eq!(record.class_name().as_str(), "App\\User");
        assert!(record.fields.is_empty());
    }
}
