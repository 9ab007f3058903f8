use serde::{Deserialize, Serialize};
use std::fmt;

/// Root of the content-object hierarchy. Every user class must descend from it.
pub const BASE_OBJECT_CLASS: &str = "DataObject";

/// Fully qualified name of a content-object class.
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassName(pub String);

impl ClassName {
    pub fn new(name: impl Into<String>) -> Self {
        ClassName(name.into())
    }

    pub fn base() -> Self {
        ClassName(BASE_OBJECT_CLASS.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ClassName {
    fn from(s: &str) -> Self {
        ClassName(s.to_string())
    }
}

impl From<String> for ClassName {
    fn from(s: String) -> Self {
        ClassName(s)
    }
}

/// Registry entry for a content-object class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub name: ClassName,
    #[serde(default)]
    pub parent: Option<ClassName>,
    /// Fields the class can be queried by. Empty means "not declared".
    #[serde(default)]
    pub fields: Vec<String>,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<ClassName>, parent: Option<&str>) -> Self {
        ClassDescriptor {
            name: name.into(),
            parent: parent.map(ClassName::from),
            fields: Vec::new(),
        }
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn declares_field(&self, field: &str) -> bool {
        self.fields.is_empty() || self.fields.iter().any(|f| f == field)
    }
}
