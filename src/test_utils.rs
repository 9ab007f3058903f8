//! Fixtures and stub ports shared by the unit tests.

use std::sync::{Arc, Mutex};

use crate::application_port::UserProviderError;
use crate::domain_model::*;
use crate::domain_port::*;
use crate::infra_memory::{InMemoryClassRegistry, InMemoryObjectStore};

pub const USER_CLASS: &str = "App\\User";
pub const ADMIN_CLASS: &str = "App\\Admin";
pub const ASSET_CLASS: &str = "App\\Asset";

pub fn registry() -> Arc<dyn ClassRegistry> {
    Arc::new(InMemoryClassRegistry::from_descriptors([
        ClassDescriptor::new(USER_CLASS, Some(BASE_OBJECT_CLASS)).with_fields(["username", "email"]),
        ClassDescriptor::new(ADMIN_CLASS, Some(USER_CLASS)),
        ClassDescriptor::new(ASSET_CLASS, None),
    ]))
}

pub fn seeded_store() -> InMemoryObjectStore {
    InMemoryObjectStore::from_records([
        ObjectRecord::new(1, USER_CLASS)
            .with_field("username", "alice")
            .with_field("email", "alice@example.com"),
        ObjectRecord::new(2, USER_CLASS)
            .with_field("username", "bob")
            .with_field("email", "bob@example.com"),
        ObjectRecord::new(3, ASSET_CLASS).with_field("username", "alice"),
    ])
}

type FieldCall = (String, String, String, FindLimit);

/// Finder that answers every by-field lookup with a canned outcome and
/// records what it was asked.
pub struct StubFinder {
    outcome: Result<FindOutcome, String>,
    field_calls: Mutex<Vec<FieldCall>>,
}

impl StubFinder {
    pub fn returning(outcome: FindOutcome) -> Self {
        StubFinder {
            outcome: Ok(outcome),
            field_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        StubFinder {
            outcome: Err(message.to_string()),
            field_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn field_calls(&self) -> Vec<FieldCall> {
        self.field_calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ObjectFinder for StubFinder {
    async fn find_by_field(
        &self,
        class: &ClassName,
        field: &str,
        value: &str,
        limit: FindLimit,
    ) -> Result<FindOutcome, UserProviderError> {
        self.field_calls.lock().unwrap().push((
            class.to_string(),
            field.to_string(),
            value.to_string(),
            limit,
        ));
        self.outcome.clone().map_err(UserProviderError::Store)
    }

    async fn find_by_id(&self, _id: ObjectId) -> Result<Option<ObjectRecord>, UserProviderError> {
        Ok(None)
    }
}
