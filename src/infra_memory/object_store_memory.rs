use crate::application_port::UserProviderError;
use crate::domain_model::*;
use crate::domain_port::*;
use anyhow::{Context, Result};
use dashmap::DashMap;
use std::path::Path;
use tracing::trace;

/// Object store held in memory, optionally seeded from a JSON array of
/// records.
pub struct InMemoryObjectStore {
    objects: DashMap<ObjectId, ObjectRecord>,
}

impl InMemoryObjectStore {
    pub fn new() -> Self {
        InMemoryObjectStore {
            objects: DashMap::new(),
        }
    }

    pub fn from_records(records: impl IntoIterator<Item = ObjectRecord>) -> Self {
        let store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<ObjectRecord> =
            serde_json::from_str(json).context("parse object fixtures")?;
        Ok(Self::from_records(records))
    }

    pub fn load_fixtures(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read object fixtures {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Inserts or replaces the object with the record's id.
    pub fn insert(&self, record: ObjectRecord) {
        self.objects.insert(record.id, record);
    }

    pub fn remove(&self, id: ObjectId) -> Option<ObjectRecord> {
        self.objects.remove(&id).map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for InMemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ObjectFinder for InMemoryObjectStore {
    async fn find_by_field(
        &self,
        class: &ClassName,
        field: &str,
        value: &str,
        limit: FindLimit,
    ) -> Result<FindOutcome, UserProviderError> {
        let mut records: Vec<ObjectRecord> = self
            .objects
            .iter()
            .filter(|entry| &entry.class == class && entry.field_matches(field, value))
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by_key(|record| record.id);
        trace!(%class, field, matches = records.len(), "memory find_by_field");

        Ok(FindOutcome::from_records(records, limit))
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<ObjectRecord>, UserProviderError> {
        Ok(self.objects.get(&id).map(|entry| entry.value().clone()))
    }
}
