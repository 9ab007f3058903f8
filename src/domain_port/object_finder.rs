use crate::application_port::UserProviderError;
use crate::domain_model::{ClassName, ObjectId, ObjectRecord};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FindLimit {
    /// Single-result form: at most one record, never a list.
    One,
    Many(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FindOutcome {
    None,
    One(ObjectRecord),
    Many(Vec<ObjectRecord>),
}

impl FindOutcome {
    /// Shape `records` according to `limit`.
    pub fn from_records(mut records: Vec<ObjectRecord>, limit: FindLimit) -> Self {
        match limit {
            FindLimit::One => match records.into_iter().next() {
                Some(record) => FindOutcome::One(record),
                None => FindOutcome::None,
            },
            FindLimit::Many(n) => {
                records.truncate(n);
                FindOutcome::Many(records)
            }
        }
    }
}

/// Lookups the object store exposes per class.
#[async_trait::async_trait]
pub trait ObjectFinder: Send + Sync {
    /// Objects of exactly `class` whose `field` equals `value`.
    async fn find_by_field(
        &self,
        class: &ClassName,
        field: &str,
        value: &str,
        limit: FindLimit,
    ) -> Result<FindOutcome, UserProviderError>;

    /// The object stored under `id`, whatever its class.
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<ObjectRecord>, UserProviderError>;
}
