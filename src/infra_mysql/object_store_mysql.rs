use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::*;
use serde_json::{Map, Value};
use sqlx::mysql::MySqlRow;
use sqlx::types::Json;
use sqlx::{MySqlPool, Row};
use tracing::trace;

pub const OBJECTS_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS objects (
    o_id    BIGINT UNSIGNED NOT NULL PRIMARY KEY,
    o_class VARCHAR(255)    NOT NULL,
    data    JSON            NOT NULL,
    INDEX idx_objects_class (o_class)
)
"#;

/// Object store over a single `objects` table, one JSON document per object.
pub struct MySqlObjectStore {
    pool: MySqlPool,
}

impl MySqlObjectStore {
    pub fn new(pool: MySqlPool) -> Self {
        MySqlObjectStore { pool }
    }

    pub async fn connect(dsn: &str) -> anyhow::Result<Self> {
        let pool = MySqlPool::connect(dsn).await?;
        Ok(MySqlObjectStore::new(pool))
    }

    pub async fn ensure_schema(&self) -> Result<(), UserProviderError> {
        sqlx::query(OBJECTS_SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(|e| UserProviderError::Store(format!("create objects table: {e}")))?;
        Ok(())
    }

    /// JSON path addressing a top-level member, quoted so any field name is
    /// taken literally.
    fn field_path(field: &str) -> String {
        let escaped = field.replace('\\', "\\\\").replace('"', "\\\"");
        format!("$.\"{escaped}\"")
    }

    fn row_to_record(row: MySqlRow) -> Result<ObjectRecord, UserProviderError> {
        let id: ObjectId = row
            .try_get("o_id")
            .map_err(|e| UserProviderError::Store(e.to_string()))?;
        let class: String = row
            .try_get("o_class")
            .map_err(|e| UserProviderError::Store(e.to_string()))?;
        let Json(fields): Json<Map<String, Value>> = row
            .try_get("data")
            .map_err(|e| UserProviderError::Store(e.to_string()))?;

        Ok(ObjectRecord {
            id,
            class: ClassName(class),
            fields,
        })
    }
}

#[async_trait::async_trait]
impl ObjectFinder for MySqlObjectStore {
    async fn find_by_field(
        &self,
        class: &ClassName,
        field: &str,
        value: &str,
        limit: FindLimit,
    ) -> Result<FindOutcome, UserProviderError> {
        let row_limit = match limit {
            FindLimit::One => 1,
            FindLimit::Many(n) => n,
        };

        let rows = sqlx::query(
            r#"
SELECT o_id, o_class, data
FROM objects
WHERE o_class = ? AND JSON_UNQUOTE(JSON_EXTRACT(data, ?)) = ?
ORDER BY o_id
LIMIT ?
"#,
        )
        .bind(class.as_str())
        .bind(Self::field_path(field))
        .bind(value)
        .bind(row_limit as u64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| UserProviderError::Store(format!("query objects by {field}: {e}")))?;
        trace!(%class, field, matches = rows.len(), "mysql find_by_field");

        let records = rows
            .into_iter()
            .map(Self::row_to_record)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FindOutcome::from_records(records, limit))
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<ObjectRecord>, UserProviderError> {
        let row = sqlx::query("SELECT o_id, o_class, data FROM objects WHERE o_id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserProviderError::Store(format!("query object {id}: {e}")))?;

        row.map(Self::row_to_record).transpose()
    }
}
