//! Board Records
//!
//! Task and file rows as returned by the persistence service. Both are
//! read-only here: nothing in the board creates, mutates or deletes them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::query::Collection;

/// Core trait for rows the board can fetch and render
pub trait Record: DeserializeOwned + Clone + Send + Sync + 'static {
    /// Table the rows are read from
    const COLLECTION: Collection;

    /// Stable render key
    fn id(&self) -> &RecordId;

    /// Client the row is scoped to
    fn client_id(&self) -> &str;
}

/// Opaque row identity; the service may hand out integers or UUID strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{}", id),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId::Int(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId::Text(id.to_string())
    }
}

/// Missing and `null` columns both read as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A column whose meaning the board does not interpret, only displays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayValue(pub serde_json::Value);

impl std::fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            serde_json::Value::Null => Ok(()),
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// A row of the `tasks` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: RecordId,
    /// Short label shown as the card title
    #[serde(default, deserialize_with = "null_as_default")]
    pub task: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub priority: DisplayValue,
    /// Date-time text as stored; absent or blank means no due line
    #[serde(default)]
    pub due: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    pub client_id: String,
    /// Only used by the service for ordering
    #[serde(default)]
    pub inserted_at: Option<String>,
}

impl Record for TaskRecord {
    const COLLECTION: Collection = Collection::Tasks;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn client_id(&self) -> &str {
        &self.client_id
    }
}

/// A row of the `files` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: RecordId,
    /// Path-like location; the card shows its last segment
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_url: String,
    /// Owning task, never joined
    #[serde(default)]
    pub task_id: Option<RecordId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    pub client_id: String,
    #[serde(default)]
    pub inserted_at: Option<String>,
}

impl Record for FileRecord {
    const COLLECTION: Collection = Collection::Files;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn client_id(&self) -> &str {
        &self.client_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_decodes_full_row() {
        let task: TaskRecord = serde_json::from_value(json!({
            "id": "7f0c1a9e-3b1d-4c55-9d61-2f7b3f5f8a10",
            "task": "Edit promo video",
            "status": "in_progress",
            "priority": "high",
            "due": "2024-06-01T17:00:00+00:00",
            "created_by": "agent:scheduler",
            "client_id": "redrose_001",
            "inserted_at": "2024-05-20T09:12:44.120394+00:00",
            "extra_column": true
        }))
        .unwrap();

        assert_eq!(task.id, RecordId::from("7f0c1a9e-3b1d-4c55-9d61-2f7b3f5f8a10"));
        assert_eq!(task.status, "in_progress");
        assert_eq!(task.priority.to_string(), "high");
        assert_eq!(task.created_by.as_deref(), Some("agent:scheduler"));
        assert_eq!(task.client_id(), "redrose_001");
    }

    #[test]
    fn test_task_decodes_sparse_row() {
        let task: TaskRecord = serde_json::from_value(json!({
            "id": 12,
            "task": "Call back",
            "status": "to_do",
            "priority": null,
            "due": null,
            "created_by": null,
            "client_id": "columbia_001"
        }))
        .unwrap();

        assert_eq!(task.id, RecordId::Int(12));
        assert_eq!(task.priority.to_string(), "");
        assert!(task.due.is_none());
        assert!(task.created_by.is_none());
        assert!(task.inserted_at.is_none());
    }

    #[test]
    fn test_numeric_priority_displays_plainly() {
        let task: TaskRecord = serde_json::from_value(json!({
            "id": 1, "task": "t", "status": "done", "priority": 3, "client_id": "c"
        }))
        .unwrap();
        assert_eq!(task.priority.to_string(), "3");
    }

    #[test]
    fn test_missing_status_is_empty() {
        let file: FileRecord = serde_json::from_value(json!({
            "id": 4, "file_url": "a/b.txt", "client_id": "c"
        }))
        .unwrap();
        assert_eq!(file.status, "");
        assert!(file.task_id.is_none());
    }

    #[test]
    fn test_null_text_columns_read_as_empty() {
        let task: TaskRecord = serde_json::from_value(json!({
            "id": 5, "task": null, "status": null, "client_id": "redrose_001"
        }))
        .unwrap();
        assert_eq!(task.task, "");
        assert_eq!(task.status, "");

        let file: FileRecord = serde_json::from_value(json!({
            "id": 6, "file_url": null, "status": null, "client_id": "redrose_001"
        }))
        .unwrap();
        assert_eq!(file.file_url, "");
        assert_eq!(file.status, "");
    }

    #[test]
    fn test_record_id_display() {
        assert_eq!(RecordId::Int(42).to_string(), "42");
        assert_eq!(RecordId::from("abc").to_string(), "abc");
    }

    #[test]
    fn test_row_without_client_is_rejected() {
        let result = serde_json::from_value::<FileRecord>(json!({ "id": 1, "file_url": "x" }));
        assert!(result.is_err());
    }
}
