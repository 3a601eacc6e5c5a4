//! Read-only record sources. Each fetch returns a fresh snapshot; nothing is cached between calls.

use crate::errors::QueryError;
use indexmap::IndexMap;
use log::{debug, warn};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Field mapping of one stored record, keyed by storage key.
pub type Fields = Map<String, Value>;

/// Record identifier to fields, in the source's iteration order.
pub type Snapshot = IndexMap<String, Fields>;

pub trait RecordSource {
    fn fetch_all(&self) -> Result<Snapshot, QueryError>;

    fn fetch_one(&self, id: &str) -> Result<Option<Fields>, QueryError>;

    fn known_names(&self) -> Result<Vec<String>, QueryError> {
        Ok(self.fetch_all()?.into_keys().collect())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Snapshot,
}

impl MemorySource {
    /// Builds a source from stored-shape JSON objects, keyed by their `MountainName`.
    /// Objects without a string `MountainName` are skipped.
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        let records = values
            .into_iter()
            .filter_map(|value| match value {
                Value::Object(fields) => {
                    let id = fields.get("MountainName")?.as_str()?.to_string();
                    Some((id, fields))
                }
                _ => None,
            })
            .collect();
        Self { records }
    }
}

impl RecordSource for MemorySource {
    fn fetch_all(&self) -> Result<Snapshot, QueryError> {
        Ok(self.records.clone())
    }

    fn fetch_one(&self, id: &str) -> Result<Option<Fields>, QueryError> {
        Ok(self.records.get(id).cloned())
    }

    fn known_names(&self) -> Result<Vec<String>, QueryError> {
        Ok(self.records.keys().cloned().collect())
    }
}

/// Document store kept in a single JSON file: `{ "<id>": { <fields> }, ... }`.
/// The file is read again on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Snapshot, QueryError> {
        let content = fs_err::read_to_string(&self.path)
            .map_err(|e| QueryError::Source(e.to_string()))?;
        let document: Map<String, Value> = serde_json::from_str(&content).map_err(|e| {
            QueryError::Source(format!("{}: {}", self.path.display(), e))
        })?;
        let snapshot: Snapshot = document
            .into_iter()
            .filter_map(|(id, value)| match value {
                Value::Object(fields) => Some((id, fields)),
                other => {
                    warn!("Skipping record {}: expected an object, found {}", id, other);
                    None
                }
            })
            .collect();
        debug!(
            "Read {} records from {}",
            snapshot.len(),
            self.path.display()
        );
        Ok(snapshot)
    }
}

impl RecordSource for JsonFileSource {
    fn fetch_all(&self) -> Result<Snapshot, QueryError> {
        self.read()
    }

    fn fetch_one(&self, id: &str) -> Result<Option<Fields>, QueryError> {
        Ok(self.read()?.swap_remove(id))
    }
}
