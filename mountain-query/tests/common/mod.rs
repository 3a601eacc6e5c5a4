//! Shared fixtures for the mountain-query integration tests

#![allow(dead_code)]

use mountain_query::{Fields, MemorySource, QueryEngine, QueryError, RecordSource, Snapshot};
use serde_json::json;
use std::cell::Cell;

pub const SAMPLE_JSON: &str = r#"[
    {"MountainName": "Mount Everest", "Elevation": 8849, "Location": "Nepal/China",
     "Range": "Himalayas", "Volcanic": false},
    {"MountainName": "K2", "Elevation": 8611, "Location": "Pakistan, China",
     "Range": "Karakoram", "Volcanic": false},
    {"MountainName": "Mount St. Helens", "Elevation": 2549, "Location": "United States",
     "Range": "Cascade Range", "Volcanic": true, "LastEruption": 2008},
    {"MountainName": "Mauna Loa", "Elevation": 4169, "Location": "United States",
     "Range": "Hawaiian Islands", "Volcanic": "true", "LastEruption": 2022}
]"#;

/// The single-record collection used by the end-to-end scenarios.
pub fn everest_only() -> QueryEngine<MemorySource> {
    let source = MemorySource::from_values(vec![json!({
        "MountainName": "Mount Everest",
        "Elevation": 8849,
        "Location": "Nepal/China",
        "Volcanic": false
    })]);
    QueryEngine::new(source).unwrap()
}

pub fn sample_engine() -> QueryEngine<MemorySource> {
    QueryEngine::new(sample_source()).unwrap()
}

pub fn lines(engine: &QueryEngine<MemorySource>, query: &str) -> Vec<String> {
    engine.render(query).unwrap()
}

/// Well-formed loader input; every record matches the stored shape exactly.
pub const LOADER_JSON: &str = r#"[
    {"MountainName": "Mount Everest", "Elevation": 8849, "Location": "Nepal/China",
     "Range": "Himalayas", "Volcanic": false},
    {"MountainName": "Mount Fuji", "Elevation": 3776, "Location": "Japan",
     "Range": "Fuji Volcanic Zone", "Volcanic": true, "LastEruption": 1707}
]"#;

/// Wraps a source and counts how often each fetch is made.
pub struct CountingSource {
    inner: MemorySource,
    pub fetch_all_calls: Cell<usize>,
    pub fetch_one_calls: Cell<usize>,
}

impl CountingSource {
    pub fn new(inner: MemorySource) -> Self {
        Self {
            inner,
            fetch_all_calls: Cell::new(0),
            fetch_one_calls: Cell::new(0),
        }
    }

    pub fn reset(&self) {
        self.fetch_all_calls.set(0);
        self.fetch_one_calls.set(0);
    }

    pub fn total(&self) -> usize {
        self.fetch_all_calls.get() + self.fetch_one_calls.get()
    }
}

impl RecordSource for CountingSource {
    fn fetch_all(&self) -> Result<Snapshot, QueryError> {
        self.fetch_all_calls.set(self.fetch_all_calls.get() + 1);
        self.inner.fetch_all()
    }

    fn fetch_one(&self, id: &str) -> Result<Option<Fields>, QueryError> {
        self.fetch_one_calls.set(self.fetch_one_calls.get() + 1);
        self.inner.fetch_one(id)
    }
}

pub fn sample_source() -> MemorySource {
    let values: Vec<serde_json::Value> = serde_json::from_str(SAMPLE_JSON).unwrap();
    MemorySource::from_values(values)
}
