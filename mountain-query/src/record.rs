//! Stored record model and the loader that (re)creates the document store from a local file.

use crate::errors::LoadError;
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::HashSet;
use std::path::Path;

/// One mountain in its persisted shape. Key names are part of the stored format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Mountain {
    pub mountain_name: String,
    pub elevation: Number,
    pub location: String,
    pub range: String,
    pub volcanic: bool,
    #[serde(default)]
    pub last_eruption: Option<Number>,
}

/// Location split on ',' or '/', trimmed, empty parts dropped.
pub(crate) fn split_locations(location: &str) -> impl Iterator<Item = &str> {
    location
        .split([',', '/'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InputDocument {
    List(Vec<Mountain>),
    Keyed(Map<String, Value>),
}

/// Reads a local JSON file holding either an array of mountains or an object keyed by name.
pub fn load_mountains(path: &Path) -> Result<Vec<Mountain>, LoadError> {
    let content = fs_err::read_to_string(path)?;
    parse_mountains(&content)
}

pub fn parse_mountains(content: &str) -> Result<Vec<Mountain>, LoadError> {
    let mountains = match serde_json::from_str::<InputDocument>(content)? {
        InputDocument::List(list) => list,
        InputDocument::Keyed(map) => map
            .into_iter()
            .map(|(key, value)| {
                let mountain: Mountain = serde_json::from_value(value)?;
                if mountain.mountain_name != key {
                    return Err(LoadError::KeyMismatch {
                        key,
                        name: mountain.mountain_name,
                    });
                }
                Ok(mountain)
            })
            .collect::<Result<Vec<Mountain>, LoadError>>()?,
    };
    validate(&mountains)?;
    Ok(mountains)
}

fn validate(mountains: &[Mountain]) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for (index, mountain) in mountains.iter().enumerate() {
        if mountain.mountain_name.trim().is_empty() {
            return Err(LoadError::EmptyName(index));
        }
        if !seen.insert(mountain.mountain_name.as_str()) {
            return Err(LoadError::DuplicateName(mountain.mountain_name.clone()));
        }
    }
    Ok(())
}

/// Replaces the store at `path` with the given records, keyed by `MountainName`.
/// Running it twice with the same input produces the same store.
pub fn write_store(path: &Path, mountains: &[Mountain]) -> Result<(), LoadError> {
    validate(mountains)?;
    let mut document = Map::new();
    for mountain in mountains {
        document.insert(
            mountain.mountain_name.clone(),
            serde_json::to_value(mountain)?,
        );
    }
    if path.exists() {
        info!("Deleting existing store {}", path.display());
        fs_err::remove_file(path)?;
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    fs_err::write(path, serde_json::to_string_pretty(&Value::Object(document))?)?;
    info!("Wrote {} mountains to {}", mountains.len(), path.display());
    Ok(())
}
