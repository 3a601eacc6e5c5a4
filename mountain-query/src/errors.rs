use crate::intent::Operator;

/// Errors produced while classifying or evaluating a single query line.
///
/// Every variant except `Source` is recoverable: it is rendered as a message and the
/// interactive loop keeps going.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    ParseFailure(String),
    UnknownField(String),
    UnknownName(String),
    UnsupportedOperator { field: String, operator: Operator },
    NotFound(String),
    Source(String),
}

impl QueryError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, QueryError::Source(_))
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::ParseFailure(input) => write!(f, "Query not recognized: {}", input),
            QueryError::UnknownField(field) => write!(f, "Unknown field: {}", field),
            QueryError::UnknownName(name) => write!(f, "Unknown mountain: {}", name),
            QueryError::UnsupportedOperator { field, operator } => {
                write!(
                    f,
                    "Operator '{}' is not supported for field {}",
                    operator, field
                )
            }
            QueryError::NotFound(name) => write!(f, "Mountain not found: {}", name),
            QueryError::Source(msg) => write!(f, "Record source error: {}", msg),
        }
    }
}

impl std::error::Error for QueryError {}

/// Errors produced by the loader while reading a local data file or writing the store.
#[derive(Debug)]
pub enum LoadError {
    IoError(std::io::Error),
    SerdeJsonError(serde_json::Error),
    EmptyName(usize),
    DuplicateName(String),
    KeyMismatch { key: String, name: String },
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::IoError(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::SerdeJsonError(err)
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::IoError(err) => write!(f, "IO error: {}", err),
            LoadError::SerdeJsonError(err) => write!(f, "Serde JSON error: {}", err),
            LoadError::EmptyName(index) => {
                write!(f, "Record #{} has an empty MountainName", index)
            }
            LoadError::DuplicateName(name) => {
                write!(f, "Duplicate MountainName in input: {}", name)
            }
            LoadError::KeyMismatch { key, name } => {
                write!(
                    f,
                    "Record keyed {} has MountainName {}; the key must equal the name",
                    key, name
                )
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::IoError(err) => Some(err),
            LoadError::SerdeJsonError(err) => Some(err),
            LoadError::EmptyName(_)
            | LoadError::DuplicateName(_)
            | LoadError::KeyMismatch { .. } => None,
        }
    }
}
