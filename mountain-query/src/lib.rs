pub mod catalog;
pub mod classify;
pub mod coerce;
pub mod errors;
pub mod evaluate;
pub mod format;
pub mod grammar;
pub mod intent;
pub mod record;
pub mod shell;
pub mod source;

pub use catalog::{FieldCatalog, FieldDescriptor, ValueKind};
pub use classify::classify;
pub use coerce::{coerce, coerce_stored, TypedValue};
pub use errors::{LoadError, QueryError};
pub use evaluate::{evaluate, evaluate_snapshot, Match, Outcome};
pub use format::{render, render_error};
pub use grammar::{Grammar, Parse};
pub use intent::{Comparison, Intent, Logic, Operator};
pub use record::{load_mountains, parse_mountains, write_store, Mountain};
pub use shell::{help_text, QueryEngine, ShellCommand};
pub use source::{Fields, JsonFileSource, MemorySource, RecordSource, Snapshot};
