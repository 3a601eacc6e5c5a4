//! Line-level command dispatch shared by the interactive prompt and one-shot queries.

use crate::catalog::FieldCatalog;
use crate::classify::classify;
use crate::errors::QueryError;
use crate::evaluate::{evaluate_snapshot, Outcome};
use crate::format::{render, render_error};
use crate::grammar::Grammar;
use crate::source::RecordSource;
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Empty,
    Help,
    Quit,
    Query(String),
}

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ShellCommand::Empty;
        }
        match line.to_lowercase().as_str() {
            "help" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            _ => ShellCommand::Query(line.to_string()),
        }
    }
}

pub fn help_text(catalog: &FieldCatalog) -> String {
    let mut text = String::from(
        "Welcome to the Mountains Query Program!

1. Find mountains by field values:
     <field> <op> <value>        op is one of == != > >= < <= (= means ==)
   Examples:
     Mountain Name == Mount Everest
     Elevation > 8000
     Location == Nepal
     Volcanic == false

2. Combine two conditions with AND or OR:
     Location == Nepal AND Elevation > 8000
     Volcanic == true OR Range == 'Cascade Range'

3. Show one field of a mountain:
     Elevation K2
     Location of Mount Everest
     Mount Everest Elevation

4. Show everything about a mountain:
     Mount St. Helens

Quote values that contain commas, periods or the words and/or.
Text fields only support == and !=. Location matches any listed country;
'Location == \"Nepal/China\"' requires every listed country.

5. Available fields:
",
    );
    for field in catalog.iter() {
        text.push_str(&format!(
            "     {:<16} {:<9} {}\n",
            field.display, field.kind, field.detail
        ));
    }
    text.push_str("\nSpecial commands: help, quit\n");
    text
}

/// Immutable query pipeline built once at startup: catalog and grammar are shared by reference
/// across every line; the source is read once per line.
pub struct QueryEngine<S> {
    catalog: FieldCatalog,
    grammar: Grammar,
    source: S,
}

impl<S: RecordSource> QueryEngine<S> {
    pub fn new(source: S) -> Result<Self, regex::Error> {
        let catalog = FieldCatalog::mountains();
        let grammar = Grammar::new(&catalog)?;
        Ok(Self {
            catalog,
            grammar,
            source,
        })
    }

    pub fn catalog(&self) -> &FieldCatalog {
        &self.catalog
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Reads one snapshot, classifies against its names and evaluates against the same
    /// snapshot, so a line never sees two versions of the collection.
    pub fn run(&self, line: &str) -> Result<Outcome, QueryError> {
        let snapshot = self.source.fetch_all()?;
        let known_names: Vec<String> = snapshot.keys().cloned().collect();
        let intent = classify(line, &known_names, &self.catalog, &self.grammar);
        debug!("Classified {:?} as {:?}", line, intent);
        evaluate_snapshot(&intent, &snapshot, &self.catalog)
    }

    /// Output lines for one query. Recoverable errors become messages; only a failing
    /// record source is returned as an error.
    pub fn render(&self, line: &str) -> Result<Vec<String>, QueryError> {
        match self.run(line) {
            Ok(outcome) => Ok(render(&outcome)),
            Err(err) if err.is_fatal() => Err(err),
            Err(err) => Ok(render_error(&err, &self.catalog)),
        }
    }
}
