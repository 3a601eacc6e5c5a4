use crate::catalog::{FieldCatalog, FieldDescriptor};
use crate::errors::QueryError;
use crate::grammar::{Grammar, Parse, RawComparison};
use crate::intent::{Comparison, Intent};

/// Classifies one input line into an intent. Grammar alternatives are tried in priority order;
/// the winning parse is then normalized against the field catalog and the known record names.
/// Normalization failures never fall through to later alternatives.
pub fn classify(
    input: &str,
    known_names: &[String],
    catalog: &FieldCatalog,
    grammar: &Grammar,
) -> Intent {
    let Some(parse) = grammar.parse(input) else {
        return Intent::Unrecognized(QueryError::ParseFailure(input.trim().to_string()));
    };
    normalize(parse, known_names, catalog).unwrap_or_else(Intent::Unrecognized)
}

fn normalize(
    parse: Parse,
    known_names: &[String],
    catalog: &FieldCatalog,
) -> Result<Intent, QueryError> {
    match parse {
        Parse::Compound { left, logic, right } => Ok(Intent::Compound {
            conditions: [comparison(left, catalog)?, comparison(right, catalog)?],
            logic,
        }),
        Parse::Comparison(raw) => Ok(Intent::Comparison(comparison(raw, catalog)?)),
        Parse::FieldThenName { field, name } | Parse::NameThenField { name, field } => {
            let field = resolve_field(&field, catalog)?;
            Ok(Intent::NameLookup {
                name: match_name(&name, known_names)?,
                field: Some(field),
            })
        }
        Parse::Name(name) => Ok(Intent::NameLookup {
            name: match_name(&name, known_names)?,
            field: None,
        }),
    }
}

fn comparison(raw: RawComparison, catalog: &FieldCatalog) -> Result<Comparison, QueryError> {
    Ok(Comparison {
        field: resolve_field(&raw.field, catalog)?,
        operator: raw.operator,
        value: raw.value,
    })
}

fn resolve_field(text: &str, catalog: &FieldCatalog) -> Result<FieldDescriptor, QueryError> {
    catalog
        .resolve(text)
        .cloned()
        .ok_or_else(|| QueryError::UnknownField(text.trim().to_string()))
}

/// Exact, case-insensitive match against the known names; returns the stored spelling.
fn match_name(text: &str, known_names: &[String]) -> Result<String, QueryError> {
    let wanted = text.to_lowercase();
    known_names
        .iter()
        .find(|known| collapse_spaces(known).to_lowercase() == wanted)
        .cloned()
        .ok_or_else(|| QueryError::UnknownName(text.to_string()))
}

fn collapse_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
