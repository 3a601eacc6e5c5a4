use crate::catalog::{FieldCatalog, ValueKind};
use crate::errors::QueryError;
use crate::evaluate::{Match, Outcome};

pub fn render(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::Record { name, fields } => std::iter::once(format!("Information for {}:", name))
            .chain(
                fields
                    .iter()
                    .map(|(field, value)| format!("  {}: {}", field.display, value)),
            )
            .collect(),
        Outcome::Field { name, field, value } if field.kind == ValueKind::Boolean => {
            vec![format!("Is {} {}? {}", name, field.display, value)]
        }
        Outcome::Field { name, field, value } => {
            vec![format!("{} of {}: {}", field.display, name, value)]
        }
        Outcome::Matches { description, rows } if rows.is_empty() => {
            vec![format!("No mountains found where {}.", description)]
        }
        Outcome::Matches { rows, .. } => rows.iter().map(render_match).collect(),
    }
}

fn render_match(row: &Match) -> String {
    let values = row
        .values
        .iter()
        .map(|(field, value)| format!("{} = {}", field.display, value))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}: {}", row.name, values)
}

/// User-facing message for a recoverable query error.
pub fn render_error(err: &QueryError, catalog: &FieldCatalog) -> Vec<String> {
    let line = match err {
        QueryError::ParseFailure(_) => {
            "Command not recognized. Type 'help' to see available commands.".to_string()
        }
        QueryError::UnknownField(field) => format!(
            "Unknown field '{}'. Available fields: {}.",
            field,
            catalog.display_names().join(", ")
        ),
        QueryError::UnknownName(name) | QueryError::NotFound(name) => {
            format!("No information found for '{}'.", name)
        }
        QueryError::UnsupportedOperator { field, operator } => format!(
            "Operator '{}' is not supported for {}; only == and != can be used.",
            operator, field
        ),
        QueryError::Source(_) => format!("Error: {}", err),
    };
    vec![line]
}
