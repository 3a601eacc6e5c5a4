use crate::catalog::{FieldCatalog, FieldDescriptor, ValueKind};
use crate::coerce::{coerce, coerce_stored, TypedValue};
use crate::errors::QueryError;
use crate::intent::{Comparison, Intent, Logic};
use crate::record::split_locations;
use crate::source::{Fields, RecordSource, Snapshot};
use log::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub name: String,
    pub values: Vec<(FieldDescriptor, TypedValue)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Every catalog field of one record, in catalog order.
    Record {
        name: String,
        fields: Vec<(FieldDescriptor, TypedValue)>,
    },
    Field {
        name: String,
        field: FieldDescriptor,
        value: TypedValue,
    },
    /// Records satisfying a comparison or compound intent, in source order.
    Matches { description: String, rows: Vec<Match> },
}

/// Evaluates an intent with a single read from the source: `fetch_one` for name lookups,
/// `fetch_all` for comparisons.
pub fn evaluate<S: RecordSource + ?Sized>(
    intent: &Intent,
    source: &S,
    catalog: &FieldCatalog,
) -> Result<Outcome, QueryError> {
    match intent {
        Intent::Unrecognized(err) => Err(err.clone()),
        Intent::NameLookup { name, field } => {
            lookup(name, field.as_ref(), source.fetch_one(name)?.as_ref(), catalog)
        }
        Intent::Comparison(cmp) => {
            check_operator(cmp)?;
            filter(intent, &source.fetch_all()?)
        }
        Intent::Compound { .. } => filter(intent, &source.fetch_all()?),
    }
}

/// Evaluates an intent against a snapshot the caller already fetched.
pub fn evaluate_snapshot(
    intent: &Intent,
    snapshot: &Snapshot,
    catalog: &FieldCatalog,
) -> Result<Outcome, QueryError> {
    match intent {
        Intent::Unrecognized(err) => Err(err.clone()),
        Intent::NameLookup { name, field } => {
            lookup(name, field.as_ref(), snapshot.get(name), catalog)
        }
        Intent::Comparison(_) | Intent::Compound { .. } => filter(intent, snapshot),
    }
}

fn lookup(
    name: &str,
    field: Option<&FieldDescriptor>,
    fields: Option<&Fields>,
    catalog: &FieldCatalog,
) -> Result<Outcome, QueryError> {
    let fields = fields.ok_or_else(|| QueryError::NotFound(name.to_string()))?;
    Ok(match field {
        Some(field) => Outcome::Field {
            name: name.to_string(),
            field: field.clone(),
            value: stored_value(field, fields),
        },
        None => Outcome::Record {
            name: name.to_string(),
            fields: catalog
                .iter()
                .map(|field| (field.clone(), stored_value(field, fields)))
                .collect(),
        },
    })
}

fn filter(intent: &Intent, snapshot: &Snapshot) -> Result<Outcome, QueryError> {
    let description = intent.describe();
    debug!("Evaluating {} over {} records", description, snapshot.len());
    let rows = match intent {
        Intent::Comparison(cmp) => {
            check_operator(cmp)?;
            snapshot
                .iter()
                .filter(|(_, fields)| comparison_matches(cmp, fields))
                .map(|(name, fields)| row(name, fields, std::slice::from_ref(cmp)))
                .collect()
        }
        Intent::Compound { conditions, logic } => {
            let legs: Vec<Option<&Comparison>> = conditions
                .iter()
                .map(|cmp| match check_operator(cmp) {
                    Ok(()) => Some(cmp),
                    Err(err) => {
                        warn!("Condition '{}' treated as false: {}", cmp, err);
                        None
                    }
                })
                .collect();
            snapshot
                .iter()
                .filter(|(_, fields)| {
                    let mut results = legs
                        .iter()
                        .map(|leg| leg.is_some_and(|cmp| comparison_matches(cmp, fields)));
                    match logic {
                        Logic::And => results.all(|hit| hit),
                        Logic::Or => results.any(|hit| hit),
                    }
                })
                .map(|(name, fields)| row(name, fields, conditions))
                .collect()
        }
        _ => Vec::new(),
    };
    Ok(Outcome::Matches { description, rows })
}

fn stored_value(field: &FieldDescriptor, fields: &Fields) -> TypedValue {
    coerce_stored(field.kind, fields.get(field.key))
}

fn row(name: &str, fields: &Fields, conditions: &[Comparison]) -> Match {
    let mut values: Vec<(FieldDescriptor, TypedValue)> = Vec::new();
    for cmp in conditions {
        if values.iter().all(|(field, _)| field != &cmp.field) {
            values.push((cmp.field.clone(), stored_value(&cmp.field, fields)));
        }
    }
    Match {
        name: name.to_string(),
        values,
    }
}

/// String-valued fields only define equality; everything else accepts all six operators.
pub fn check_operator(cmp: &Comparison) -> Result<(), QueryError> {
    if cmp.field.kind == ValueKind::String && !cmp.operator.is_equality() {
        return Err(QueryError::UnsupportedOperator {
            field: cmp.field.display.to_string(),
            operator: cmp.operator,
        });
    }
    Ok(())
}

/// Matches one record against a comparison whose operator was already checked.
/// Missing or malformed stored values never match.
pub fn comparison_matches(cmp: &Comparison, fields: &Fields) -> bool {
    let kind = cmp.field.kind;
    let literal = coerce(kind, &cmp.value);
    let stored = fields.get(cmp.field.key);

    if cmp.field.multi_valued {
        let Some(serde_json::Value::String(stored)) = stored else {
            return false;
        };
        let members: Vec<String> = split_locations(stored)
            .filter_map(|part| coerce(kind, part).match_text())
            .collect();
        // "Nepal/China" as a literal asks for every listed value to be present.
        let wanted: Vec<String> = split_locations(&cmp.value)
            .filter_map(|part| coerce(kind, part).match_text())
            .collect();
        if wanted.is_empty() {
            return false;
        }
        let contained = wanted.iter().all(|part| members.contains(part));
        return cmp.operator.holds(&contained, &true);
    }

    match (coerce_stored(kind, stored), literal) {
        (TypedValue::Absent, _) | (_, TypedValue::Absent) => false,
        (TypedValue::Number(a), TypedValue::Number(b)) if kind != ValueKind::String => {
            cmp.operator.holds(&a, &b)
        }
        (TypedValue::Boolean(a), TypedValue::Boolean(b)) if kind != ValueKind::String => {
            cmp.operator.holds(&a, &b)
        }
        (stored, literal) if kind == ValueKind::String => {
            match (stored.match_text(), literal.match_text()) {
                (Some(a), Some(b)) => cmp.operator.holds(&a, &b),
                _ => false,
            }
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::Operator;
    use serde_json::json;

    fn cmp(key: &str, operator: Operator, value: &str) -> Comparison {
        Comparison {
            field: FieldCatalog::mountains().by_key(key).unwrap().clone(),
            operator,
            value: value.to_string(),
        }
    }

    fn everest() -> Fields {
        json!({
            "MountainName": "Mount Everest",
            "Elevation": 8849,
            "Location": "Nepal/China",
            "Range": "Himalayas",
            "Volcanic": false
        })
        .as_object()
        .unwrap()
        .clone()
    }

    #[test]
    fn test_location_set_membership() {
        let fields = everest();
        assert!(comparison_matches(&cmp("Location", Operator::Eq, "China"), &fields));
        assert!(comparison_matches(&cmp("Location", Operator::Eq, "nepal"), &fields));
        assert!(!comparison_matches(&cmp("Location", Operator::Ne, "China"), &fields));
        assert!(comparison_matches(&cmp("Location", Operator::Ne, "India"), &fields));
        assert!(!comparison_matches(&cmp("Location", Operator::Eq, "Nep"), &fields));

        let comma = json!({"Location": "Nepal, China"}).as_object().unwrap().clone();
        assert!(comparison_matches(&cmp("Location", Operator::Eq, "China"), &comma));
    }

    #[test]
    fn test_location_literal_with_separators() {
        let fields = everest();
        assert!(comparison_matches(&cmp("Location", Operator::Eq, "Nepal/China"), &fields));
        assert!(comparison_matches(&cmp("Location", Operator::Eq, "china, NEPAL"), &fields));
        assert!(!comparison_matches(&cmp("Location", Operator::Ne, "Nepal/China"), &fields));
        assert!(!comparison_matches(&cmp("Location", Operator::Eq, "Nepal/India"), &fields));
        assert!(comparison_matches(&cmp("Location", Operator::Ne, "Nepal/India"), &fields));
        assert!(!comparison_matches(&cmp("Location", Operator::Eq, " / "), &fields));
    }

    #[test]
    fn test_string_fields_case_insensitive() {
        let fields = everest();
        assert!(comparison_matches(&cmp("Range", Operator::Eq, " himalayas "), &fields));
        assert!(comparison_matches(&cmp("Range", Operator::Ne, "Andes"), &fields));
        assert!(comparison_matches(
            &cmp("MountainName", Operator::Eq, "MOUNT EVEREST"),
            &fields
        ));
    }

    #[test]
    fn test_unsupported_operator_on_string_fields() {
        for key in ["Range", "Location", "MountainName"] {
            let err = check_operator(&cmp(key, Operator::Gt, "x")).unwrap_err();
            assert!(matches!(err, QueryError::UnsupportedOperator { .. }));
        }
        assert!(check_operator(&cmp("Elevation", Operator::Le, "5")).is_ok());
        assert!(check_operator(&cmp("Volcanic", Operator::Ne, "true")).is_ok());
    }

    #[test]
    fn test_numeric_and_boolean_comparisons() {
        let fields = everest();
        assert!(comparison_matches(&cmp("Elevation", Operator::Gt, "8000"), &fields));
        assert!(comparison_matches(&cmp("Elevation", Operator::Eq, "8849.0"), &fields));
        assert!(!comparison_matches(&cmp("Elevation", Operator::Lt, "8849"), &fields));
        assert!(comparison_matches(&cmp("Volcanic", Operator::Eq, "false"), &fields));
        assert!(!comparison_matches(&cmp("Volcanic", Operator::Eq, "true"), &fields));
        assert!(!comparison_matches(&cmp("Elevation", Operator::Gt, "high"), &fields));
    }

    #[test]
    fn test_missing_or_malformed_values_do_not_match() {
        let fields = everest();
        assert!(!comparison_matches(&cmp("LastEruption", Operator::Ne, "1980"), &fields));
        assert!(!comparison_matches(&cmp("LastEruption", Operator::Lt, "3000"), &fields));

        let malformed = json!({"Elevation": "tall", "Volcanic": 3, "Location": 7})
            .as_object()
            .unwrap()
            .clone();
        assert!(!comparison_matches(&cmp("Elevation", Operator::Ne, "1"), &malformed));
        assert!(!comparison_matches(&cmp("Volcanic", Operator::Eq, "true"), &malformed));
        assert!(!comparison_matches(&cmp("Location", Operator::Ne, "Peru"), &malformed));
    }

    #[test]
    fn test_stored_text_coerces_like_literals() {
        let fields = json!({"Volcanic": "true", "Elevation": "8000"})
            .as_object()
            .unwrap()
            .clone();
        assert!(comparison_matches(&cmp("Volcanic", Operator::Eq, "true"), &fields));
        assert!(comparison_matches(&cmp("Elevation", Operator::Eq, "8000.0"), &fields));
    }
}
