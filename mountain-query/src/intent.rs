use crate::catalog::FieldDescriptor;
use crate::errors::QueryError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl Operator {
    /// Applies the operator to two already-ordered values.
    pub fn holds<T: PartialOrd + ?Sized>(&self, left: &T, right: &T) -> bool {
        match self {
            Operator::Eq => left == right,
            Operator::Ne => left != right,
            Operator::Gt => left > right,
            Operator::Ge => left >= right,
            Operator::Lt => left < right,
            Operator::Le => left <= right,
        }
    }

    pub fn is_equality(&self) -> bool {
        matches!(self, Operator::Eq | Operator::Ne)
    }
}

impl FromStr for Operator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" | "==" => Ok(Operator::Eq),
            "!=" => Ok(Operator::Ne),
            ">" => Ok(Operator::Gt),
            ">=" => Ok(Operator::Ge),
            "<" => Ok(Operator::Lt),
            "<=" => Ok(Operator::Le),
            _ => Err(QueryError::ParseFailure(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Eq => write!(f, "=="),
            Operator::Ne => write!(f, "!="),
            Operator::Gt => write!(f, ">"),
            Operator::Ge => write!(f, ">="),
            Operator::Lt => write!(f, "<"),
            Operator::Le => write!(f, "<="),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Logic {
    And,
    Or,
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Logic::And => write!(f, "AND"),
            Logic::Or => write!(f, "OR"),
        }
    }
}

/// A single `<field> <op> <value>` condition. `value` is the literal text with quotes removed;
/// it is coerced only at evaluation time.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub field: FieldDescriptor,
    pub operator: Operator,
    pub value: String,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.operator, self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    NameLookup {
        name: String,
        field: Option<FieldDescriptor>,
    },
    Comparison(Comparison),
    Compound {
        conditions: [Comparison; 2],
        logic: Logic,
    },
    /// Carries why classification failed: `ParseFailure`, `UnknownField` or `UnknownName`.
    Unrecognized(QueryError),
}

impl Intent {
    /// Human-readable description of the conditions, used in "no match" messages.
    pub fn describe(&self) -> String {
        match self {
            Intent::NameLookup { name, field: None } => name.clone(),
            Intent::NameLookup {
                name,
                field: Some(field),
            } => format!("{} of {}", field, name),
            Intent::Comparison(cmp) => cmp.to_string(),
            Intent::Compound { conditions, logic } => {
                format!("{} {} {}", conditions[0], logic, conditions[1])
            }
            Intent::Unrecognized(err) => err.to_string(),
        }
    }
}
