//! Ordered grammar alternatives that turn a raw input line into an unnormalized parse.
//!
//! Each alternative is a pure `try_*` function over the whole line. An alternative succeeds
//! only if it consumes the entire input; `Grammar::parse` returns the first success in priority
//! order: compound, comparison, field-then-name, name-then-field, name-only.

use crate::catalog::FieldCatalog;
use crate::intent::{Logic, Operator};
use log::debug;
use regex::Regex;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct RawComparison {
    pub field: String,
    pub operator: Operator,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Parse {
    Compound {
        left: RawComparison,
        logic: Logic,
        right: RawComparison,
    },
    Comparison(RawComparison),
    FieldThenName {
        field: String,
        name: String,
    },
    NameThenField {
        name: String,
        field: String,
    },
    Name(String),
}

type Alternative = fn(&Grammar, &str) -> Option<Parse>;

#[derive(Debug)]
pub struct Grammar {
    field_keyword: Regex,
    field_text: Regex,
    operator: Regex,
    number: Regex,
    quoted: Regex,
    word: Regex,
    connective: Regex,
    of: Regex,
    name_token: Regex,
}

/// Position in the input line. Matchers only look at `rest`, anchored at its start.
#[derive(Clone, Copy)]
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    fn skip_ws(&mut self) -> bool {
        let trimmed = self.rest.trim_start();
        let skipped = trimmed.len() != self.rest.len();
        self.rest = trimmed;
        skipped
    }

    fn at_end(&self) -> bool {
        self.rest.trim().is_empty()
    }

    fn peek(&self, re: &Regex) -> Option<&'a str> {
        re.find(self.rest).map(|m| m.as_str())
    }

    fn eat(&mut self, re: &Regex) -> Option<&'a str> {
        let matched = self.peek(re)?;
        self.rest = &self.rest[matched.len()..];
        Some(matched)
    }

    fn advance(&mut self, len: usize) {
        self.rest = &self.rest[len..];
    }
}

impl Grammar {
    pub fn new(catalog: &FieldCatalog) -> Result<Self, regex::Error> {
        Ok(Self {
            field_keyword: Regex::new(&format!(r"(?i)^(?:{})\b", catalog.keyword_pattern()))?,
            field_text: Regex::new(r"^[\p{L}_][\w]*(?:[ \t]+[\p{L}_][\w]*)*")?,
            // Longest operators first so ">=" is never read as ">" followed by "=".
            operator: Regex::new(r"^(?:==|!=|>=|<=|=|>|<)")?,
            number: Regex::new(r"^[+-]?(?:\d+(?:\.\d+)?|\.\d+)")?,
            quoted: Regex::new(r#"^(?:"([^"]*)"|'([^']*)')"#)?,
            word: Regex::new(r"^[\w\-/']+")?,
            connective: Regex::new(r"(?i)^(?:and|or)\b")?,
            of: Regex::new(r"(?i)^of\b")?,
            name_token: Regex::new(r"^[\p{L}\p{N}'.\-]+")?,
        })
    }

    const ALTERNATIVES: [(&'static str, Alternative); 5] = [
        ("compound", Grammar::try_compound),
        ("comparison", Grammar::try_comparison),
        ("field-then-name", Grammar::try_field_then_name),
        ("name-then-field", Grammar::try_name_then_field),
        ("name", Grammar::try_name),
    ];

    pub fn parse(&self, text: &str) -> Option<Parse> {
        Self::ALTERNATIVES.iter().find_map(|(label, alternative)| {
            let parsed = alternative(self, text)?;
            debug!("Parsed {:?} as {}", text, label);
            Some(parsed)
        })
    }

    pub fn try_compound(&self, text: &str) -> Option<Parse> {
        let mut cur = Cursor::new(text);
        let left = self.comparison(&mut cur)?;
        if !cur.skip_ws() {
            return None;
        }
        let logic = match cur.eat(&self.connective)?.to_lowercase().as_str() {
            "and" => Logic::And,
            _ => Logic::Or,
        };
        if !cur.skip_ws() {
            return None;
        }
        let right = self.comparison(&mut cur)?;
        cur.at_end().then_some(Parse::Compound { left, logic, right })
    }

    pub fn try_comparison(&self, text: &str) -> Option<Parse> {
        let mut cur = Cursor::new(text);
        let comparison = self.comparison(&mut cur)?;
        cur.at_end().then_some(Parse::Comparison(comparison))
    }

    /// `<field> [of] <name tokens>`
    pub fn try_field_then_name(&self, text: &str) -> Option<Parse> {
        let mut cur = Cursor::new(text);
        cur.skip_ws();
        let field = cur.eat(&self.field_keyword)?;
        if !cur.skip_ws() {
            return None;
        }
        let mut after_of = cur;
        if after_of.eat(&self.of).is_some() && after_of.skip_ws() && !after_of.at_end() {
            cur = after_of;
        }
        let name = self.name_tokens(&mut cur)?;
        cur.at_end().then(|| Parse::FieldThenName {
            field: field.to_string(),
            name,
        })
    }

    /// `<name tokens> <field>`, the name being everything up to the first field keyword.
    pub fn try_name_then_field(&self, text: &str) -> Option<Parse> {
        let mut cur = Cursor::new(text);
        cur.skip_ws();
        let mut tokens = Vec::new();
        loop {
            tokens.push(cur.eat(&self.name_token)?);
            if !cur.skip_ws() {
                return None;
            }
            if let Some(field) = cur.eat(&self.field_keyword) {
                return cur.at_end().then(|| Parse::NameThenField {
                    name: tokens.join(" "),
                    field: field.to_string(),
                });
            }
        }
    }

    pub fn try_name(&self, text: &str) -> Option<Parse> {
        let mut cur = Cursor::new(text);
        cur.skip_ws();
        let name = self.name_tokens(&mut cur)?;
        cur.at_end().then_some(Parse::Name(name))
    }

    fn comparison(&self, cur: &mut Cursor<'_>) -> Option<RawComparison> {
        cur.skip_ws();
        let field = cur.eat(&self.field_text)?;
        cur.skip_ws();
        let operator = Operator::from_str(cur.eat(&self.operator)?).ok()?;
        cur.skip_ws();
        let value = self.value(cur)?;
        Some(RawComparison {
            field: field.to_string(),
            operator,
            value,
        })
    }

    /// Numeric literal, then quoted string, then unquoted words up to a connective.
    fn value(&self, cur: &mut Cursor<'_>) -> Option<String> {
        if let Some(number) = cur.peek(&self.number) {
            let after = &cur.rest[number.len()..];
            if after.is_empty() || after.starts_with(char::is_whitespace) {
                cur.advance(number.len());
                return Some(number.to_string());
            }
        }
        if let Some(caps) = self.quoted.captures(cur.rest) {
            let whole = caps.get(0)?.end();
            let inner = caps.get(1).or_else(|| caps.get(2))?.as_str().to_string();
            cur.advance(whole);
            return Some(inner);
        }
        let mut words = vec![cur.eat(&self.word)?];
        loop {
            let mut probe = *cur;
            if !probe.skip_ws() || probe.peek(&self.connective).is_some() {
                break;
            }
            match probe.eat(&self.word) {
                Some(word) => {
                    words.push(word);
                    *cur = probe;
                }
                None => break,
            }
        }
        Some(words.join(" "))
    }

    /// One or more name tokens separated by whitespace, joined by single spaces.
    fn name_tokens(&self, cur: &mut Cursor<'_>) -> Option<String> {
        let mut tokens = vec![cur.eat(&self.name_token)?];
        loop {
            let mut probe = *cur;
            if !probe.skip_ws() {
                break;
            }
            match probe.eat(&self.name_token) {
                Some(token) => {
                    tokens.push(token);
                    *cur = probe;
                }
                None => break,
            }
        }
        Some(tokens.join(" "))
    }
}
