//! The fixed table of queryable mountain fields.

use std::fmt;

/// How a field's stored value is typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    OptionalNumber,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            ValueKind::String => "String",
            ValueKind::Number => "Number",
            ValueKind::Boolean => "Boolean",
            ValueKind::OptionalNumber => "Number?",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Name shown to users, e.g. "Last Eruption".
    pub display: &'static str,
    /// Key in the stored record, e.g. "LastEruption".
    pub key: &'static str,
    pub kind: ValueKind,
    /// Stored string encodes a set of values joined by ',' or '/'.
    pub multi_valued: bool,
    pub aliases: &'static [&'static str],
    pub detail: &'static str,
}

impl FieldDescriptor {
    const fn new(
        display: &'static str,
        key: &'static str,
        kind: ValueKind,
        detail: &'static str,
    ) -> Self {
        Self {
            display,
            key,
            kind,
            multi_valued: false,
            aliases: &[],
            detail,
        }
    }

    const fn multi_valued(mut self) -> Self {
        self.multi_valued = true;
        self
    }

    const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    fn spellings(&self) -> impl Iterator<Item = &'static str> + '_ {
        [self.display, self.key]
            .into_iter()
            .chain(self.aliases.iter().copied())
    }

    fn matches(&self, normalized: &str) -> bool {
        self.spellings().any(|s| normalize(s) == normalized)
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display)
    }
}

/// Lower-cases and drops all whitespace, so "Last Eruption" and "lasteruption" compare equal.
fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone)]
pub struct FieldCatalog {
    fields: Vec<FieldDescriptor>,
}

impl FieldCatalog {
    pub fn mountains() -> Self {
        Self {
            fields: vec![
                FieldDescriptor::new(
                    "Mountain Name",
                    "MountainName",
                    ValueKind::String,
                    "Name of the mountain",
                ),
                FieldDescriptor::new(
                    "Elevation",
                    "Elevation",
                    ValueKind::Number,
                    "Elevation in meters",
                ),
                FieldDescriptor::new(
                    "Location",
                    "Location",
                    ValueKind::String,
                    "Country or countries",
                )
                .multi_valued(),
                FieldDescriptor::new("Range", "Range", ValueKind::String, "Mountain range name")
                    .with_aliases(&["Mountain Range"]),
                FieldDescriptor::new(
                    "Volcanic",
                    "Volcanic",
                    ValueKind::Boolean,
                    "true if volcanic, false if not",
                ),
                FieldDescriptor::new(
                    "Last Eruption",
                    "LastEruption",
                    ValueKind::OptionalNumber,
                    "Year of the last eruption, if any",
                ),
            ],
        }
    }

    pub fn resolve(&self, text: &str) -> Option<&FieldDescriptor> {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return None;
        }
        self.fields.iter().find(|f| f.matches(&normalized))
    }

    #[cfg(test)]
    pub(crate) fn by_key(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    pub fn display_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.display).collect()
    }

    /// Regex alternation matching any spelling of any field, longest spellings first so
    /// "Mountain Range" wins over "Range". Words may be separated by any whitespace or none.
    pub fn keyword_pattern(&self) -> String {
        let mut spellings: Vec<Vec<String>> = self
            .fields
            .iter()
            .flat_map(|f| f.spellings())
            .map(split_words)
            .collect();
        spellings.sort_by_key(|words| std::cmp::Reverse(words.iter().map(String::len).sum::<usize>()));
        spellings.dedup();
        spellings
            .iter()
            .map(|words| {
                words
                    .iter()
                    .map(|w| regex::escape(w))
                    .collect::<Vec<_>>()
                    .join(r"\s*")
            })
            .collect::<Vec<_>>()
            .join("|")
    }
}

/// Splits both "Last Eruption" and "LastEruption" into ["last", "eruption"].
fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        if c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.extend(c.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_ignores_case_and_spaces() {
        let catalog = FieldCatalog::mountains();
        let a = catalog.resolve("lasteruption").unwrap();
        let b = catalog.resolve("Last Eruption").unwrap();
        let c = catalog.resolve("LastEruption").unwrap();
        let d = catalog.resolve("  LAST   eruption ").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(c, d);
        assert_eq!(a.key, "LastEruption");
    }

    #[test]
    fn test_resolve_every_field_by_display_and_key() {
        let catalog = FieldCatalog::mountains();
        for field in catalog.iter() {
            assert_eq!(catalog.resolve(field.display), Some(field));
            assert_eq!(catalog.resolve(field.key), Some(field));
            assert_eq!(catalog.resolve(&field.display.to_uppercase()), Some(field));
            let resolved = catalog.resolve(field.display).unwrap();
            assert_eq!(catalog.resolve(resolved.display), Some(resolved));
        }
    }

    #[test]
    fn test_resolve_alias_and_unknown() {
        let catalog = FieldCatalog::mountains();
        assert_eq!(catalog.resolve("mountain range").unwrap().key, "Range");
        assert!(catalog.resolve("Height").is_none());
        assert!(catalog.resolve("   ").is_none());
    }

    #[test]
    fn test_catalog_order_and_kinds() {
        let catalog = FieldCatalog::mountains();
        assert_eq!(
            catalog.display_names(),
            vec![
                "Mountain Name",
                "Elevation",
                "Location",
                "Range",
                "Volcanic",
                "Last Eruption"
            ]
        );
        assert!(catalog.by_key("Location").unwrap().multi_valued);
        assert!(!catalog.by_key("Range").unwrap().multi_valued);
        assert_eq!(
            catalog.by_key("LastEruption").unwrap().kind,
            ValueKind::OptionalNumber
        );
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("LastEruption"), vec!["last", "eruption"]);
        assert_eq!(split_words("Mountain Name"), vec!["mountain", "name"]);
        assert_eq!(split_words("Range"), vec!["range"]);
    }

    #[test]
    fn test_keyword_pattern_prefers_longest() {
        let pattern = FieldCatalog::mountains().keyword_pattern();
        let range_alias = pattern.find(r"mountain\s*range").unwrap();
        let range = pattern.find("|range").unwrap();
        assert!(range_alias < range);
    }
}
