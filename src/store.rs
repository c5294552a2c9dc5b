//! Immutable text tables: forward lookup, reverse lookup, and longest-match
//! candidate enumeration.

use std::collections::{BTreeMap, HashMap};

use crate::error::TextError;
use crate::style::TextStyle;

/// An insertion-ordered value→text mapping for one style.
///
/// Insertion order is preserved and breaks ties between equal-length
/// candidates during parsing. A later push for an existing value replaces
/// its text in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextMapping {
    entries: Vec<(i64, String)>,
}

impl TextMapping {
    pub fn new() -> Self {
        TextMapping::default()
    }

    pub fn push(&mut self, value: i64, text: impl Into<String>) {
        let text = text.into();
        if let Some(entry) = self.entries.iter_mut().find(|(v, _)| *v == value) {
            entry.1 = text;
        } else {
            self.entries.push((value, text));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &str)> + '_ {
        self.entries.iter().map(|(v, t)| (*v, t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(i64, S)> for TextMapping {
    fn from_iter<I: IntoIterator<Item = (i64, S)>>(iter: I) -> Self {
        let mut mapping = TextMapping::new();
        for (value, text) in iter {
            mapping.push(value, text);
        }
        mapping
    }
}

/// One text the parser can try to match, with the value it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub value: i64,
}

#[derive(Debug, Clone)]
struct StyleTable {
    /// Registration order, one entry per value
    entries: Vec<(i64, String)>,
    by_value: HashMap<i64, usize>,
    by_text: HashMap<String, i64>,
}

/// Immutable index over the style mappings of one (field, locale) pair.
///
/// Built once, then shared read-only; all lookups are exact-style and never
/// fall back to a different style.
#[derive(Debug, Clone)]
pub struct TextStore {
    tables: BTreeMap<TextStyle, StyleTable>,
}

impl TextStore {
    /// Build a store from per-style mappings.
    ///
    /// Fails with [`TextError::DuplicateText`] when two values share the same
    /// text within one style (the data could not be parsed unambiguously) and
    /// with [`TextError::EmptyText`] for zero-length text.
    pub fn build<I>(mappings: I) -> Result<Self, TextError>
    where
        I: IntoIterator<Item = (TextStyle, TextMapping)>,
    {
        let mut tables = BTreeMap::new();
        for (style, mapping) in mappings {
            let mut table = StyleTable {
                entries: Vec::with_capacity(mapping.len()),
                by_value: HashMap::with_capacity(mapping.len()),
                by_text: HashMap::with_capacity(mapping.len()),
            };
            for (value, text) in mapping.entries {
                if text.is_empty() {
                    return Err(TextError::EmptyText { style, value });
                }
                if let Some(&first) = table.by_text.get(&text) {
                    return Err(TextError::DuplicateText {
                        style,
                        text,
                        first,
                        second: value,
                    });
                }
                table.by_text.insert(text.clone(), value);
                table.by_value.insert(value, table.entries.len());
                table.entries.push((value, text));
            }
            tables.insert(style, table);
        }
        Ok(TextStore { tables })
    }

    /// The text for `value` in exactly `style`.
    pub fn text_for(&self, value: i64, style: TextStyle) -> Option<&str> {
        let table = self.tables.get(&style)?;
        let index = *table.by_value.get(&value)?;
        Some(table.entries[index].1.as_str())
    }

    /// The value for `text` in exactly `style`, case-sensitive.
    pub fn value_for(&self, text: &str, style: TextStyle) -> Option<i64> {
        self.tables.get(&style)?.by_text.get(text).copied()
    }

    /// All candidates across `styles`, longest first.
    ///
    /// The order is total and deterministic: descending character count,
    /// then the order in which styles and entries were registered. Styles
    /// missing from the store contribute nothing.
    pub fn candidates(&self, styles: &[TextStyle]) -> Vec<Candidate> {
        let mut out = Vec::new();
        for style in styles {
            if let Some(table) = self.tables.get(style) {
                for (value, text) in &table.entries {
                    out.push(Candidate {
                        text: text.clone(),
                        value: *value,
                    });
                }
            }
        }
        // Stable sort keeps registration order for equal lengths.
        out.sort_by_key(|c| std::cmp::Reverse(c.text.chars().count()));
        out
    }

    /// Styles with at least one entry.
    pub fn styles(&self) -> impl Iterator<Item = TextStyle> + '_ {
        self.tables
            .iter()
            .filter(|(_, t)| !t.entries.is_empty())
            .map(|(&s, _)| s)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.values().all(|t| t.entries.is_empty())
    }
}
