//! # Substring Filter
//!
//! Case-insensitive "contains" match on one record field.

use super::record::Record;

/// Retains records whose field contains the needle, ignoring case.
///
/// Applying the same filter twice yields the same set as applying it once.
#[derive(Debug, Clone)]
pub struct SubstringFilter {
    field: String,
    needle: String,
}

impl SubstringFilter {
    pub fn new(field: impl Into<String>, value: &str) -> Self {
        Self {
            field: field.into(),
            needle: value.to_lowercase(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Check if a record matches.
    ///
    /// An empty needle matches every record. A record missing the field
    /// never matches a non-empty needle.
    pub fn matches(&self, record: &Record) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        record
            .text(&self.field)
            .map(|value| value.to_lowercase().contains(&self.needle))
            .unwrap_or(false)
    }

    /// Retain matching records, preserving their relative order
    pub fn apply<'a>(&self, records: impl IntoIterator<Item = &'a Record>) -> Vec<&'a Record> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}
