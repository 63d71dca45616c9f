//! # Record Sorter
//!
//! Stable sort on one field. The comparator is chosen by the field's
//! declared [`FieldKind`]:
//!
//! - `Text`: case-sensitive byte-wise string comparison, absent values as ""
//! - `Numeric`: every character other than an ASCII digit or `.` is
//!   stripped and the longest leading number of the rest is read as
//!   `f64`. Values with no leading digit sort as the lowest key.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::sync::OnceLock;

use regex::Regex;

use super::query::{SortDirection, SortSpec};
use super::record::Record;
use super::schema::FieldKind;

/// Comparable key extracted from one record
#[derive(Debug, Clone, PartialEq)]
enum SortKey<'a> {
    Text(Cow<'a, str>),
    /// `None` is the fallback for unparseable magnitudes
    Numeric(Option<f64>),
}

impl SortKey<'_> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Numeric(a), SortKey::Numeric(b)) => match (a, b) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(a), Some(b)) => a.total_cmp(b),
            },
            // A single sort pass only ever builds one kind of key
            _ => Ordering::Equal,
        }
    }
}

fn non_numeric() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^0-9.]").expect("static pattern is valid"))
}

fn leading_number() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]*(\.[0-9]*)?").expect("static pattern is valid"))
}

/// Parse the numeric magnitude of currency/size text such as `"$1,199,988"`.
///
/// Everything but digits and `.` is stripped, then the longest leading
/// number is read, so `"1.5.0"` is 1.5. Returns `None` when no digit
/// leads the stripped text.
pub fn numeric_magnitude(text: &str) -> Option<f64> {
    let stripped = non_numeric().replace_all(text, "");
    let prefix = leading_number().find(&stripped)?.as_str();
    if !prefix.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Sorts records by a single field
pub struct RecordSorter;

impl RecordSorter {
    /// Sorts records according to the sort specification.
    ///
    /// Sort is stable in both directions: records with equal keys keep
    /// their input order.
    pub fn sort(records: &mut Vec<&Record>, spec: &SortSpec, kind: FieldKind) {
        let mut keyed: Vec<(SortKey<'_>, &Record)> = records
            .iter()
            .map(|record| (Self::key(record, &spec.field, kind), *record))
            .collect();

        keyed.sort_by(|(a, _), (b, _)| {
            let ordering = a.compare(b);
            match spec.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        *records = keyed.into_iter().map(|(_, record)| record).collect();
    }

    fn key<'a>(record: &'a Record, field: &str, kind: FieldKind) -> SortKey<'a> {
        match kind {
            FieldKind::Text => SortKey::Text(record.text(field).unwrap_or(Cow::Borrowed(""))),
            FieldKind::Numeric => {
                SortKey::Numeric(record.text(field).and_then(|t| numeric_magnitude(&t)))
            }
        }
    }
}
