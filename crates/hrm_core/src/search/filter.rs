//! Case-insensitive substring filter over searchable fields.
//!
//! # Responsibility
//! - Build one haystack per record from a configurable list of fields.
//! - Match the trimmed, lower-cased query as a plain substring.
//!
//! # Invariants
//! - Absent or empty field values are skipped, never rendered as `None`.
//! - Filtering borrows the input; records are neither cloned nor reordered.

use std::borrow::Cow;

/// Fields searched by the employee directory screen.
pub const EMPLOYEE_DIRECTORY_FIELDS: &[&str] = &[
    "name",
    "pf_number",
    "mobile_number",
    "employee_email",
    "dept",
    "designation",
    "blood_group",
    "home_district",
    "nid",
];

/// A record that can expose named fields as text.
pub trait Searchable {
    /// Returns the display text of `field`, or `None` when the record has no
    /// value for it.
    fn field_text(&self, field: &str) -> Option<Cow<'_, str>>;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn field_text(&self, field: &str) -> Option<Cow<'_, str>> {
        (**self).field_text(field)
    }
}

/// Returns the lower-cased trimmed query, or `None` when it is blank.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Returns whether `record` contains the already-normalized `needle`.
pub fn record_matches<R: Searchable + ?Sized>(record: &R, needle: &str, fields: &[&str]) -> bool {
    let values = fields
        .iter()
        .filter_map(|field| record.field_text(field))
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>();

    values.join(" ").to_lowercase().contains(needle)
}

/// Filters `records` by `query` across `fields`, keeping input order.
///
/// A blank query returns every record.
pub fn filter_records<'a, R: Searchable>(
    records: &'a [R],
    query: &str,
    fields: &[&str],
) -> Vec<&'a R> {
    let Some(needle) = normalize_query(query) else {
        return records.iter().collect();
    };

    records
        .iter()
        .filter(|record| record_matches(*record, &needle, fields))
        .collect()
}

/// Search configuration bound to one screen's field list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSearch {
    fields: Vec<String>,
}

impl RecordSearch {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Search over [`EMPLOYEE_DIRECTORY_FIELDS`].
    pub fn employee_directory() -> Self {
        Self::new(EMPLOYEE_DIRECTORY_FIELDS.iter().copied())
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn filter<'a, R: Searchable>(&self, records: &'a [R], query: &str) -> Vec<&'a R> {
        let fields = self.field_refs();
        filter_records(records, query, &fields)
    }

    pub fn count_matches<R: Searchable>(&self, records: &[R], query: &str) -> usize {
        let Some(needle) = normalize_query(query) else {
            return records.len();
        };
        let fields = self.field_refs();
        records
            .iter()
            .filter(|record| record_matches(*record, &needle, &fields))
            .count()
    }

    fn field_refs(&self) -> Vec<&str> {
        self.fields.iter().map(String::as_str).collect()
    }
}
