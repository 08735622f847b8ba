//! HR domain model.
//!
//! # Responsibility
//! - Define canonical records for departments, designations, employees,
//!   attendance and leave requests.
//! - Provide the generic field-map [`record::Record`] for ad-hoc tables.
//!
//! # Invariants
//! - Every stored record is identified by a stable `RecordId`.
//! - Records are validated before every write and after every read.

pub mod attendance;
pub mod employee;
pub mod money;
pub mod org;
pub mod record;
pub mod validation;

/// Stable identifier for every stored HR record.
pub type RecordId = uuid::Uuid;

/// Returns `None` for blank text, otherwise the trimmed value.
pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_string)
}
