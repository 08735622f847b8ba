//! Validation errors shared by all HR records.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Invariant violation detected before persistence or after read-back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required text is blank after trimming.
    EmptyField {
        entity: &'static str,
        field: &'static str,
    },
    /// An end date precedes its start date.
    DateRange { start: NaiveDate, end: NaiveDate },
    /// Monetary amount below zero where only non-negative values make sense.
    NegativeAmount { field: &'static str },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { entity, field } => {
                write!(f, "{entity}.{field} must not be empty")
            }
            Self::DateRange { start, end } => {
                write!(f, "end date {end} is earlier than start date {start}")
            }
            Self::NegativeAmount { field } => write!(f, "{field} must not be negative"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_text(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { entity, field });
    }
    Ok(())
}
