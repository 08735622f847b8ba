//! Calendar helpers shared by report and directory screens.
//!
//! # Responsibility
//! - Parse loosely formatted date values coming from the record store.
//! - Derive retirement (PRL) dates and remaining service durations.
//! - Format dates for report rows.
//!
//! # Invariants
//! - Nothing in this module reads the system clock directly; "today" always
//!   comes from a [`Clock`].
//! - Malformed input never produces an error, only `None` or a placeholder.

mod clock;
mod format;
mod service_period;

pub use clock::{Clock, FixedClock, SystemClock};
pub use format::{
    format_iso_date, format_iso_date_str, format_long_date, parse_date_value, DATE_PLACEHOLDER,
};
pub use service_period::{
    remaining_duration, remaining_duration_text, target_date, target_date_from_str,
    DurationLabels, RemainingService, ServiceDuration, DEFAULT_RETIREMENT_OFFSET_YEARS,
};
