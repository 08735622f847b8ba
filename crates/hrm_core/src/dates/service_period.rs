//! Retirement date and remaining service period.
//!
//! Chrono has no year/month/day difference, so the calendar-aware borrowing
//! is done by hand:
//!   - day underflow borrows the length of the month before the target month
//!   - month underflow borrows twelve months from the year count
//!
//! Feb-29 anchors whose target year is not a leap year roll forward to
//! Mar-1 of the target year.

use super::clock::Clock;
use super::format::parse_date_value;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Years added to a birth date to reach the PRL date.
pub const DEFAULT_RETIREMENT_OFFSET_YEARS: u32 = 60;

/// Whole years, months and days left until a target date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServiceDuration {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

/// Outcome of comparing a target date against today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemainingService {
    /// Target is today or later.
    Remaining(ServiceDuration),
    /// Target is strictly before today.
    Ended,
}

/// Caller-owned wording for remaining service text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationLabels {
    /// Returned when no target date is known.
    pub not_available: String,
    /// Returned once the target date has passed.
    pub ended: String,
    /// Sentence lead-in before the duration.
    pub remaining_prefix: String,
    pub years_unit: String,
    pub months_unit: String,
    pub days_unit: String,
}

impl DurationLabels {
    pub fn english() -> Self {
        Self {
            not_available: "-".to_string(),
            ended: "service period has ended".to_string(),
            remaining_prefix: "service period remaining:".to_string(),
            years_unit: "years".to_string(),
            months_unit: "months".to_string(),
            days_unit: "days".to_string(),
        }
    }

    pub fn bengali() -> Self {
        Self {
            not_available: "-".to_string(),
            ended: "আপনার চাকুরী কাল শেষ হয়েছে".to_string(),
            remaining_prefix: "আপনার চাকুরী কাল আছে".to_string(),
            years_unit: "বছর".to_string(),
            months_unit: "মাস".to_string(),
            days_unit: "দিন".to_string(),
        }
    }

    /// Renders `{prefix} {YY} {years} {MM} {months} {DD} {days}`.
    pub fn render(&self, duration: ServiceDuration) -> String {
        format!(
            "{} {:02} {} {:02} {} {:02} {}",
            self.remaining_prefix,
            duration.years,
            self.years_unit,
            duration.months,
            self.months_unit,
            duration.days,
            self.days_unit
        )
    }
}

impl Default for DurationLabels {
    fn default() -> Self {
        Self::english()
    }
}

/// Shifts `anchor` forward by `offset_years`, keeping month and day.
///
/// Returns `None` when the anchor is absent or the result leaves chrono's
/// supported range. Does not depend on the current date.
pub fn target_date(anchor: Option<NaiveDate>, offset_years: u32) -> Option<NaiveDate> {
    let anchor = anchor?;
    let year = anchor.year().checked_add(i32::try_from(offset_years).ok()?)?;

    match anchor.with_year(year) {
        Some(shifted) => Some(shifted),
        None if anchor.month() == 2 && anchor.day() == 29 => NaiveDate::from_ymd_opt(year, 3, 1),
        None => None,
    }
}

/// Same as [`target_date`] for raw stored values; unparseable input yields `None`.
pub fn target_date_from_str(anchor: &str, offset_years: u32) -> Option<NaiveDate> {
    target_date(parse_date_value(anchor), offset_years)
}

/// Computes the calendar span from `today` to `target`.
pub fn remaining_duration(target: NaiveDate, today: NaiveDate) -> RemainingService {
    if target.signed_duration_since(today).num_days() < 0 {
        return RemainingService::Ended;
    }

    let mut years = target.year() - today.year();
    let mut months = target.month() as i32 - today.month() as i32;
    let mut days = target.day() as i32 - today.day() as i32;

    if days < 0 {
        let (prev_year, prev_month) = if target.month() == 1 {
            (target.year() - 1, 12)
        } else {
            (target.year(), target.month() - 1)
        };
        days += days_in_month(prev_year, prev_month) as i32;
        months -= 1;
    }

    if months < 0 {
        months += 12;
        years -= 1;
    }

    RemainingService::Remaining(ServiceDuration {
        years: floor_to_zero(years),
        months: floor_to_zero(months),
        days: floor_to_zero(days),
    })
}

/// Renders the remaining service period until `target` as of `clock.today()`.
pub fn remaining_duration_text<C: Clock>(
    target: Option<NaiveDate>,
    clock: &C,
    labels: &DurationLabels,
) -> String {
    let Some(target) = target else {
        return labels.not_available.clone();
    };

    match remaining_duration(target, clock.today()) {
        RemainingService::Ended => labels.ended.clone(),
        RemainingService::Remaining(duration) => labels.render(duration),
    }
}

fn floor_to_zero(value: i32) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(0)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        _ => 28,
    }
}
