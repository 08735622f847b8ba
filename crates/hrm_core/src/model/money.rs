//! Fixed-point currency amounts.
//!
//! Amounts are stored as minor units (1/100 of a taka) so totals on the
//! salary sheet add up exactly. Arithmetic saturates at the `i64` bounds
//! instead of overflowing.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::{Add, Sub};

static AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-)?(\d+)(?:\.(\d{1,2}))?$").expect("valid amount regex"));

/// Currency amount in minor units.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    pub const fn from_major(major: i64) -> Self {
        Self(major.saturating_mul(100))
    }

    pub const fn minor_units(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Sum that reports overflow instead of saturating.
    pub const fn checked_add(self, rhs: Money) -> Option<Money> {
        match self.0.checked_add(rhs.0) {
            Some(minor) => Some(Money(minor)),
            None => None,
        }
    }

    /// Parses `35000`, `19,460.00` or `-12.5` style input.
    ///
    /// Thousands separators are ignored. Returns `None` for anything else.
    pub fn parse(value: &str) -> Option<Self> {
        let cleaned = value.trim().replace(',', "");
        let caps = AMOUNT_RE.captures(&cleaned)?;

        let major = caps[2].parse::<i64>().ok()?;
        let minor = match caps.get(3) {
            Some(fraction) if fraction.as_str().len() == 1 => {
                fraction.as_str().parse::<i64>().ok()? * 10
            }
            Some(fraction) => fraction.as_str().parse::<i64>().ok()?,
            None => 0,
        };

        let amount = major.checked_mul(100)?.checked_add(minor)?;
        if caps.get(1).is_some() {
            Some(Self(-amount))
        } else {
            Some(Self(amount))
        }
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let digits = (abs / 100).to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (index, ch) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        write!(f, "{sign}{grouped}.{:02}", abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}
