//! CLI smoke entry point.
//!
//! Prints core linkage details. Given a date of birth (`YYYY-MM-DD`), also
//! prints the PRL date and remaining service as of today.

use hrm_core::dates::{DEFAULT_RETIREMENT_OFFSET_YEARS, target_date_from_str};
use hrm_core::{format_iso_date, remaining_duration_text, DurationLabels, SystemClock};

fn main() {
    println!("hrm_core ping={}", hrm_core::ping());
    println!("hrm_core version={}", hrm_core::core_version());

    if let Some(dob) = std::env::args().nth(1) {
        let prl = target_date_from_str(&dob, DEFAULT_RETIREMENT_OFFSET_YEARS);
        println!("prl_date={}", format_iso_date(prl));
        println!(
            "remaining={}",
            remaining_duration_text(prl, &SystemClock, &DurationLabels::english())
        );
    }
}
