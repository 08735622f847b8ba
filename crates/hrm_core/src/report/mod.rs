//! Print-oriented report models.
//!
//! # Responsibility
//! - Assemble the employee information sheet and monthly salary sheet from
//!   stored records.
//! - Render each report as a static, self-contained HTML fragment for an
//!   external print surface.
//!
//! # Invariants
//! - Report builders never read the system clock; dates come from a `Clock`.
//! - Company details are supplied by the caller, never defaulted to sample
//!   data.

pub mod employee_sheet;
mod html;
pub mod salary_sheet;
