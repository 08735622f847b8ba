//! Record store: persistence contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define the table-agnostic CRUD contract screens rely on.
//! - Isolate SQL details from services and reports.
//!
//! # Invariants
//! - Every write validates the record first.
//! - Missing ids surface as `RepoError::NotFound`, not silent no-ops.

pub mod attendance_repo;
pub mod employee_repo;
pub mod org_repo;
pub mod record_store;
