//! In-memory record search.
//!
//! # Responsibility
//! - Filter already-loaded records against a free-text query.
//! - Keep directory search rules inside core instead of each screen.
//!
//! # Invariants
//! - Blank queries match every record.
//! - Results keep the input order.

pub mod filter;
