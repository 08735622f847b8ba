//! Core logic for the HR management application.
//! Service-period date math, directory search, the SQLite record store and
//! the screen-level services built on them.

pub mod config;
pub mod dates;
pub mod db;
pub mod logging;
pub mod model;
pub mod report;
pub mod repo;
pub mod search;
pub mod service;

pub use config::{ConfigError, HrmConfig};
pub use dates::{
    format_iso_date, remaining_duration_text, target_date, Clock, DurationLabels, FixedClock,
    SystemClock,
};
pub use db::{open_db, open_db_in_memory, DbError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{Employee, EmployeeListing};
pub use model::record::{FieldValue, Record};
pub use model::RecordId;
pub use repo::record_store::{RecordStore, RepoError, RepoResult, SqliteRecordStore};
pub use search::filter::{filter_records, RecordSearch, Searchable};
pub use service::{ServiceError, ServiceResult};

/// Health-check probe for host wiring.
pub fn ping() -> &'static str {
    "pong"
}

pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
