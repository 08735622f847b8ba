//! Table mappings for departments and designations.
//!
//! Departments list newest first; designations list by name, matching the
//! order the pick lists show them.

use crate::model::org::{Department, Designation};
use crate::model::validation::ValidationError;
use crate::model::RecordId;
use crate::repo::record_store::{
    read_id, text_value, RepoResult, SqliteRecordStore, TableRecord,
};
use rusqlite::types::Value;
use rusqlite::Row;

pub type SqliteDepartmentStore<'conn> = SqliteRecordStore<'conn, Department>;
pub type SqliteDesignationStore<'conn> = SqliteRecordStore<'conn, Designation>;

impl TableRecord for Department {
    const TABLE: &'static str = "departments";
    const COLUMNS: &'static [&'static str] = &["name"];
    const ORDER_BY: &'static str = "created_at DESC, rowid DESC";

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate_record(&self) -> Result<(), ValidationError> {
        self.validate()
    }

    fn column_values(&self) -> Vec<Value> {
        vec![Value::Text(self.name.trim().to_string())]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: read_id(row, "id")?,
            name: row.get("name")?,
            created_at: row.get("created_at")?,
        })
    }
}

impl TableRecord for Designation {
    const TABLE: &'static str = "designations";
    const COLUMNS: &'static [&'static str] = &["name", "grade"];
    const ORDER_BY: &'static str = "name COLLATE NOCASE ASC, id ASC";

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate_record(&self) -> Result<(), ValidationError> {
        self.validate()
    }

    fn column_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.name.trim().to_string()),
            text_value(self.grade.as_deref()),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: read_id(row, "id")?,
            name: row.get("name")?,
            grade: row.get("grade")?,
            created_at: row.get("created_at")?,
        })
    }
}
