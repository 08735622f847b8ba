//! Attendance and leave table mappings plus dashboard aggregates.
//!
//! # Invariants
//! - Marking attendance twice for the same employee and date replaces the
//!   status instead of adding a second row.
//! - Aggregates compare dates as `YYYY-MM-DD` text, which sorts
//!   chronologically.

use crate::model::attendance::{AttendanceRecord, AttendanceStatus, LeaveRequest, LeaveStatus};
use crate::model::validation::ValidationError;
use crate::model::RecordId;
use crate::repo::record_store::{
    date_value, id_value, optional_date_value, parse_id, read_date, read_id, read_optional_date,
    text_value, RepoError, RepoResult, SqliteRecordStore, TableRecord,
};
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{params, Connection, Row};

pub type SqliteAttendanceStore<'conn> = SqliteRecordStore<'conn, AttendanceRecord>;
pub type SqliteLeaveStore<'conn> = SqliteRecordStore<'conn, LeaveRequest>;

impl TableRecord for AttendanceRecord {
    const TABLE: &'static str = "attendance";
    const COLUMNS: &'static [&'static str] = &["employee_id", "date", "status"];
    const ORDER_BY: &'static str = "date DESC, created_at DESC, id ASC";

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate_record(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    fn column_values(&self) -> Vec<Value> {
        vec![
            id_value(self.employee_id),
            date_value(self.date),
            Value::Text(self.status.as_str().to_string()),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        let status_text: String = row.get("status")?;
        let status = AttendanceStatus::parse(&status_text).ok_or_else(|| {
            RepoError::InvalidData(format!(
                "invalid attendance status `{status_text}` in attendance.status"
            ))
        })?;

        Ok(Self {
            id: read_id(row, "id")?,
            employee_id: read_id(row, "employee_id")?,
            date: read_date(row, "date")?,
            status,
        })
    }
}

impl TableRecord for LeaveRequest {
    const TABLE: &'static str = "leave_requests";
    const COLUMNS: &'static [&'static str] = &[
        "employee_id",
        "leave_type",
        "start_date",
        "end_date",
        "status",
        "reason",
    ];
    const ORDER_BY: &'static str = "start_date DESC, created_at DESC, id ASC";

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate_record(&self) -> Result<(), ValidationError> {
        self.validate()
    }

    fn column_values(&self) -> Vec<Value> {
        vec![
            id_value(self.employee_id),
            Value::Text(self.leave_type.clone()),
            date_value(self.start_date),
            optional_date_value(self.end_date),
            Value::Text(self.status.as_str().to_string()),
            text_value(self.reason.as_deref()),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        let status_text: String = row.get("status")?;
        let status = LeaveStatus::parse(&status_text).ok_or_else(|| {
            RepoError::InvalidData(format!(
                "invalid leave status `{status_text}` in leave_requests.status"
            ))
        })?;

        Ok(Self {
            id: read_id(row, "id")?,
            employee_id: read_id(row, "employee_id")?,
            leave_type: row.get("leave_type")?,
            start_date: read_date(row, "start_date")?,
            end_date: read_optional_date(row, "end_date")?,
            status,
            reason: row.get("reason")?,
        })
    }
}

/// Inserts or replaces the attendance mark for `(employee_id, date)`.
///
/// Returns the id of the stored row, which is the existing row's id when
/// the pair was already marked.
pub fn upsert_attendance(conn: &Connection, record: &AttendanceRecord) -> RepoResult<RecordId> {
    let stored_id: String = conn.query_row(
        "INSERT INTO attendance (id, employee_id, date, status)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT (employee_id, date) DO UPDATE SET status = excluded.status
         RETURNING id;",
        params![
            record.id.to_string(),
            record.employee_id.to_string(),
            record.date.format("%Y-%m-%d").to_string(),
            record.status.as_str(),
        ],
        |row| row.get(0),
    )?;

    parse_id(&stored_id, "attendance.id")
}

/// Counts attendance rows with `status` on `date`.
pub fn count_attendance(
    conn: &Connection,
    date: NaiveDate,
    status: AttendanceStatus,
) -> RepoResult<u64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM attendance WHERE date = ?1 AND status = ?2;",
        params![date.format("%Y-%m-%d").to_string(), status.as_str()],
        |row| row.get(0),
    )?;
    Ok(u64::try_from(count).unwrap_or(0))
}

/// Counts approved leaves that cover `date`.
pub fn count_ongoing_leaves(conn: &Connection, date: NaiveDate) -> RepoResult<u64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*)
         FROM leave_requests
         WHERE status = 'Approved'
           AND start_date <= ?1
           AND (end_date IS NULL OR end_date >= ?1);",
        params![date.format("%Y-%m-%d").to_string()],
        |row| row.get(0),
    )?;
    Ok(u64::try_from(count).unwrap_or(0))
}

/// Per-type leave counts: `(leave_type, approved, total)`, ordered by type.
pub fn leave_type_counts(conn: &Connection) -> RepoResult<Vec<(String, u32, u32)>> {
    let mut stmt = conn.prepare(
        "SELECT
            leave_type,
            SUM(CASE WHEN status = 'Approved' THEN 1 ELSE 0 END) AS approved,
            COUNT(*) AS total
         FROM leave_requests
         GROUP BY leave_type
         ORDER BY leave_type ASC;",
    )?;
    let mut rows = stmt.query([])?;
    let mut counts = Vec::new();

    while let Some(row) = rows.next()? {
        counts.push((row.get(0)?, row.get(1)?, row.get(2)?));
    }

    Ok(counts)
}
