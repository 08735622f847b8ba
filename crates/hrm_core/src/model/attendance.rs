//! Attendance and leave records.
//!
//! # Invariants
//! - At most one attendance row exists per employee and date.
//! - A leave request's `end_date`, when set, is not before `start_date`.

use crate::model::validation::{require_text, ValidationError};
use crate::model::RecordId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Daily attendance mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Present" => Some(Self::Present),
            "Absent" => Some(Self::Absent),
            _ => None,
        }
    }
}

/// One employee's attendance on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: RecordId,
    pub employee_id: RecordId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    pub fn new(employee_id: RecordId, date: NaiveDate, status: AttendanceStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id,
            date,
            status,
        }
    }
}

/// Leave request approval state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(Self::Pending),
            "Approved" => Some(Self::Approved),
            "Rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Leave application for a single day (`end_date = None`) or a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: RecordId,
    pub employee_id: RecordId,
    /// Free-form category such as `Casual` or `Sick`.
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: LeaveStatus,
    pub reason: Option<String>,
}

impl LeaveRequest {
    /// Creates a pending request.
    pub fn new(
        employee_id: RecordId,
        leave_type: impl Into<String>,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id,
            leave_type: leave_type.into().trim().to_string(),
            start_date,
            end_date,
            status: LeaveStatus::Pending,
            reason: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("leave_request", "leave_type", &self.leave_type)?;
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(ValidationError::DateRange {
                    start: self.start_date,
                    end,
                });
            }
        }
        Ok(())
    }

    /// Whether an approved leave covers `date`. A missing `end_date` leaves
    /// the range open.
    pub fn is_ongoing_on(&self, date: NaiveDate) -> bool {
        self.status == LeaveStatus::Approved
            && self.start_date <= date
            && self.end_date.map_or(true, |end| end >= date)
    }
}
