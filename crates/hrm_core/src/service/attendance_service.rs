//! Attendance marking and leave workflow.
//!
//! # Invariants
//! - Attendance and leave rows always reference an existing employee.
//! - Leave requests move `Pending -> Approved` or `Pending -> Rejected` only.

use crate::model::attendance::{AttendanceRecord, AttendanceStatus, LeaveRequest, LeaveStatus};
use crate::model::employee::Employee;
use crate::model::{non_blank, RecordId};
use crate::repo::attendance_repo::{upsert_attendance, SqliteAttendanceStore, SqliteLeaveStore};
use crate::repo::employee_repo::SqliteEmployeeStore;
use crate::repo::record_store::{ListQuery, RecordStore};
use crate::service::{ServiceError, ServiceResult};
use chrono::NaiveDate;
use log::info;
use rusqlite::Connection;

pub struct AttendanceService<'conn> {
    conn: &'conn Connection,
    employees: SqliteEmployeeStore<'conn>,
    attendance: SqliteAttendanceStore<'conn>,
    leaves: SqliteLeaveStore<'conn>,
}

impl<'conn> AttendanceService<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            employees: SqliteEmployeeStore::new(conn),
            attendance: SqliteAttendanceStore::new(conn),
            leaves: SqliteLeaveStore::new(conn),
        }
    }

    /// Marks `employee_id` as `status` on `date`, replacing an earlier mark.
    pub fn mark_attendance(
        &self,
        employee_id: RecordId,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> ServiceResult<AttendanceRecord> {
        self.require_employee(employee_id)?;

        let record = AttendanceRecord::new(employee_id, date, status);
        let id = upsert_attendance(self.conn, &record)?;
        info!(
            "event=attendance_mark module=service status=ok id={id} date={date} mark={}",
            status.as_str()
        );

        self.attendance
            .get(id)?
            .ok_or(ServiceError::InconsistentState(
                "marked attendance not found in read-back",
            ))
    }

    /// Attendance rows, latest date first, optionally for one date only.
    pub fn list_attendance(&self, date: Option<NaiveDate>) -> ServiceResult<Vec<AttendanceRecord>> {
        let mut query = ListQuery::default();
        if let Some(date) = date {
            query = query.filter("date", date.format("%Y-%m-%d").to_string());
        }
        Ok(self.attendance.list(&query)?)
    }

    pub fn submit_leave(
        &self,
        employee_id: RecordId,
        leave_type: &str,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        reason: Option<&str>,
    ) -> ServiceResult<LeaveRequest> {
        self.require_employee(employee_id)?;

        let mut request = LeaveRequest::new(employee_id, leave_type, start_date, end_date);
        request.reason = non_blank(reason);
        request.validate()?;

        let id = self.leaves.insert(&request)?;
        info!("event=leave_submit module=service status=ok id={id}");
        self.read_back_leave(id, "submitted leave not found in read-back")
    }

    pub fn approve_leave(&self, id: RecordId) -> ServiceResult<LeaveRequest> {
        self.decide_leave(id, LeaveStatus::Approved)
    }

    pub fn reject_leave(&self, id: RecordId) -> ServiceResult<LeaveRequest> {
        self.decide_leave(id, LeaveStatus::Rejected)
    }

    /// Leave requests, latest start first, optionally filtered by status.
    pub fn list_leaves(&self, status: Option<LeaveStatus>) -> ServiceResult<Vec<LeaveRequest>> {
        let mut query = ListQuery::default();
        if let Some(status) = status {
            query = query.filter("status", status.as_str().to_string());
        }
        Ok(self.leaves.list(&query)?)
    }

    fn decide_leave(&self, id: RecordId, decision: LeaveStatus) -> ServiceResult<LeaveRequest> {
        let mut request = self.leaves.get(id)?.ok_or(ServiceError::NotFound {
            entity: "leave_request",
            id,
        })?;

        if request.status != LeaveStatus::Pending {
            return Err(ServiceError::InvalidState(format!(
                "leave request {id} is already {}",
                request.status.as_str()
            )));
        }

        request.status = decision;
        self.leaves.update(&request)?;
        info!(
            "event=leave_decide module=service status=ok id={id} decision={}",
            decision.as_str()
        );
        self.read_back_leave(id, "decided leave not found in read-back")
    }

    fn require_employee(&self, id: RecordId) -> ServiceResult<Employee> {
        self.employees
            .get(id)?
            .ok_or(ServiceError::MissingReference {
                entity: "employee",
                id,
            })
    }

    fn read_back_leave(&self, id: RecordId, details: &'static str) -> ServiceResult<LeaveRequest> {
        self.leaves
            .get(id)?
            .ok_or(ServiceError::InconsistentState(details))
    }
}
