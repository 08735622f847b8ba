//! Dashboard aggregates.
//!
//! # Responsibility
//! - Count employees, today's attendance and ongoing approved leaves.
//! - Summarize leave usage per type and list recent directory activity.
//!
//! # Invariants
//! - "Today" always comes from the injected [`Clock`].
//! - Remaining leave never goes below zero.

use crate::dates::{format_long_date, Clock};
use crate::model::attendance::AttendanceStatus;
use crate::repo::attendance_repo::{count_attendance, count_ongoing_leaves, leave_type_counts};
use crate::repo::employee_repo::{count_employees, list_employee_directory};
use crate::service::ServiceResult;
use chrono::{DateTime, Utc};
use log::debug;
use rusqlite::Connection;
use serde::Serialize;

/// Number of activity rows shown on the dashboard.
pub const RECENT_ACTIVITY_LIMIT: u32 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardMetrics {
    pub total_employees: u64,
    pub present_today: u64,
    pub absent_today: u64,
    pub ongoing_leaves: u64,
}

/// Leave usage for one leave type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaveSummary {
    pub leave_type: String,
    /// Approved requests.
    pub used: u32,
    /// All requests regardless of status.
    pub total: u32,
    pub remaining: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityItem {
    pub title: String,
    pub detail: String,
    pub time: String,
}

pub struct DashboardService<'conn, C> {
    conn: &'conn Connection,
    clock: C,
}

impl<'conn, C: Clock> DashboardService<'conn, C> {
    pub fn new(conn: &'conn Connection, clock: C) -> Self {
        Self { conn, clock }
    }

    pub fn metrics(&self) -> ServiceResult<DashboardMetrics> {
        let today = self.clock.today();
        let metrics = DashboardMetrics {
            total_employees: count_employees(self.conn)?,
            present_today: count_attendance(self.conn, today, AttendanceStatus::Present)?,
            absent_today: count_attendance(self.conn, today, AttendanceStatus::Absent)?,
            ongoing_leaves: count_ongoing_leaves(self.conn, today)?,
        };

        debug!(
            "event=dashboard_metrics module=service status=ok date={today} employees={}",
            metrics.total_employees
        );
        Ok(metrics)
    }

    pub fn leave_summary(&self) -> ServiceResult<Vec<LeaveSummary>> {
        Ok(leave_type_counts(self.conn)?
            .into_iter()
            .map(|(leave_type, used, total)| LeaveSummary {
                leave_type,
                used,
                total,
                remaining: total.saturating_sub(used),
            })
            .collect())
    }

    /// Most recently added employees as activity rows, newest first.
    ///
    /// The detail line is `name - department`, or just the name when the
    /// employee has no department.
    pub fn recent_activities(&self) -> ServiceResult<Vec<ActivityItem>> {
        let listings = list_employee_directory(self.conn, Some(RECENT_ACTIVITY_LIMIT))?;

        Ok(listings
            .iter()
            .map(|listing| {
                let added_on = DateTime::<Utc>::from_timestamp_millis(listing.employee.created_at)
                    .map(|stamp| stamp.date_naive());
                ActivityItem {
                    title: "New employee added".to_string(),
                    detail: match listing.department_name.as_deref() {
                        Some(department) => format!("{} - {department}", listing.employee.name),
                        None => listing.employee.name.clone(),
                    },
                    time: format_long_date(added_on),
                }
            })
            .collect())
    }
}
