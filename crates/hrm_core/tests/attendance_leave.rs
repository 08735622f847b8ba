use chrono::NaiveDate;
use hrm_core::db::open_db_in_memory;
use hrm_core::model::attendance::{AttendanceStatus, LeaveStatus};
use hrm_core::service::attendance_service::AttendanceService;
use hrm_core::service::employee_service::EmployeeService;
use hrm_core::{Employee, RecordId, ServiceError};
use rusqlite::Connection;
use uuid::Uuid;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn hire(conn: &Connection, name: &str, pf: &str) -> RecordId {
    EmployeeService::new(conn)
        .create_employee(Employee::new(name, pf))
        .unwrap()
        .employee
        .id
}

#[test]
fn marking_twice_replaces_the_status() {
    let conn = open_db_in_memory().unwrap();
    let employee_id = hire(&conn, "Rahim", "1");
    let service = AttendanceService::new(&conn);
    let day = ymd(2026, 1, 15);

    let first = service
        .mark_attendance(employee_id, day, AttendanceStatus::Present)
        .unwrap();
    let second = service
        .mark_attendance(employee_id, day, AttendanceStatus::Absent)
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.status, AttendanceStatus::Absent);
    assert_eq!(service.list_attendance(Some(day)).unwrap().len(), 1);
}

#[test]
fn attendance_lists_latest_date_first() {
    let conn = open_db_in_memory().unwrap();
    let employee_id = hire(&conn, "Karim", "2");
    let service = AttendanceService::new(&conn);

    for day in [14, 16, 15] {
        service
            .mark_attendance(employee_id, ymd(2026, 1, day), AttendanceStatus::Present)
            .unwrap();
    }

    let dates: Vec<_> = service
        .list_attendance(None)
        .unwrap()
        .into_iter()
        .map(|record| record.date)
        .collect();
    assert_eq!(dates, [ymd(2026, 1, 16), ymd(2026, 1, 15), ymd(2026, 1, 14)]);
    assert!(service.list_attendance(Some(ymd(2026, 2, 1))).unwrap().is_empty());
}

#[test]
fn unknown_employee_cannot_be_marked() {
    let conn = open_db_in_memory().unwrap();
    let service = AttendanceService::new(&conn);

    let err = service
        .mark_attendance(Uuid::new_v4(), ymd(2026, 1, 15), AttendanceStatus::Present)
        .unwrap_err();
    assert!(matches!(err, ServiceError::MissingReference { entity: "employee", .. }));
}

#[test]
fn leave_moves_from_pending_once() {
    let conn = open_db_in_memory().unwrap();
    let employee_id = hire(&conn, "Sumaiya", "3");
    let service = AttendanceService::new(&conn);

    let request = service
        .submit_leave(
            employee_id,
            " Casual ",
            ymd(2026, 1, 10),
            Some(ymd(2026, 1, 12)),
            Some("  family event "),
        )
        .unwrap();
    assert_eq!(request.status, LeaveStatus::Pending);
    assert_eq!(request.leave_type, "Casual");
    assert_eq!(request.reason.as_deref(), Some("family event"));

    let approved = service.approve_leave(request.id).unwrap();
    assert_eq!(approved.status, LeaveStatus::Approved);

    let err = service.reject_leave(request.id).unwrap_err();
    assert!(matches!(err, ServiceError::InvalidState(_)));

    let pending = service.list_leaves(Some(LeaveStatus::Pending)).unwrap();
    assert!(pending.is_empty());
    assert_eq!(service.list_leaves(None).unwrap().len(), 1);
}

#[test]
fn reversed_leave_range_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let employee_id = hire(&conn, "Biplob", "4");
    let service = AttendanceService::new(&conn);

    let err = service
        .submit_leave(
            employee_id,
            "Sick",
            ymd(2026, 1, 12),
            Some(ymd(2026, 1, 10)),
            None,
        )
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[test]
fn deleting_an_employee_removes_attendance_and_leave() {
    let conn = open_db_in_memory().unwrap();
    let employee_id = hire(&conn, "Anika", "5");
    let service = AttendanceService::new(&conn);
    service
        .mark_attendance(employee_id, ymd(2026, 1, 15), AttendanceStatus::Present)
        .unwrap();
    service
        .submit_leave(employee_id, "Casual", ymd(2026, 1, 20), None, None)
        .unwrap();

    EmployeeService::new(&conn)
        .delete_employee(employee_id)
        .unwrap();

    assert!(service.list_attendance(None).unwrap().is_empty());
    assert!(service.list_leaves(None).unwrap().is_empty());
}
