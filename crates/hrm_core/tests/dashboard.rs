use chrono::NaiveDate;
use hrm_core::db::open_db_in_memory;
use hrm_core::model::attendance::AttendanceStatus;
use hrm_core::service::attendance_service::AttendanceService;
use hrm_core::service::dashboard_service::{DashboardService, RECENT_ACTIVITY_LIMIT};
use hrm_core::service::employee_service::EmployeeService;
use hrm_core::service::org_service::OrgService;
use hrm_core::{Employee, FixedClock};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn empty_database_yields_zero_metrics() {
    let conn = open_db_in_memory().unwrap();
    let dashboard = DashboardService::new(&conn, FixedClock(ymd(2026, 1, 15)));

    let metrics = dashboard.metrics().unwrap();
    assert_eq!(metrics.total_employees, 0);
    assert_eq!(metrics.present_today, 0);
    assert!(dashboard.leave_summary().unwrap().is_empty());
    assert!(dashboard.recent_activities().unwrap().is_empty());
}

#[test]
fn metrics_count_today_only() {
    let conn = open_db_in_memory().unwrap();
    let today = ymd(2026, 1, 15);
    let employees = EmployeeService::new(&conn);
    let ids: Vec<_> = ["Rahim", "Karim", "Salma"]
        .iter()
        .enumerate()
        .map(|(index, name)| {
            employees
                .create_employee(Employee::new(*name, format!("{}", index + 1)))
                .unwrap()
                .employee
                .id
        })
        .collect();

    let attendance = AttendanceService::new(&conn);
    attendance
        .mark_attendance(ids[0], today, AttendanceStatus::Present)
        .unwrap();
    attendance
        .mark_attendance(ids[1], today, AttendanceStatus::Absent)
        .unwrap();
    attendance
        .mark_attendance(ids[2], ymd(2026, 1, 14), AttendanceStatus::Present)
        .unwrap();

    let open_ended = attendance
        .submit_leave(ids[1], "Sick", ymd(2026, 1, 10), None, None)
        .unwrap();
    attendance.approve_leave(open_ended.id).unwrap();
    let finished = attendance
        .submit_leave(ids[2], "Casual", ymd(2026, 1, 1), Some(ymd(2026, 1, 3)), None)
        .unwrap();
    attendance.approve_leave(finished.id).unwrap();
    attendance
        .submit_leave(ids[0], "Casual", ymd(2026, 1, 15), None, None)
        .unwrap();

    let metrics = DashboardService::new(&conn, FixedClock(today))
        .metrics()
        .unwrap();
    assert_eq!(metrics.total_employees, 3);
    assert_eq!(metrics.present_today, 1);
    assert_eq!(metrics.absent_today, 1);
    assert_eq!(metrics.ongoing_leaves, 1);
}

#[test]
fn leave_summary_groups_by_type() {
    let conn = open_db_in_memory().unwrap();
    let employee_id = EmployeeService::new(&conn)
        .create_employee(Employee::new("Rahim", "1"))
        .unwrap()
        .employee
        .id;
    let attendance = AttendanceService::new(&conn);

    for day in [1, 5, 9] {
        let request = attendance
            .submit_leave(employee_id, "Casual", ymd(2026, 2, day), None, None)
            .unwrap();
        if day != 9 {
            attendance.approve_leave(request.id).unwrap();
        }
    }
    let sick = attendance
        .submit_leave(employee_id, "Sick", ymd(2026, 3, 1), None, None)
        .unwrap();
    attendance.reject_leave(sick.id).unwrap();

    let summary = DashboardService::new(&conn, FixedClock(ymd(2026, 3, 2)))
        .leave_summary()
        .unwrap();
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].leave_type, "Casual");
    assert_eq!((summary[0].used, summary[0].total, summary[0].remaining), (2, 3, 1));
    assert_eq!(summary[1].leave_type, "Sick");
    assert_eq!((summary[1].used, summary[1].total, summary[1].remaining), (0, 1, 1));
}

#[test]
fn recent_activity_shows_newest_five() {
    let conn = open_db_in_memory().unwrap();
    let hr = OrgService::sqlite(&conn).create_department("HR").unwrap();
    let employees = EmployeeService::new(&conn);

    for index in 1..=7 {
        let mut employee = Employee::new(format!("Employee {index}"), index.to_string());
        if index == 7 {
            employee.department_id = Some(hr.id);
        }
        employees.create_employee(employee).unwrap();
    }

    let activities = DashboardService::new(&conn, FixedClock(ymd(2026, 1, 15)))
        .recent_activities()
        .unwrap();
    assert_eq!(activities.len(), RECENT_ACTIVITY_LIMIT as usize);
    assert_eq!(activities[0].title, "New employee added");
    assert_eq!(activities[0].detail, "Employee 7 - HR");
    assert_eq!(activities[1].detail, "Employee 6");
    assert_ne!(activities[0].time, "-");
}
