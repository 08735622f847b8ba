use chrono::NaiveDate;
use hrm_core::db::open_db_in_memory;
use hrm_core::model::money::Money;
use hrm_core::report::employee_sheet::{CompanyProfile, SheetOptions};
use hrm_core::search::filter::RecordSearch;
use hrm_core::service::employee_service::EmployeeService;
use hrm_core::service::org_service::OrgService;
use hrm_core::{Employee, FixedClock, ServiceError};
use uuid::Uuid;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn employee(name: &str, pf: &str) -> Employee {
    Employee::new(name, pf)
}

#[test]
fn create_normalizes_and_joins_names() {
    let conn = open_db_in_memory().unwrap();
    let org = OrgService::sqlite(&conn);
    let department = org.create_department("Accounts").unwrap();
    let designation = org.create_designation("Accountant", Some("10")).unwrap();
    let service = EmployeeService::new(&conn);

    let mut input = employee("  Sumaiya Islam ", "101");
    input.email = Some("  ".to_string());
    input.department_id = Some(department.id);
    input.designation_id = Some(designation.id);
    input.basic_salary = Some(Money::from_major(19_460));

    let listing = service.create_employee(input).unwrap();
    assert_eq!(listing.employee.name, "Sumaiya Islam");
    assert_eq!(listing.employee.email, None);
    assert_eq!(listing.department_label(), "Accounts");
    assert_eq!(listing.designation_label(), "Accountant");
    assert_eq!(
        listing.employee.basic_salary.map(|amount| amount.to_string()),
        Some("19,460.00".to_string())
    );
}

#[test]
fn unknown_references_are_rejected() {
    let conn = open_db_in_memory().unwrap();
    let service = EmployeeService::new(&conn);

    let mut input = employee("Rezaul Karim", "102");
    let missing = Uuid::new_v4();
    input.department_id = Some(missing);

    let err = service.create_employee(input).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::MissingReference { entity: "department", id } if id == missing
    ));
    assert_eq!(service.count().unwrap(), 0);
}

#[test]
fn update_and_delete_round_through_the_directory() {
    let conn = open_db_in_memory().unwrap();
    let service = EmployeeService::new(&conn);

    let created = service.create_employee(employee("Rahim", "7")).unwrap();
    let mut changed = created.employee.clone();
    changed.home_district = Some("Gazipur".to_string());

    let updated = service.update_employee(changed).unwrap();
    assert_eq!(updated.employee.home_district.as_deref(), Some("Gazipur"));
    assert_eq!(updated.department_label(), "-");

    service.delete_employee(created.employee.id).unwrap();
    let err = service.get_employee(created.employee.id).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "employee", .. }));
}

#[test]
fn deleting_a_department_clears_the_reference() {
    let conn = open_db_in_memory().unwrap();
    let org = OrgService::sqlite(&conn);
    let department = org.create_department("Library").unwrap();
    let service = EmployeeService::new(&conn);

    let mut input = employee("Karim", "9");
    input.department_id = Some(department.id);
    let created = service.create_employee(input).unwrap();

    org.delete_department(department.id).unwrap();
    let listing = service.get_employee(created.employee.id).unwrap();
    assert_eq!(listing.employee.department_id, None);
    assert_eq!(listing.department_label(), "-");
}

#[test]
fn directory_search_filters_without_reordering() {
    let conn = open_db_in_memory().unwrap();
    let org = OrgService::sqlite(&conn);
    let it = org.create_department("IT").unwrap();
    let service = EmployeeService::new(&conn);

    let mut first = employee("Anika Rahman", "201");
    first.blood_group = Some("B+".to_string());
    first.department_id = Some(it.id);
    let mut second = employee("Biplob Das", "202");
    second.home_district = Some("Rajshahi".to_string());
    let mut third = employee("Chandra Roy", "203");
    third.department_id = Some(it.id);

    for input in [first, second, third] {
        service.create_employee(input).unwrap();
    }

    let everyone = service.search_directory("   ").unwrap();
    assert_eq!(everyone.total, 3);
    assert_eq!(everyone.matched(), 3);
    let names: Vec<_> = everyone
        .rows
        .iter()
        .map(|row| row.employee.name.as_str())
        .collect();
    assert_eq!(names, ["Chandra Roy", "Biplob Das", "Anika Rahman"]);

    let in_it = service.search_directory("it").unwrap();
    let names: Vec<_> = in_it
        .rows
        .iter()
        .map(|row| row.employee.name.as_str())
        .collect();
    assert_eq!(names, ["Chandra Roy", "Anika Rahman"]);

    let by_district = service.search_directory("RAJSHAHI").unwrap();
    assert_eq!(by_district.matched(), 1);
    assert_eq!(by_district.total, 3);

    let narrow = EmployeeService::new(&conn).with_search(RecordSearch::new(["pf_number"]));
    assert_eq!(narrow.search_directory("rahman").unwrap().matched(), 0);
    assert_eq!(narrow.search_directory("202").unwrap().matched(), 1);
}

#[test]
fn info_sheet_derives_prl_from_stored_dob() {
    let conn = open_db_in_memory().unwrap();
    let service = EmployeeService::new(&conn);

    let mut input = employee("Habibur Rahaman", "2125");
    input.dob = Some(ymd(1990, 1, 1));
    let created = service.create_employee(input).unwrap();

    let company = CompanyProfile {
        name: "National University".to_string(),
        ..CompanyProfile::default()
    };
    let sheet = service
        .info_sheet(
            created.employee.id,
            &company,
            &FixedClock(ymd(2024, 6, 15)),
            &SheetOptions::default(),
        )
        .unwrap();

    assert_eq!(sheet.prl_date, Some(ymd(2050, 1, 1)));
    assert_eq!(
        sheet.personal.value("Remaining Service"),
        Some("service period remaining: 25 years 06 months 17 days")
    );
    assert_eq!(sheet.document_title(), "employee-2125");
}
