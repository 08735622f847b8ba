//! Employee table mapping and directory queries.
//!
//! # Responsibility
//! - Map [`Employee`] onto the `employees` table.
//! - Serve the directory projection joined with department and designation
//!   names.
//!
//! # Invariants
//! - Directory rows are ordered newest first (`created_at DESC`).
//! - Missing departments/designations yield `None` names, never errors.

use crate::model::employee::{Employee, EmployeeListing};
use crate::model::money::Money;
use crate::model::validation::ValidationError;
use crate::model::RecordId;
use crate::repo::record_store::{
    optional_date_value, optional_id_value, read_id, read_optional_date, read_optional_id,
    text_value, RepoResult, SqliteRecordStore, TableRecord,
};
use rusqlite::types::Value;
use rusqlite::{params, Connection, Row};

pub type SqliteEmployeeStore<'conn> = SqliteRecordStore<'conn, Employee>;

const EMPLOYEE_COLUMNS: &[&str] = &[
    "name",
    "pf_number",
    "mobile_number",
    "email",
    "dob",
    "nid",
    "gender",
    "employee_type",
    "employee_status",
    "present_address",
    "permanent_address",
    "blood_group",
    "home_district",
    "bank_name",
    "bank_branch",
    "account_no",
    "joining_date",
    "about",
    "basic_salary",
    "department_id",
    "designation_id",
];

impl TableRecord for Employee {
    const TABLE: &'static str = "employees";
    const COLUMNS: &'static [&'static str] = EMPLOYEE_COLUMNS;
    const ORDER_BY: &'static str = "created_at DESC, rowid DESC";

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate_record(&self) -> Result<(), ValidationError> {
        self.validate()
    }

    fn column_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.name.clone()),
            Value::Text(self.pf_number.clone()),
            text_value(self.mobile_number.as_deref()),
            text_value(self.email.as_deref()),
            optional_date_value(self.dob),
            text_value(self.nid.as_deref()),
            text_value(self.gender.as_deref()),
            text_value(self.employee_type.as_deref()),
            text_value(self.employee_status.as_deref()),
            text_value(self.present_address.as_deref()),
            text_value(self.permanent_address.as_deref()),
            text_value(self.blood_group.as_deref()),
            text_value(self.home_district.as_deref()),
            text_value(self.bank_name.as_deref()),
            text_value(self.bank_branch.as_deref()),
            text_value(self.account_no.as_deref()),
            optional_date_value(self.joining_date),
            text_value(self.about.as_deref()),
            self.basic_salary
                .map_or(Value::Null, |amount| Value::Integer(amount.minor_units())),
            optional_id_value(self.department_id),
            optional_id_value(self.designation_id),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: read_id(row, "id")?,
            name: row.get("name")?,
            pf_number: row.get("pf_number")?,
            mobile_number: row.get("mobile_number")?,
            email: row.get("email")?,
            dob: read_optional_date(row, "dob")?,
            nid: row.get("nid")?,
            gender: row.get("gender")?,
            employee_type: row.get("employee_type")?,
            employee_status: row.get("employee_status")?,
            present_address: row.get("present_address")?,
            permanent_address: row.get("permanent_address")?,
            blood_group: row.get("blood_group")?,
            home_district: row.get("home_district")?,
            bank_name: row.get("bank_name")?,
            bank_branch: row.get("bank_branch")?,
            account_no: row.get("account_no")?,
            joining_date: read_optional_date(row, "joining_date")?,
            about: row.get("about")?,
            basic_salary: row
                .get::<_, Option<i64>>("basic_salary")?
                .map(Money::from_minor),
            department_id: read_optional_id(row, "department_id")?,
            designation_id: read_optional_id(row, "designation_id")?,
            created_at: row.get("created_at")?,
        })
    }
}

/// Lists directory rows, newest first. `limit = None` returns every row.
pub fn list_employee_directory(
    conn: &Connection,
    limit: Option<u32>,
) -> RepoResult<Vec<EmployeeListing>> {
    let sql = format!(
        "{} ORDER BY e.created_at DESC, e.rowid DESC LIMIT ?1;",
        directory_select_sql()
    );
    let limit = limit.map_or(-1, i64::from);

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(params![limit])?;
    let mut listings = Vec::new();

    while let Some(row) = rows.next()? {
        listings.push(parse_listing_row(row)?);
    }

    Ok(listings)
}

/// Gets one directory row by employee id.
pub fn get_employee_listing(
    conn: &Connection,
    id: RecordId,
) -> RepoResult<Option<EmployeeListing>> {
    let sql = format!("{} WHERE e.id = ?1;", directory_select_sql());
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(params![id.to_string()])?;

    if let Some(row) = rows.next()? {
        return Ok(Some(parse_listing_row(row)?));
    }

    Ok(None)
}

/// Counts employee rows.
pub fn count_employees(conn: &Connection) -> RepoResult<u64> {
    let count = conn.query_row("SELECT COUNT(*) FROM employees;", [], |row| {
        row.get::<_, i64>(0)
    })?;
    Ok(u64::try_from(count).unwrap_or(0))
}

fn directory_select_sql() -> String {
    let employee_columns = std::iter::once("id")
        .chain(EMPLOYEE_COLUMNS.iter().copied())
        .chain(std::iter::once("created_at"))
        .map(|column| format!("e.{column} AS {column}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "SELECT {employee_columns},
                d.name AS department_name,
                g.name AS designation_name
         FROM employees e
         LEFT JOIN departments d ON d.id = e.department_id
         LEFT JOIN designations g ON g.id = e.designation_id"
    )
}

fn parse_listing_row(row: &Row<'_>) -> RepoResult<EmployeeListing> {
    let employee = Employee::from_row(row)?;
    employee.validate()?;

    Ok(EmployeeListing {
        employee,
        department_name: row.get("department_name")?,
        designation_name: row.get("designation_name")?,
    })
}
