//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical employee record and its directory projection.
//! - Expose searchable fields under the names the directory screen uses.
//!
//! # Invariants
//! - `name` and `pf_number` are never blank.
//! - Optional text fields are `None` rather than empty strings after
//!   [`Employee::normalize`].
//! - The PRL (retirement) date is derived from `dob`, never stored.

use crate::dates::target_date;
use crate::model::money::Money;
use crate::model::validation::{require_text, ValidationError};
use crate::model::{non_blank, RecordId};
use crate::search::filter::Searchable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;

/// Canonical employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: RecordId,
    pub name: String,
    /// Provident fund number; the human-facing employee key.
    pub pf_number: String,
    pub mobile_number: Option<String>,
    pub email: Option<String>,
    pub dob: Option<NaiveDate>,
    /// National identity card number.
    pub nid: Option<String>,
    pub gender: Option<String>,
    /// e.g. `Full-time`, `Contract`.
    pub employee_type: Option<String>,
    /// e.g. `Active`, `On leave`.
    pub employee_status: Option<String>,
    pub present_address: Option<String>,
    pub permanent_address: Option<String>,
    pub blood_group: Option<String>,
    pub home_district: Option<String>,
    pub bank_name: Option<String>,
    pub bank_branch: Option<String>,
    pub account_no: Option<String>,
    pub joining_date: Option<NaiveDate>,
    pub about: Option<String>,
    pub basic_salary: Option<Money>,
    pub department_id: Option<RecordId>,
    pub designation_id: Option<RecordId>,
    /// Unix epoch milliseconds, assigned by storage.
    pub created_at: i64,
}

impl Employee {
    /// Creates an employee with only the required fields set.
    pub fn new(name: impl Into<String>, pf_number: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            pf_number: pf_number.into(),
            mobile_number: None,
            email: None,
            dob: None,
            nid: None,
            gender: None,
            employee_type: None,
            employee_status: None,
            present_address: None,
            permanent_address: None,
            blood_group: None,
            home_district: None,
            bank_name: None,
            bank_branch: None,
            account_no: None,
            joining_date: None,
            about: None,
            basic_salary: None,
            department_id: None,
            designation_id: None,
            created_at: 0,
        }
    }

    /// Trims every text field and turns blank optional values into `None`.
    pub fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.pf_number = self.pf_number.trim().to_string();

        for field in [
            &mut self.mobile_number,
            &mut self.email,
            &mut self.nid,
            &mut self.gender,
            &mut self.employee_type,
            &mut self.employee_status,
            &mut self.present_address,
            &mut self.permanent_address,
            &mut self.blood_group,
            &mut self.home_district,
            &mut self.bank_name,
            &mut self.bank_branch,
            &mut self.account_no,
            &mut self.about,
        ] {
            *field = non_blank(field.as_deref());
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("employee", "name", &self.name)?;
        require_text("employee", "pf_number", &self.pf_number)?;
        if self.basic_salary.is_some_and(Money::is_negative) {
            return Err(ValidationError::NegativeAmount {
                field: "basic_salary",
            });
        }
        Ok(())
    }

    /// PRL date: `dob` shifted by `offset_years`.
    pub fn retirement_date(&self, offset_years: u32) -> Option<NaiveDate> {
        target_date(self.dob, offset_years)
    }
}

impl Searchable for Employee {
    fn field_text(&self, field: &str) -> Option<Cow<'_, str>> {
        let text = match field {
            "name" => Some(self.name.as_str()),
            "pf_number" => Some(self.pf_number.as_str()),
            "mobile_number" => self.mobile_number.as_deref(),
            "employee_email" | "email" => self.email.as_deref(),
            "nid" => self.nid.as_deref(),
            "gender" => self.gender.as_deref(),
            "employee_type" => self.employee_type.as_deref(),
            "employee_status" => self.employee_status.as_deref(),
            "blood_group" => self.blood_group.as_deref(),
            "home_district" => self.home_district.as_deref(),
            "present_address" => self.present_address.as_deref(),
            "permanent_address" => self.permanent_address.as_deref(),
            _ => None,
        };
        text.map(Cow::Borrowed)
    }
}

/// Directory row: an employee joined with department and designation names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeListing {
    pub employee: Employee,
    pub department_name: Option<String>,
    pub designation_name: Option<String>,
}

impl EmployeeListing {
    /// Department name, or `-` when unassigned.
    pub fn department_label(&self) -> &str {
        self.department_name.as_deref().unwrap_or("-")
    }

    /// Designation name, or `-` when unassigned.
    pub fn designation_label(&self) -> &str {
        self.designation_name.as_deref().unwrap_or("-")
    }
}

impl Searchable for EmployeeListing {
    fn field_text(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            "dept" | "department" => self.department_name.as_deref().map(Cow::Borrowed),
            "designation" => self.designation_name.as_deref().map(Cow::Borrowed),
            other => self.employee.field_text(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Employee, EmployeeListing};
    use crate::model::money::Money;
    use crate::model::validation::ValidationError;
    use crate::search::filter::{filter_records, EMPLOYEE_DIRECTORY_FIELDS};
    use chrono::NaiveDate;

    #[test]
    fn normalize_trims_and_clears_blank_fields() {
        let mut employee = Employee::new("  Habibur Rahaman ", " 2125 ");
        employee.email = Some("   ".to_string());
        employee.home_district = Some(" Dhaka ".to_string());
        employee.normalize();

        assert_eq!(employee.name, "Habibur Rahaman");
        assert_eq!(employee.pf_number, "2125");
        assert_eq!(employee.email, None);
        assert_eq!(employee.home_district.as_deref(), Some("Dhaka"));
    }

    #[test]
    fn name_and_pf_number_are_required() {
        let err = Employee::new("", "2125").validate().unwrap_err();
        assert!(matches!(err, ValidationError::EmptyField { field: "name", .. }));

        let err = Employee::new("Rahim", "  ").validate().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::EmptyField {
                field: "pf_number",
                ..
            }
        ));
    }

    #[test]
    fn negative_salary_is_rejected() {
        let mut employee = Employee::new("Rahim", "1");
        employee.basic_salary = Some(Money::from_major(-1));
        assert_eq!(
            employee.validate().unwrap_err(),
            ValidationError::NegativeAmount {
                field: "basic_salary"
            }
        );
    }

    #[test]
    fn retirement_date_is_derived_from_dob() {
        let mut employee = Employee::new("Rahim", "1");
        assert_eq!(employee.retirement_date(60), None);

        employee.dob = NaiveDate::from_ymd_opt(1990, 1, 1);
        assert_eq!(
            employee.retirement_date(60),
            NaiveDate::from_ymd_opt(2050, 1, 1)
        );
    }

    #[test]
    fn directory_search_covers_joined_names() {
        let mut first = Employee::new("Sumaiya Islam", "101");
        first.blood_group = Some("O+".to_string());
        let second = Employee::new("Rezaul Karim", "102");

        let listings = vec![
            EmployeeListing {
                employee: first,
                department_name: Some("Accounts".to_string()),
                designation_name: Some("Accountant".to_string()),
            },
            EmployeeListing {
                employee: second,
                department_name: None,
                designation_name: Some("IT Officer".to_string()),
            },
        ];

        let hits = filter_records(&listings, "o+", EMPLOYEE_DIRECTORY_FIELDS);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].employee.pf_number, "101");

        let hits = filter_records(&listings, "it officer", EMPLOYEE_DIRECTORY_FIELDS);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].department_label(), "-");
    }
}
