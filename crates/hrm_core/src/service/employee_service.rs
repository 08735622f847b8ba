//! Employee directory use-cases.
//!
//! # Responsibility
//! - Create, update and delete employees after normalizing form input.
//! - Serve the searchable directory and the printable information sheet.
//!
//! # Invariants
//! - Department and designation references must point at existing rows.
//! - Directory order is newest first, and searching never reorders it.

use crate::dates::Clock;
use crate::model::employee::{Employee, EmployeeListing};
use crate::model::RecordId;
use crate::report::employee_sheet::{CompanyProfile, EmployeeInfoSheet, SheetOptions};
use crate::repo::employee_repo::{
    count_employees, get_employee_listing, list_employee_directory, SqliteEmployeeStore,
};
use crate::repo::org_repo::{SqliteDepartmentStore, SqliteDesignationStore};
use crate::repo::record_store::RecordStore;
use crate::search::filter::RecordSearch;
use crate::service::{ServiceError, ServiceResult};
use log::info;
use rusqlite::Connection;

/// Filtered directory plus the counts shown above the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPage {
    pub rows: Vec<EmployeeListing>,
    /// Rows before filtering.
    pub total: usize,
}

impl DirectoryPage {
    pub fn matched(&self) -> usize {
        self.rows.len()
    }
}

pub struct EmployeeService<'conn> {
    conn: &'conn Connection,
    employees: SqliteEmployeeStore<'conn>,
    departments: SqliteDepartmentStore<'conn>,
    designations: SqliteDesignationStore<'conn>,
    search: RecordSearch,
}

impl<'conn> EmployeeService<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            employees: SqliteEmployeeStore::new(conn),
            departments: SqliteDepartmentStore::new(conn),
            designations: SqliteDesignationStore::new(conn),
            search: RecordSearch::employee_directory(),
        }
    }

    /// Replaces the directory search fields.
    pub fn with_search(mut self, search: RecordSearch) -> Self {
        self.search = search;
        self
    }

    pub fn create_employee(&self, mut employee: Employee) -> ServiceResult<EmployeeListing> {
        employee.normalize();
        employee.validate()?;
        self.check_references(&employee)?;

        let id = self.employees.insert(&employee)?;
        info!("event=employee_create module=service status=ok id={id}");
        self.read_back(id, "created employee not found in read-back")
    }

    pub fn update_employee(&self, mut employee: Employee) -> ServiceResult<EmployeeListing> {
        employee.normalize();
        employee.validate()?;
        self.check_references(&employee)?;

        self.employees.update(&employee)?;
        info!(
            "event=employee_update module=service status=ok id={}",
            employee.id
        );
        self.read_back(employee.id, "updated employee not found in read-back")
    }

    pub fn delete_employee(&self, id: RecordId) -> ServiceResult<()> {
        self.employees.delete(id)?;
        info!("event=employee_delete module=service status=ok id={id}");
        Ok(())
    }

    pub fn get_employee(&self, id: RecordId) -> ServiceResult<EmployeeListing> {
        get_employee_listing(self.conn, id)?.ok_or(ServiceError::NotFound {
            entity: "employee",
            id,
        })
    }

    /// Full directory, newest first.
    pub fn directory(&self) -> ServiceResult<Vec<EmployeeListing>> {
        Ok(list_employee_directory(self.conn, None)?)
    }

    /// Directory filtered by `query`; a blank query keeps every row.
    pub fn search_directory(&self, query: &str) -> ServiceResult<DirectoryPage> {
        let listings = self.directory()?;
        let total = listings.len();
        let rows = self
            .search
            .filter(&listings, query)
            .into_iter()
            .cloned()
            .collect();

        Ok(DirectoryPage { rows, total })
    }

    pub fn count(&self) -> ServiceResult<u64> {
        Ok(count_employees(self.conn)?)
    }

    /// Builds the printable information sheet for one employee.
    pub fn info_sheet<C: Clock>(
        &self,
        id: RecordId,
        company: &CompanyProfile,
        clock: &C,
        options: &SheetOptions,
    ) -> ServiceResult<EmployeeInfoSheet> {
        let listing = self.get_employee(id)?;
        Ok(EmployeeInfoSheet::build(&listing, company, clock, options))
    }

    fn check_references(&self, employee: &Employee) -> ServiceResult<()> {
        if let Some(id) = employee.department_id {
            if self.departments.get(id)?.is_none() {
                return Err(ServiceError::MissingReference {
                    entity: "department",
                    id,
                });
            }
        }
        if let Some(id) = employee.designation_id {
            if self.designations.get(id)?.is_none() {
                return Err(ServiceError::MissingReference {
                    entity: "designation",
                    id,
                });
            }
        }
        Ok(())
    }

    fn read_back(&self, id: RecordId, details: &'static str) -> ServiceResult<EmployeeListing> {
        get_employee_listing(self.conn, id)?.ok_or(ServiceError::InconsistentState(details))
    }
}
