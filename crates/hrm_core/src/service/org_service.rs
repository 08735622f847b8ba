//! Department and designation use-cases.
//!
//! # Invariants
//! - Names are trimmed before validation; blank grades become `None`.
//! - Deleting a unit leaves its employees in place with the reference
//!   cleared.

use crate::model::org::{Department, Designation};
use crate::model::{non_blank, RecordId};
use crate::repo::org_repo::{SqliteDepartmentStore, SqliteDesignationStore};
use crate::repo::record_store::{ListQuery, RecordStore};
use crate::service::{ServiceError, ServiceResult};
use log::info;
use rusqlite::Connection;

/// Use-case service over department and designation stores.
pub struct OrgService<D, G>
where
    D: RecordStore<Department>,
    G: RecordStore<Designation>,
{
    departments: D,
    designations: G,
}

impl<'conn> OrgService<SqliteDepartmentStore<'conn>, SqliteDesignationStore<'conn>> {
    /// Creates a service backed by SQLite tables on `conn`.
    pub fn sqlite(conn: &'conn Connection) -> Self {
        Self::new(
            SqliteDepartmentStore::new(conn),
            SqliteDesignationStore::new(conn),
        )
    }
}

impl<D, G> OrgService<D, G>
where
    D: RecordStore<Department>,
    G: RecordStore<Designation>,
{
    pub fn new(departments: D, designations: G) -> Self {
        Self {
            departments,
            designations,
        }
    }

    /// Lists departments, newest first.
    pub fn list_departments(&self) -> ServiceResult<Vec<Department>> {
        Ok(self.departments.list(&ListQuery::default())?)
    }

    pub fn create_department(&self, name: &str) -> ServiceResult<Department> {
        let department = Department::new(name);
        department.validate()?;

        let id = self.departments.insert(&department)?;
        info!("event=department_create module=service status=ok id={id}");
        self.read_back_department(id, "created department not found in read-back")
    }

    pub fn rename_department(&self, id: RecordId, name: &str) -> ServiceResult<Department> {
        let mut department = self.require_department(id)?;
        department.name = name.trim().to_string();
        department.validate()?;

        self.departments.update(&department)?;
        info!("event=department_rename module=service status=ok id={id}");
        self.read_back_department(id, "renamed department not found in read-back")
    }

    pub fn delete_department(&self, id: RecordId) -> ServiceResult<()> {
        self.departments.delete(id)?;
        info!("event=department_delete module=service status=ok id={id}");
        Ok(())
    }

    /// Lists designations by name.
    pub fn list_designations(&self) -> ServiceResult<Vec<Designation>> {
        Ok(self.designations.list(&ListQuery::default())?)
    }

    pub fn create_designation(&self, name: &str, grade: Option<&str>) -> ServiceResult<Designation> {
        let designation = Designation::new(name, grade);
        designation.validate()?;

        let id = self.designations.insert(&designation)?;
        info!("event=designation_create module=service status=ok id={id}");
        self.read_back_designation(id, "created designation not found in read-back")
    }

    pub fn update_designation(
        &self,
        id: RecordId,
        name: &str,
        grade: Option<&str>,
    ) -> ServiceResult<Designation> {
        let mut designation = self
            .designations
            .get(id)?
            .ok_or(ServiceError::NotFound {
                entity: "designation",
                id,
            })?;
        designation.name = name.trim().to_string();
        designation.grade = non_blank(grade);
        designation.validate()?;

        self.designations.update(&designation)?;
        info!("event=designation_update module=service status=ok id={id}");
        self.read_back_designation(id, "updated designation not found in read-back")
    }

    pub fn delete_designation(&self, id: RecordId) -> ServiceResult<()> {
        self.designations.delete(id)?;
        info!("event=designation_delete module=service status=ok id={id}");
        Ok(())
    }

    fn require_department(&self, id: RecordId) -> ServiceResult<Department> {
        self.departments.get(id)?.ok_or(ServiceError::NotFound {
            entity: "department",
            id,
        })
    }

    fn read_back_department(&self, id: RecordId, details: &'static str) -> ServiceResult<Department> {
        self.departments
            .get(id)?
            .ok_or(ServiceError::InconsistentState(details))
    }

    fn read_back_designation(
        &self,
        id: RecordId,
        details: &'static str,
    ) -> ServiceResult<Designation> {
        self.designations
            .get(id)?
            .ok_or(ServiceError::InconsistentState(details))
    }
}
