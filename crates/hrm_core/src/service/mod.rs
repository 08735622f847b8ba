//! Use-case services, one per HR screen.
//!
//! # Responsibility
//! - Orchestrate repository calls into screen-level operations.
//! - Normalize form input before it reaches the record store.
//! - Translate repository failures into service errors callers can show.
//!
//! # Invariants
//! - Services never bypass repository validation.
//! - Every create/update returns the read-back record, not the input.

use crate::model::validation::ValidationError;
use crate::model::RecordId;
use crate::repo::record_store::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod attendance_service;
pub mod dashboard_service;
pub mod employee_service;
pub mod org_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for HR use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Input violates a record invariant.
    Validation(ValidationError),
    /// Target record does not exist.
    NotFound { entity: &'static str, id: RecordId },
    /// A referenced department/designation/employee does not exist.
    MissingReference { entity: &'static str, id: RecordId },
    /// The operation is not allowed in the record's current state.
    InvalidState(String),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::MissingReference { entity, id } => {
                write!(f, "referenced {entity} does not exist: {id}")
            }
            Self::InvalidState(message) => write!(f, "{message}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent state: {details}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::NotFound { table, id } => Self::NotFound { entity: table, id },
            other => Self::Repo(other),
        }
    }
}
