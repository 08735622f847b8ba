//! Organisation structure: departments and designations.
//!
//! # Invariants
//! - Names are stored trimmed and never blank.
//! - A blank designation grade is stored as `None`.

use crate::model::validation::{require_text, ValidationError};
use crate::model::{non_blank, RecordId};
use crate::search::filter::Searchable;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;

/// Organisational unit employees belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: RecordId,
    pub name: String,
    /// Unix epoch milliseconds, assigned by storage.
    pub created_at: i64,
}

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into().trim().to_string(),
            created_at: 0,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("department", "name", &self.name)
    }
}

/// Job title with an optional pay grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Designation {
    pub id: RecordId,
    pub name: String,
    pub grade: Option<String>,
    /// Unix epoch milliseconds, assigned by storage.
    pub created_at: i64,
}

impl Designation {
    pub fn new(name: impl Into<String>, grade: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into().trim().to_string(),
            grade: non_blank(grade),
            created_at: 0,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("designation", "name", &self.name)
    }
}

impl Searchable for Department {
    fn field_text(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            "name" => Some(Cow::Borrowed(self.name.as_str())),
            _ => None,
        }
    }
}

impl Searchable for Designation {
    fn field_text(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            "name" => Some(Cow::Borrowed(self.name.as_str())),
            "grade" => self.grade.as_deref().map(Cow::Borrowed),
            _ => None,
        }
    }
}
