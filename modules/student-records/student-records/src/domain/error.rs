//! Domain error types for the Student Records module.

use student_records_sdk::StudentRecordsError;
use thiserror::Error;

/// Domain-level errors for the Student Records module.
#[derive(Error, Debug)]
pub enum DomainError {
    /// No student has the requested id.
    #[error("Student not found: {0}")]
    NotFound(String),

    /// Required fields were absent or blank on create.
    #[error("All fields are required (missing: {})", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// A supplied field failed validation.
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// A student with the same id is already stored.
    #[error("Student already exists: {0}")]
    AlreadyExists(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl DomainError {
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    #[must_use]
    pub fn missing_fields(fields: Vec<&'static str>) -> Self {
        Self::MissingFields(fields)
    }

    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn already_exists(id: impl Into<String>) -> Self {
        Self::AlreadyExists(id.into())
    }

    /// Returns `true` for errors caused by caller input.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::MissingFields(_) | Self::Validation { .. })
    }
}

impl From<DomainError> for StudentRecordsError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(id) => StudentRecordsError::not_found(id),
            e @ (DomainError::MissingFields(_) | DomainError::Validation { .. }) => {
                StudentRecordsError::validation(e.to_string())
            }
            DomainError::AlreadyExists(id) => StudentRecordsError::conflict(id),
            DomainError::Internal(e) => {
                tracing::error!(error = ?e, "Internal error in student_records");
                StudentRecordsError::internal()
            }
        }
    }
}
