//! Error types for the student records SDK.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StudentRecordsError {
    #[error("Student not found: {id}")]
    NotFound { id: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Student already exists: {id}")]
    Conflict { id: String },

    #[error("Internal error")]
    Internal,
}

impl StudentRecordsError {
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn conflict(id: impl Into<String>) -> Self {
        Self::Conflict { id: id.into() }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
