//! Domain service for the Student Records module.

use std::sync::Arc;

use student_records_sdk::{NewStudent, Student, StudentPage, StudentPatch, StudentQuery};
use tracing::{debug, info};

use super::error::DomainError;
use super::id_gen::IdGenerator;
use super::query::{self, LimitCfg};
use super::repo::StudentsRepository;
use super::validation::{validate_new_student, validate_patch};

/// Runtime settings for the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        let limits = LimitCfg::default();
        Self {
            default_page_size: limits.default,
            max_page_size: limits.max,
        }
    }
}

impl ServiceConfig {
    #[must_use]
    pub const fn limit_cfg(&self) -> LimitCfg {
        LimitCfg {
            default: self.default_page_size,
            max: self.max_page_size,
        }
    }
}

/// Domain service for student records.
///
/// Validation happens here; the repository only stores fully-formed records.
pub struct StudentRecordsService {
    repo: Arc<dyn StudentsRepository>,
    ids: Arc<dyn IdGenerator>,
    config: ServiceConfig,
}

impl StudentRecordsService {
    #[must_use]
    pub fn new(
        repo: Arc<dyn StudentsRepository>,
        ids: Arc<dyn IdGenerator>,
        config: ServiceConfig,
    ) -> Self {
        Self { repo, ids, config }
    }

    /// Filters, searches and paginates the store.
    ///
    /// # Errors
    ///
    /// Only fails if the repository cannot produce a snapshot.
    pub fn list(&self, query: &StudentQuery) -> Result<StudentPage, DomainError> {
        let records = self.repo.list()?;
        let page = query::run(&records, query, self.config.limit_cfg());
        debug!(
            total = page.total,
            page = page.page,
            total_pages = page.total_pages,
            "Listed students"
        );
        Ok(page)
    }

    /// # Errors
    ///
    /// `NotFound` if no student has the id.
    pub fn get(&self, id: &str) -> Result<Student, DomainError> {
        debug!(id, "Getting student");
        self.repo
            .get(id)?
            .ok_or_else(|| DomainError::not_found(id))
    }

    /// Validates the input, assigns a fresh id and stores the new student.
    ///
    /// # Errors
    ///
    /// `MissingFields` or `Validation` for bad input; `AlreadyExists` if the
    /// generated id collides with a stored one.
    pub fn create(&self, new_student: NewStudent) -> Result<Student, DomainError> {
        let draft = validate_new_student(new_student)?;
        let student = draft.into_student(self.ids.next_id());
        self.repo.insert(student.clone())?;
        info!(id = %student.id, "Created student");
        Ok(student)
    }

    /// Applies a partial update. The record is located first, then the
    /// whole patch is validated before any field changes.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `Validation` for a bad field.
    pub fn update(&self, id: &str, patch: StudentPatch) -> Result<Student, DomainError> {
        if !self.repo.exists(id) {
            return Err(DomainError::not_found(id));
        }
        let changes = validate_patch(patch)?;
        let updated = self
            .repo
            .update(id, &changes)?
            .ok_or_else(|| DomainError::not_found(id))?;
        info!(id, "Updated student");
        Ok(updated)
    }

    /// Removes a student. Returns whether a record was removed.
    ///
    /// # Errors
    ///
    /// Only fails if the repository cannot be written.
    pub fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let removed = self.repo.delete(id)?;
        if removed {
            info!(id, "Deleted student");
        } else {
            debug!(id, "Delete requested for unknown student");
        }
        Ok(removed)
    }

    /// Number of stored students.
    #[must_use]
    pub fn count(&self) -> usize {
        self.repo.len()
    }
}
