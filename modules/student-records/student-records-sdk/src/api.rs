//! `StudentRecordsApi` trait definition.

use async_trait::async_trait;

use crate::error::StudentRecordsError;
use crate::models::{NewStudent, Student, StudentPage, StudentPatch, StudentQuery};

/// Public API trait for the `student-records` module.
///
/// In-process consumers hold an `Arc<dyn StudentRecordsApi>`:
/// ```ignore
/// let student = client.get_student("1").await?;
/// ```
#[async_trait]
pub trait StudentRecordsApi: Send + Sync {
    /// List one page of students matching the query, with filter facets.
    ///
    /// Query values are normalized, never rejected.
    ///
    /// # Errors
    ///
    /// * `Internal` - If the underlying store fails
    async fn list_students(&self, query: StudentQuery) -> Result<StudentPage, StudentRecordsError>;

    /// Retrieve a single student by id.
    ///
    /// # Errors
    ///
    /// * `NotFound` - If no student has the given id
    async fn get_student(&self, id: &str) -> Result<Student, StudentRecordsError>;

    /// Create a student with a freshly generated id.
    ///
    /// # Errors
    ///
    /// * `Validation` - If a required field is missing or invalid
    /// * `Conflict` - If the generated id is already taken
    async fn create_student(&self, new_student: NewStudent)
    -> Result<Student, StudentRecordsError>;

    /// Apply a partial update and return the updated student.
    ///
    /// # Errors
    ///
    /// * `Validation` - If a supplied field is invalid; nothing is changed
    /// * `NotFound` - If no student has the given id
    async fn update_student(
        &self,
        id: &str,
        patch: StudentPatch,
    ) -> Result<Student, StudentRecordsError>;

    /// Delete a student by id.
    ///
    /// # Errors
    ///
    /// * `NotFound` - If no student has the given id
    async fn delete_student(&self, id: &str) -> Result<(), StudentRecordsError>;
}
