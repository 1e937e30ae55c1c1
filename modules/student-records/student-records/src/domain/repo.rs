//! Repository trait for student storage.

use student_records_sdk::Student;

use super::error::DomainError;
use super::validation::StudentChanges;

/// Repository trait for student storage operations.
///
/// This trait defines the storage interface used by the domain service.
/// Implementations own the record collection and must keep ids unique.
/// Every method is a single atomic step with respect to other callers.
pub trait StudentsRepository: Send + Sync {
    /// Returns a snapshot of all students in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `Internal` if the store cannot be read.
    fn list(&self) -> Result<Vec<Student>, DomainError>;

    /// Finds a student by id.
    ///
    /// # Errors
    ///
    /// Returns `Internal` if the store cannot be read.
    fn get(&self, id: &str) -> Result<Option<Student>, DomainError>;

    /// Appends a fully-formed student.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if a student with the same id is stored.
    fn insert(&self, student: Student) -> Result<(), DomainError>;

    /// Applies validated changes to the student with the given id and
    /// returns the updated record, or `None` if the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns `Internal` if the store cannot be written.
    fn update(&self, id: &str, changes: &StudentChanges) -> Result<Option<Student>, DomainError>;

    /// Removes the first student with the given id. Returns whether a
    /// record was removed.
    ///
    /// # Errors
    ///
    /// Returns `Internal` if the store cannot be written.
    fn delete(&self, id: &str) -> Result<bool, DomainError>;

    /// Checks if a student with the given id exists.
    fn exists(&self, id: &str) -> bool;

    /// Number of stored students.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
