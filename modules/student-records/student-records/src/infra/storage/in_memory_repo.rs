//! In-memory repository implementation.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use student_records_sdk::Student;

use super::seed::demo_students;
use crate::domain::error::DomainError;
use crate::domain::repo::StudentsRepository;
use crate::domain::validation::StudentChanges;

/// In-memory student store.
///
/// Records live in a single `Vec` in insertion order behind one `RwLock`:
/// reads share the lock, and every mutation completes under a single write
/// acquisition.
#[derive(Default)]
pub struct InMemoryStudentsRepository {
    students: RwLock<Vec<Student>>,
    seeded: AtomicBool,
}

impl InMemoryStudentsRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the given students, in order.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if two students share an id.
    pub fn with_students(students: Vec<Student>) -> Result<Self, DomainError> {
        let repo = Self::new();
        for student in students {
            repo.insert(student)?;
        }
        Ok(repo)
    }

    /// Loads the demo records. Only the first call per repository has any
    /// effect; returns whether this call seeded.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if a demo id was inserted before seeding.
    pub fn seed(&self) -> Result<bool, DomainError> {
        let mut students = self.students.write();
        if self.seeded.load(Ordering::SeqCst) {
            return Ok(false);
        }
        let demo = demo_students();
        if let Some(dup) = demo
            .iter()
            .find(|d| students.iter().any(|s| s.id == d.id))
        {
            return Err(DomainError::already_exists(dup.id.clone()));
        }
        students.extend(demo);
        self.seeded.store(true, Ordering::SeqCst);
        tracing::info!(count = students.len(), "Seeded student records");
        Ok(true)
    }
}

impl StudentsRepository for InMemoryStudentsRepository {
    fn list(&self) -> Result<Vec<Student>, DomainError> {
        Ok(self.students.read().clone())
    }

    fn get(&self, id: &str) -> Result<Option<Student>, DomainError> {
        Ok(self.students.read().iter().find(|s| s.id == id).cloned())
    }

    fn insert(&self, student: Student) -> Result<(), DomainError> {
        let mut students = self.students.write();
        if students.iter().any(|s| s.id == student.id) {
            return Err(DomainError::already_exists(student.id));
        }
        students.push(student);
        Ok(())
    }

    fn update(&self, id: &str, changes: &StudentChanges) -> Result<Option<Student>, DomainError> {
        let mut students = self.students.write();
        Ok(students.iter_mut().find(|s| s.id == id).map(|student| {
            changes.apply(student);
            student.clone()
        }))
    }

    fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let mut students = self.students.write();
        match students.iter().position(|s| s.id == id) {
            Some(index) => {
                students.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn exists(&self, id: &str) -> bool {
        self.students.read().iter().any(|s| s.id == id)
    }

    fn len(&self) -> usize {
        self.students.read().len()
    }
}
