#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for student-records integration tests

use std::sync::Arc;

use student_records::domain::id_gen::SequentialIdGenerator;
use student_records::{
    InMemoryStudentsRepository, NewStudent, NumberInput, ServiceConfig, StudentRecordsService,
};

/// Service over the seeded demo store with ids `t-1`, `t-2`, ...
pub fn create_seeded_service() -> Arc<StudentRecordsService> {
    let repo = Arc::new(InMemoryStudentsRepository::new());
    repo.seed().unwrap();
    service_over(repo)
}

pub fn create_empty_service() -> Arc<StudentRecordsService> {
    service_over(Arc::new(InMemoryStudentsRepository::new()))
}

fn service_over(repo: Arc<InMemoryStudentsRepository>) -> Arc<StudentRecordsService> {
    Arc::new(StudentRecordsService::new(
        repo,
        Arc::new(SequentialIdGenerator::new("t-", 1)),
        ServiceConfig::default(),
    ))
}

pub fn new_student(name: &str, course: &str, year: i64, fees_paid: bool) -> NewStudent {
    NewStudent {
        name: Some(name.to_owned()),
        age: Some(NumberInput::Int(20)),
        course: Some(course.to_owned()),
        email: Some(format!("{}@example.edu", name.to_lowercase().replace(' ', "."))),
        semester: Some(NumberInput::Int(3)),
        enrollment_year: Some(NumberInput::Int(year)),
        fees_paid: Some(fees_paid),
    }
}
