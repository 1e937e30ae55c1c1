//! Local client implementing the `StudentRecordsApi` trait.

use std::sync::Arc;

use async_trait::async_trait;
use student_records_sdk::{
    NewStudent, Student, StudentPage, StudentPatch, StudentQuery, StudentRecordsApi,
    StudentRecordsError,
};

use crate::domain::service::StudentRecordsService;

/// Local client for the Student Records module.
///
/// Delegates to the domain service and converts domain errors to the SDK
/// error type.
pub struct StudentRecordsLocalClient {
    service: Arc<StudentRecordsService>,
}

impl StudentRecordsLocalClient {
    #[must_use]
    pub fn new(service: Arc<StudentRecordsService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl StudentRecordsApi for StudentRecordsLocalClient {
    async fn list_students(&self, query: StudentQuery) -> Result<StudentPage, StudentRecordsError> {
        self.service.list(&query).map_err(StudentRecordsError::from)
    }

    async fn get_student(&self, id: &str) -> Result<Student, StudentRecordsError> {
        self.service.get(id).map_err(StudentRecordsError::from)
    }

    async fn create_student(&self, new_student: NewStudent) -> Result<Student, StudentRecordsError> {
        self.service
            .create(new_student)
            .map_err(StudentRecordsError::from)
    }

    async fn update_student(
        &self,
        id: &str,
        patch: StudentPatch,
    ) -> Result<Student, StudentRecordsError> {
        self.service
            .update(id, patch)
            .map_err(StudentRecordsError::from)
    }

    async fn delete_student(&self, id: &str) -> Result<(), StudentRecordsError> {
        if self.service.delete(id)? {
            Ok(())
        } else {
            Err(StudentRecordsError::not_found(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id_gen::SequentialIdGenerator;
    use crate::domain::service::ServiceConfig;
    use crate::infra::InMemoryStudentsRepository;
    use student_records_sdk::NumberInput;

    fn create_client() -> StudentRecordsLocalClient {
        let repo = Arc::new(InMemoryStudentsRepository::new());
        repo.seed().unwrap();
        let service = Arc::new(StudentRecordsService::new(
            repo,
            Arc::new(SequentialIdGenerator::new("new-", 1)),
            ServiceConfig::default(),
        ));
        StudentRecordsLocalClient::new(service)
    }

    #[tokio::test]
    async fn test_list_and_get() {
        let client = create_client();

        let page = client.list_students(StudentQuery::default()).await.unwrap();
        assert_eq!(page.total, 20);
        assert_eq!(page.data.len(), 6);
        assert_eq!(page.total_pages, 4);

        let student = client.get_student("1").await.unwrap();
        assert_eq!(student.name, "Aarav Sharma");
    }

    #[tokio::test]
    async fn test_create_update_delete() {
        let client = create_client();
        let created = client
            .create_student(NewStudent {
                name: Some("Neha Kapoor".to_owned()),
                age: Some(NumberInput::Int(19)),
                course: Some("BCA".to_owned()),
                email: Some("neha.k@example.edu".to_owned()),
                semester: Some(NumberInput::Int(1)),
                enrollment_year: Some(NumberInput::Int(2025)),
                fees_paid: Some(true),
            })
            .await
            .unwrap();
        assert_eq!(created.id, "new-1");

        let patch = StudentPatch {
            semester: Some(NumberInput::from("2")),
            ..StudentPatch::default()
        };
        let updated = client.update_student("new-1", patch).await.unwrap();
        assert_eq!(updated.semester, 2);

        client.delete_student("new-1").await.unwrap();
        let err = client.get_student("new-1").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_errors_map_to_sdk() {
        let client = create_client();

        let err = client.delete_student("missing").await.unwrap_err();
        assert_eq!(err, StudentRecordsError::not_found("missing"));

        let err = client
            .create_student(NewStudent::default())
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }
}
