//! REST handlers for the Student Records module.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, RawQuery};
use axum::http::StatusCode;
use axum::Json;

use super::dto::{
    parse_list_query, CreateStudentReq, HealthResponse, MessageResponse, StudentDto,
    StudentPageDto, UpdateStudentReq,
};
use super::error::{ApiError, ApiResult};
use super::openapi;
use crate::domain::service::StudentRecordsService;

/// GET /api/students
///
/// One page of students plus filter facets. Query values are normalized,
/// never rejected.
pub async fn list_students(
    Extension(service): Extension<Arc<StudentRecordsService>>,
    RawQuery(raw): RawQuery,
) -> ApiResult<Json<StudentPageDto>> {
    let query = parse_list_query(raw.as_deref());
    let page = service.list(&query)?;
    Ok(Json(page.into()))
}

/// POST /api/students
pub async fn create_student(
    Extension(service): Extension<Arc<StudentRecordsService>>,
    body: Result<Json<CreateStudentReq>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<StudentDto>)> {
    let Json(req) = body?;
    let student = service.create(req.into())?;
    Ok((StatusCode::CREATED, Json(student.into())))
}

/// GET /api/students/{id}
pub async fn get_student(
    Extension(service): Extension<Arc<StudentRecordsService>>,
    Path(id): Path<String>,
) -> ApiResult<Json<StudentDto>> {
    let student = service.get(&id)?;
    Ok(Json(student.into()))
}

/// PATCH /api/students/{id}
///
/// Partial update; absent fields keep their values.
pub async fn update_student(
    Extension(service): Extension<Arc<StudentRecordsService>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateStudentReq>, JsonRejection>,
) -> ApiResult<Json<StudentDto>> {
    let Json(req) = body?;
    let student = service.update(&id, req.into())?;
    Ok(Json(student.into()))
}

/// DELETE /api/students/{id}
pub async fn delete_student(
    Extension(service): Extension<Arc<StudentRecordsService>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    if service.delete(&id)? {
        Ok(Json(MessageResponse::new("Deleted successfully")))
    } else {
        Err(ApiError::not_found())
    }
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
    })
}

/// GET /openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi::build_openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id_gen::SequentialIdGenerator;
    use crate::domain::service::ServiceConfig;
    use crate::infra::InMemoryStudentsRepository;
    use student_records_sdk::NumberInput;

    fn create_service() -> Arc<StudentRecordsService> {
        let repo = Arc::new(InMemoryStudentsRepository::new());
        repo.seed().unwrap();
        Arc::new(StudentRecordsService::new(
            repo,
            Arc::new(SequentialIdGenerator::new("id-", 100)),
            ServiceConfig::default(),
        ))
    }

    fn create_req() -> CreateStudentReq {
        CreateStudentReq {
            name: Some("Neha Kapoor".to_owned()),
            age: Some(NumberInput::Int(19)),
            course: Some("BCA".to_owned()),
            email: Some("neha.k@example.edu".to_owned()),
            semester: Some(NumberInput::Int(1)),
            enrollment_year: Some(NumberInput::Int(2025)),
            fees_paid: None,
        }
    }

    #[tokio::test]
    async fn test_list_students_handler() {
        let service = create_service();
        let Json(page) = list_students(
            Extension(service),
            RawQuery(Some("course=B.Tech%20CSE".to_owned())),
        )
        .await
        .unwrap();

        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 1);
        assert!(page.data.iter().all(|s| s.course == "B.Tech CSE"));
    }

    #[tokio::test]
    async fn test_create_student_handler() {
        let service = create_service();
        let (status, Json(student)) = create_student(Extension(service.clone()), Ok(Json(create_req())))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(student.id, "id-100");
        assert!(!student.fees_paid);
        assert_eq!(service.count(), 21);
    }

    #[tokio::test]
    async fn test_get_student_not_found() {
        let err = get_student(Extension(create_service()), Path("999".to_owned()))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::not_found());
    }

    #[tokio::test]
    async fn test_update_student_handler() {
        let service = create_service();
        let req = UpdateStudentReq {
            fees_paid: Some(true),
            ..UpdateStudentReq::default()
        };
        let Json(student) = update_student(Extension(service), Path("2".to_owned()), Ok(Json(req)))
            .await
            .unwrap();
        assert_eq!(student.name, "Priya Patel");
        assert!(student.fees_paid);
    }

    #[tokio::test]
    async fn test_delete_student_handler() {
        let service = create_service();
        let Json(msg) = delete_student(Extension(service.clone()), Path("1".to_owned()))
            .await
            .unwrap();
        assert_eq!(msg.message, "Deleted successfully");

        let err = delete_student(Extension(service), Path("1".to_owned()))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let Json(body) = health().await;
        assert_eq!(body.status, "ok");
    }
}
