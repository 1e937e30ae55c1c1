//! Route table for the Student Records REST API.

use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};

use super::handlers;
use crate::domain::service::StudentRecordsService;

/// Collection path used by the web UI.
pub const STUDENTS_PATH: &str = "/api/students";
/// Alias of [`STUDENTS_PATH`].
pub const RECORDS_PATH: &str = "/records";

/// Builds the router for the student collection (under both prefixes),
/// `/health` and `/openapi.json`.
#[must_use]
pub fn router(service: Arc<StudentRecordsService>) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::health))
        .route("/openapi.json", get(handlers::openapi_json));

    for prefix in [STUDENTS_PATH, RECORDS_PATH] {
        router = router
            .route(
                prefix,
                get(handlers::list_students).post(handlers::create_student),
            )
            .route(
                &format!("{prefix}/{{id}}"),
                get(handlers::get_student)
                    .patch(handlers::update_student)
                    .delete(handlers::delete_student),
            );
    }

    router.layer(Extension(service))
}
