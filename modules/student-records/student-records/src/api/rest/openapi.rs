//! OpenAPI document for the Student Records REST API.
//!
//! Operations are described in a static table and assembled with utoipa's
//! builders; component schemas come from the DTOs' `ToSchema` derives.

use utoipa::openapi::{
    content::ContentBuilder,
    info::InfoBuilder,
    path::{HttpMethod, OperationBuilder, ParameterBuilder, ParameterIn, PathItemBuilder, PathsBuilder},
    request_body::RequestBodyBuilder,
    response::{ResponseBuilder, ResponsesBuilder},
    schema::{ComponentsBuilder, ObjectBuilder, Schema, SchemaType, Type},
    OpenApi, OpenApiBuilder, Ref, RefOr, Required,
};
use utoipa::{PartialSchema, ToSchema};

use super::dto::{
    CreateStudentReq, FiltersDto, HealthResponse, MessageResponse, StudentDto, StudentPageDto,
    UpdateStudentReq,
};
use super::routes::{RECORDS_PATH, STUDENTS_PATH};

const TAG: &str = "students";
const JSON: &str = "application/json";

struct Param {
    name: &'static str,
    location: ParameterIn,
    ty: Type,
    description: &'static str,
}

struct Operation {
    method: HttpMethod,
    path: &'static str,
    operation_id: &'static str,
    summary: &'static str,
    params: &'static [Param],
    request_body: Option<&'static str>,
    responses: &'static [(u16, &'static str, &'static str)],
}

const ID_PARAM: Param = Param {
    name: "id",
    location: ParameterIn::Path,
    ty: Type::String,
    description: "Student id",
};

const LIST_PARAMS: &[Param] = &[
    Param {
        name: "page",
        location: ParameterIn::Query,
        ty: Type::Integer,
        description: "1-based page number; invalid values fall back to 1",
    },
    Param {
        name: "limit",
        location: ParameterIn::Query,
        ty: Type::Integer,
        description: "Page size; invalid values fall back to the default, capped at the maximum",
    },
    Param {
        name: "search",
        location: ParameterIn::Query,
        ty: Type::String,
        description: "Case-insensitive substring of name, email or course",
    },
    Param {
        name: "course",
        location: ParameterIn::Query,
        ty: Type::String,
        description: "Exact course name; `all` disables the filter",
    },
    Param {
        name: "fees",
        location: ParameterIn::Query,
        ty: Type::String,
        description: "`paid` or `unpaid`; anything else disables the filter",
    },
    Param {
        name: "year",
        location: ParameterIn::Query,
        ty: Type::Integer,
        description: "Enrollment year; repeatable, matches any",
    },
];

const OPERATIONS: &[Operation] = &[
    Operation {
        method: HttpMethod::Get,
        path: STUDENTS_PATH,
        operation_id: "listStudents",
        summary: "List students with filters and pagination",
        params: LIST_PARAMS,
        request_body: None,
        responses: &[(200, "One page of students", "StudentPageDto")],
    },
    Operation {
        method: HttpMethod::Post,
        path: STUDENTS_PATH,
        operation_id: "createStudent",
        summary: "Create a student",
        params: &[],
        request_body: Some("CreateStudentReq"),
        responses: &[
            (201, "Created student", "StudentDto"),
            (400, "Missing or invalid field", "MessageResponse"),
        ],
    },
    Operation {
        method: HttpMethod::Get,
        path: "/api/students/{id}",
        operation_id: "getStudent",
        summary: "Get a student by id",
        params: &[ID_PARAM],
        request_body: None,
        responses: &[
            (200, "Student", "StudentDto"),
            (404, "Unknown id", "MessageResponse"),
        ],
    },
    Operation {
        method: HttpMethod::Patch,
        path: "/api/students/{id}",
        operation_id: "updateStudent",
        summary: "Partially update a student",
        params: &[ID_PARAM],
        request_body: Some("UpdateStudentReq"),
        responses: &[
            (200, "Updated student", "StudentDto"),
            (400, "Invalid field", "MessageResponse"),
            (404, "Unknown id", "MessageResponse"),
        ],
    },
    Operation {
        method: HttpMethod::Delete,
        path: "/api/students/{id}",
        operation_id: "deleteStudent",
        summary: "Delete a student",
        params: &[ID_PARAM],
        request_body: None,
        responses: &[
            (200, "Deleted", "MessageResponse"),
            (404, "Unknown id", "MessageResponse"),
        ],
    },
    Operation {
        method: HttpMethod::Get,
        path: "/health",
        operation_id: "health",
        summary: "Liveness check",
        params: &[],
        request_body: None,
        responses: &[(200, "Service is up", "HealthResponse")],
    },
];

fn json_ref(schema_name: &str) -> utoipa::openapi::content::Content {
    ContentBuilder::new()
        .schema(Some(RefOr::Ref(Ref::from_schema_name(schema_name))))
        .build()
}

fn build_operation(def: &Operation) -> utoipa::openapi::path::Operation {
    let mut op = OperationBuilder::new()
        .operation_id(Some(def.operation_id))
        .summary(Some(def.summary))
        .tag(TAG);

    for p in def.params {
        let required = if matches!(p.location, ParameterIn::Path) {
            Required::True
        } else {
            Required::False
        };
        let schema = Schema::Object(
            ObjectBuilder::new()
                .schema_type(SchemaType::Type(p.ty.clone()))
                .build(),
        );
        op = op.parameter(
            ParameterBuilder::new()
                .name(p.name)
                .parameter_in(p.location.clone())
                .required(required)
                .description(Some(p.description))
                .schema(Some(schema))
                .build(),
        );
    }

    if let Some(body) = def.request_body {
        op = op.request_body(Some(
            RequestBodyBuilder::new()
                .content(JSON, json_ref(body))
                .required(Some(Required::True))
                .build(),
        ));
    }

    let mut responses = ResponsesBuilder::new();
    for (status, description, schema_name) in def.responses {
        responses = responses.response(
            status.to_string(),
            ResponseBuilder::new()
                .description(*description)
                .content(JSON, json_ref(schema_name))
                .build(),
        );
    }
    op.responses(responses.build()).build()
}

fn register_schema<T: ToSchema>(components: ComponentsBuilder) -> ComponentsBuilder {
    let mut collected = vec![(T::name().into_owned(), <T as PartialSchema>::schema())];
    T::schemas(&mut collected);
    collected
        .into_iter()
        .fold(components, |c, (name, schema)| c.schema(name, schema))
}

/// Builds the OpenAPI document. The `/records` alias is not listed
/// separately; it serves the same operations.
#[must_use]
pub fn build_openapi() -> OpenApi {
    let mut paths = PathsBuilder::new();
    for def in OPERATIONS {
        let item = PathItemBuilder::new()
            .operation(def.method.clone(), build_operation(def))
            .build();
        paths = paths.path(def.path, item);
    }

    let mut components = ComponentsBuilder::new();
    components = register_schema::<StudentDto>(components);
    components = register_schema::<StudentPageDto>(components);
    components = register_schema::<FiltersDto>(components);
    components = register_schema::<CreateStudentReq>(components);
    components = register_schema::<UpdateStudentReq>(components);
    components = register_schema::<MessageResponse>(components);
    components = register_schema::<HealthResponse>(components);

    let info = InfoBuilder::new()
        .title("Student Records API")
        .version(env!("CARGO_PKG_VERSION"))
        .description(Some(format!(
            "Student records CRUD and query API. `{RECORDS_PATH}` is an alias of `{STUDENTS_PATH}`."
        )))
        .build();

    OpenApiBuilder::new()
        .info(info)
        .paths(paths.build())
        .components(Some(components.build()))
        .build()
}
