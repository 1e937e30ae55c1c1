//! REST DTOs for the Student Records module.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use student_records_sdk::{
    FeesFilter, NewStudent, NumberInput, Student, StudentFacets, StudentPage, StudentPatch,
    StudentQuery,
};

/// A student record as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    /// Server-generated identifier.
    pub id: String,
    pub name: String,
    pub age: u32,
    pub course: String,
    pub email: String,
    /// Current semester, 1 to 10.
    pub semester: u8,
    pub enrollment_year: i32,
    pub fees_paid: bool,
}

impl From<Student> for StudentDto {
    fn from(s: Student) -> Self {
        Self {
            id: s.id,
            name: s.name,
            age: s.age,
            course: s.course,
            email: s.email,
            semester: s.semester,
            enrollment_year: s.enrollment_year,
            fees_paid: s.fees_paid,
        }
    }
}

/// Request body for creating a student.
///
/// Numeric fields accept JSON numbers or numeric strings.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentReq {
    pub name: Option<String>,
    #[schema(value_type = Option<i64>)]
    pub age: Option<NumberInput>,
    pub course: Option<String>,
    pub email: Option<String>,
    #[schema(value_type = Option<i64>)]
    pub semester: Option<NumberInput>,
    #[schema(value_type = Option<i64>)]
    pub enrollment_year: Option<NumberInput>,
    /// Only the boolean `true` marks fees as paid.
    #[schema(value_type = Option<bool>)]
    pub fees_paid: Option<serde_json::Value>,
}

impl From<CreateStudentReq> for NewStudent {
    fn from(req: CreateStudentReq) -> Self {
        Self {
            name: req.name,
            age: req.age,
            course: req.course,
            email: req.email,
            semester: req.semester,
            enrollment_year: req.enrollment_year,
            fees_paid: Some(matches!(req.fees_paid, Some(serde_json::Value::Bool(true)))),
        }
    }
}

/// Request body for a partial update. Absent fields are left unchanged;
/// an `id` in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentReq {
    pub name: Option<String>,
    #[schema(value_type = Option<i64>)]
    pub age: Option<NumberInput>,
    pub course: Option<String>,
    pub email: Option<String>,
    #[schema(value_type = Option<i64>)]
    pub semester: Option<NumberInput>,
    #[schema(value_type = Option<i64>)]
    pub enrollment_year: Option<NumberInput>,
    pub fees_paid: Option<bool>,
}

impl From<UpdateStudentReq> for StudentPatch {
    fn from(req: UpdateStudentReq) -> Self {
        Self {
            name: req.name,
            age: req.age,
            course: req.course,
            email: req.email,
            semester: req.semester,
            enrollment_year: req.enrollment_year,
            fees_paid: req.fees_paid,
        }
    }
}

/// Distinct filter values, each list starting with `"all"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FiltersDto {
    pub courses: Vec<String>,
    /// Enrollment years as strings, newest first.
    pub years: Vec<String>,
}

impl From<StudentFacets> for FiltersDto {
    fn from(f: StudentFacets) -> Self {
        Self {
            courses: f.courses,
            years: f.years,
        }
    }
}

/// One page of students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentPageDto {
    pub data: Vec<StudentDto>,
    /// Number of matching records across all pages.
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub filters: FiltersDto,
}

impl From<StudentPage> for StudentPageDto {
    fn from(p: StudentPage) -> Self {
        Self {
            data: p.data.into_iter().map(Into::into).collect(),
            total: p.total,
            page: p.page,
            total_pages: p.total_pages,
            filters: p.filters.into(),
        }
    }
}

/// `{ "message": ... }` body used for confirmations and errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Parses the listing query string.
///
/// Parsing never fails: unparsable `page`/`limit` are dropped and left to
/// the service defaults, unknown keys are ignored. `year` (or `years`) may
/// repeat and may hold comma-separated values.
#[must_use]
pub fn parse_list_query(raw: Option<&str>) -> StudentQuery {
    let mut query = StudentQuery::default();
    let Some(raw) = raw else {
        return query;
    };

    for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
        match &*key {
            "page" => query.page = query_integer(&value),
            "limit" => query.limit = query_integer(&value),
            "search" => query.search = Some(value.into_owned()),
            "course" => query.course = Some(value.into_owned()),
            "fees" => query.fees = FeesFilter::from_param(&value),
            "year" | "years" => query.years.extend(
                value
                    .split(',')
                    .filter_map(|y| y.trim().parse::<i32>().ok()),
            ),
            _ => {}
        }
    }
    query
}

/// Reads a numeric query parameter. Fractions truncate toward zero and
/// out-of-range values saturate; only non-numeric text yields `None`.
#[allow(clippy::cast_possible_truncation)]
fn query_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(n);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|f| !f.is_nan())
        .map(|f| f.trunc() as i64)
}
