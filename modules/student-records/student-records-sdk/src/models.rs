//! Public models for the `student-records` module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the `student-records` module and its consumers.

use serde::{Deserialize, Serialize};

/// A student record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// Opaque identifier, generated on creation and never changed.
    pub id: String,
    pub name: String,
    pub age: u32,
    pub course: String,
    pub email: String,
    /// Current semester, 1 to 10 inclusive.
    pub semester: u8,
    pub enrollment_year: i32,
    pub fees_paid: bool,
}

/// A numeric field as supplied by a caller.
///
/// Callers may send numbers either as JSON numbers or as strings (HTML forms
/// post everything as text). The service decides whether the value coerces
/// to an integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Int(i64),
    Float(f64),
    Text(String),
}

impl NumberInput {
    /// Coerces the input to an integer.
    ///
    /// Integers pass through, floats coerce only without a fractional part,
    /// and strings are trimmed then parsed with the same rules. Everything
    /// else (empty or non-numeric text, fractions, NaN, infinities) yields
    /// `None`.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Float(f) => float_to_integer(*f),
            Self::Text(s) => {
                let trimmed = s.trim();
                trimmed.parse::<i64>().ok().or_else(|| {
                    trimmed
                        .parse::<f64>()
                        .ok()
                        .and_then(float_to_integer)
                })
            }
        }
    }
}

impl From<i64> for NumberInput {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for NumberInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

// Largest magnitude at which every integer is exactly representable as f64.
const MAX_SAFE_FLOAT_INTEGER: f64 = 9_007_199_254_740_991.0;

#[allow(clippy::cast_possible_truncation)]
fn float_to_integer(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract().abs() < f64::EPSILON && f.abs() <= MAX_SAFE_FLOAT_INTEGER {
        Some(f as i64)
    } else {
        None
    }
}

/// Input for creating a student.
///
/// Every field is optional at the type level so that missing fields surface
/// as validation errors rather than deserialization failures.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewStudent {
    pub name: Option<String>,
    pub age: Option<NumberInput>,
    pub course: Option<String>,
    pub email: Option<String>,
    pub semester: Option<NumberInput>,
    pub enrollment_year: Option<NumberInput>,
    pub fees_paid: Option<bool>,
}

/// Partial update for a student. Only `Some` fields are applied.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub age: Option<NumberInput>,
    pub course: Option<String>,
    pub email: Option<String>,
    pub semester: Option<NumberInput>,
    pub enrollment_year: Option<NumberInput>,
    pub fees_paid: Option<bool>,
}

impl StudentPatch {
    /// Returns `true` if the patch carries no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.course.is_none()
            && self.email.is_none()
            && self.semester.is_none()
            && self.enrollment_year.is_none()
            && self.fees_paid.is_none()
    }
}

/// Fees status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeesFilter {
    Paid,
    Unpaid,
}

impl FeesFilter {
    /// Parses a query parameter value. Unknown values (including `all`)
    /// mean "no filter" and yield `None`.
    #[must_use]
    pub fn from_param(value: &str) -> Option<Self> {
        match value.trim() {
            "paid" => Some(Self::Paid),
            "unpaid" => Some(Self::Unpaid),
            _ => None,
        }
    }

    #[must_use]
    pub const fn matches(self, fees_paid: bool) -> bool {
        match self {
            Self::Paid => fees_paid,
            Self::Unpaid => !fees_paid,
        }
    }
}

/// Listing query. Raw values are normalized by the service, never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StudentQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub course: Option<String>,
    pub fees: Option<FeesFilter>,
    /// Enrollment years to match (any of). Empty means no filter.
    pub years: Vec<i32>,
}

impl StudentQuery {
    #[must_use]
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    #[must_use]
    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = Some(course.into());
        self
    }

    #[must_use]
    pub fn with_fees(mut self, fees: FeesFilter) -> Self {
        self.fees = Some(fees);
        self
    }

    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.years.push(year);
        self
    }
}

/// Distinct filter values computed over the whole store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StudentFacets {
    /// `"all"` followed by the sorted distinct course names.
    pub courses: Vec<String>,
    /// `"all"` followed by the distinct enrollment years, newest first.
    pub years: Vec<String>,
}

/// One page of a filtered listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentPage {
    pub data: Vec<Student>,
    /// Number of records matching the filters, across all pages.
    pub total: usize,
    /// The normalized page number that was served.
    pub page: usize,
    /// `max(1, ceil(total / limit))`.
    pub total_pages: usize,
    pub filters: StudentFacets,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_input_coercion() {
        assert_eq!(NumberInput::Int(20).as_integer(), Some(20));
        assert_eq!(NumberInput::Float(21.0).as_integer(), Some(21));
        assert_eq!(NumberInput::Float(21.5).as_integer(), None);
        assert_eq!(NumberInput::Float(f64::NAN).as_integer(), None);
        assert_eq!(NumberInput::from(" 22 ").as_integer(), Some(22));
        assert_eq!(NumberInput::from("4.0").as_integer(), Some(4));
        assert_eq!(NumberInput::from("abc").as_integer(), None);
        assert_eq!(NumberInput::from("").as_integer(), None);
        assert_eq!(NumberInput::from("-3").as_integer(), Some(-3));
    }

    #[test]
    fn test_number_input_deserializes_numbers_and_strings() {
        let n: NumberInput = serde_json::from_str("20").unwrap();
        assert_eq!(n, NumberInput::Int(20));

        let n: NumberInput = serde_json::from_str("20.5").unwrap();
        assert_eq!(n, NumberInput::Float(20.5));

        let n: NumberInput = serde_json::from_str("\"2024\"").unwrap();
        assert_eq!(n, NumberInput::Text("2024".to_owned()));
    }

    #[test]
    fn test_fees_filter_from_param() {
        assert_eq!(FeesFilter::from_param("paid"), Some(FeesFilter::Paid));
        assert_eq!(FeesFilter::from_param(" unpaid "), Some(FeesFilter::Unpaid));
        assert_eq!(FeesFilter::from_param("all"), None);
        assert_eq!(FeesFilter::from_param(""), None);
    }

    #[test]
    fn test_fees_filter_matches() {
        assert!(FeesFilter::Paid.matches(true));
        assert!(!FeesFilter::Paid.matches(false));
        assert!(FeesFilter::Unpaid.matches(false));
        assert!(!FeesFilter::Unpaid.matches(true));
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(StudentPatch::default().is_empty());
        let patch = StudentPatch {
            fees_paid: Some(true),
            ..StudentPatch::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_query_builders() {
        let q = StudentQuery::default()
            .with_page(2)
            .with_limit(10)
            .with_search("sharma")
            .with_course("BBA")
            .with_fees(FeesFilter::Paid)
            .with_year(2024)
            .with_year(2023);
        assert_eq!(q.page, Some(2));
        assert_eq!(q.limit, Some(10));
        assert_eq!(q.search.as_deref(), Some("sharma"));
        assert_eq!(q.course.as_deref(), Some("BBA"));
        assert_eq!(q.fees, Some(FeesFilter::Paid));
        assert_eq!(q.years, vec![2024, 2023]);
    }
}
