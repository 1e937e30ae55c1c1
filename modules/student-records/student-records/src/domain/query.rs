//! Filtering, search and pagination over a snapshot of the store.

use std::collections::{BTreeSet, HashSet};

use student_records_sdk::{Student, StudentFacets, StudentPage, StudentQuery};

/// Sentinel facet value meaning "no filter".
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitCfg {
    pub default: usize,
    pub max: usize,
}

impl Default for LimitCfg {
    fn default() -> Self {
        Self {
            default: 6,
            max: 100,
        }
    }
}

impl LimitCfg {
    /// Missing or non-positive limits fall back to the default; larger ones
    /// are capped at the maximum.
    #[must_use]
    pub fn normalize(&self, requested: Option<i64>) -> usize {
        let limit = requested
            .filter(|l| *l >= 1)
            .map_or(self.default, |l| usize::try_from(l).unwrap_or(usize::MAX));
        limit.min(self.max).max(1)
    }
}

#[must_use]
pub fn normalize_page(requested: Option<i64>) -> usize {
    requested
        .filter(|p| *p >= 1)
        .map_or(1, |p| usize::try_from(p).unwrap_or(usize::MAX))
}

/// Predicate built once per query from the raw parameters.
struct Criteria<'a> {
    course: Option<&'a str>,
    years: HashSet<i32>,
    fees: Option<student_records_sdk::FeesFilter>,
    search: Option<String>,
}

impl<'a> Criteria<'a> {
    fn from_query(query: &'a StudentQuery) -> Self {
        let course = query
            .course
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != ALL);
        let search = query
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        Self {
            course,
            years: query.years.iter().copied().collect(),
            fees: query.fees,
            search,
        }
    }

    fn matches(&self, student: &Student) -> bool {
        if let Some(course) = self.course
            && student.course != course
        {
            return false;
        }
        if !self.years.is_empty() && !self.years.contains(&student.enrollment_year) {
            return false;
        }
        if let Some(fees) = self.fees
            && !fees.matches(student.fees_paid)
        {
            return false;
        }
        if let Some(needle) = &self.search {
            return [&student.name, &student.email, &student.course]
                .iter()
                .any(|haystack| haystack.to_lowercase().contains(needle.as_str()));
        }
        true
    }
}

/// Runs a listing query over `records`, which must be in store order.
///
/// Facets are computed over every record, not just the matching ones.
#[must_use]
pub fn run(records: &[Student], query: &StudentQuery, limits: LimitCfg) -> StudentPage {
    let page = normalize_page(query.page);
    let limit = limits.normalize(query.limit);
    let criteria = Criteria::from_query(query);

    let mut courses = BTreeSet::new();
    let mut years = BTreeSet::new();
    let mut matched = Vec::new();

    for student in records {
        courses.insert(student.course.as_str());
        years.insert(student.enrollment_year);
        if criteria.matches(student) {
            matched.push(student);
        }
    }

    let total = matched.len();
    let total_pages = total.div_ceil(limit).max(1);
    let data = matched
        .into_iter()
        .skip((page - 1).saturating_mul(limit))
        .take(limit)
        .cloned()
        .collect();

    StudentPage {
        data,
        total,
        page,
        total_pages,
        filters: StudentFacets {
            courses: std::iter::once(ALL.to_owned())
                .chain(courses.into_iter().map(str::to_owned))
                .collect(),
            years: std::iter::once(ALL.to_owned())
                .chain(years.into_iter().rev().map(|y| y.to_string()))
                .collect(),
        },
    }
}
