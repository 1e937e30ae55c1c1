//! Input validation and coercion for student create and update requests.

use student_records_sdk::{NewStudent, NumberInput, Student, StudentPatch};

use super::error::DomainError;
use super::fields::StudentFields;

pub const MIN_SEMESTER: u8 = 1;
pub const MAX_SEMESTER: u8 = 10;

/// Validated fields of a student that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentDraft {
    pub name: String,
    pub age: u32,
    pub course: String,
    pub email: String,
    pub semester: u8,
    pub enrollment_year: i32,
    pub fees_paid: bool,
}

impl StudentDraft {
    #[must_use]
    pub fn into_student(self, id: String) -> Student {
        Student {
            id,
            name: self.name,
            age: self.age,
            course: self.course,
            email: self.email,
            semester: self.semester,
            enrollment_year: self.enrollment_year,
            fees_paid: self.fees_paid,
        }
    }
}

/// Validated, coerced partial update. `None` fields are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StudentChanges {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub course: Option<String>,
    pub email: Option<String>,
    pub semester: Option<u8>,
    pub enrollment_year: Option<i32>,
    pub fees_paid: Option<bool>,
}

impl StudentChanges {
    /// Overwrites every field present in the changes.
    pub fn apply(&self, student: &mut Student) {
        if let Some(name) = &self.name {
            student.name.clone_from(name);
        }
        if let Some(age) = self.age {
            student.age = age;
        }
        if let Some(course) = &self.course {
            student.course.clone_from(course);
        }
        if let Some(email) = &self.email {
            student.email.clone_from(email);
        }
        if let Some(semester) = self.semester {
            student.semester = semester;
        }
        if let Some(enrollment_year) = self.enrollment_year {
            student.enrollment_year = enrollment_year;
        }
        if let Some(fees_paid) = self.fees_paid {
            student.fees_paid = fees_paid;
        }
    }
}

/// Validates a create request.
///
/// # Errors
///
/// Returns `MissingFields` listing every required field that is absent or
/// blank, or `Validation` for the first field that fails its constraint.
pub fn validate_new_student(new_student: NewStudent) -> Result<StudentDraft, DomainError> {
    let NewStudent {
        name,
        age,
        course,
        email,
        semester,
        enrollment_year,
        fees_paid,
    } = new_student;

    let name = non_blank(name);
    let course = non_blank(course);
    let email = non_blank(email);

    let mut missing = Vec::new();
    if name.is_none() {
        missing.push(StudentFields::NAME);
    }
    if age.is_none() {
        missing.push(StudentFields::AGE);
    }
    if course.is_none() {
        missing.push(StudentFields::COURSE);
    }
    if email.is_none() {
        missing.push(StudentFields::EMAIL);
    }
    if semester.is_none() {
        missing.push(StudentFields::SEMESTER);
    }
    if enrollment_year.is_none() {
        missing.push(StudentFields::ENROLLMENT_YEAR);
    }

    let (Some(name), Some(age), Some(course), Some(email), Some(semester), Some(enrollment_year)) =
        (name, age, course, email, semester, enrollment_year)
    else {
        return Err(DomainError::missing_fields(missing));
    };

    Ok(StudentDraft {
        name,
        age: parse_age(&age)?,
        course,
        email,
        semester: parse_semester(&semester)?,
        enrollment_year: parse_enrollment_year(&enrollment_year)?,
        fees_paid: fees_paid.unwrap_or(false),
    })
}

/// Validates a partial update. Nothing is applied if any field is invalid.
///
/// # Errors
///
/// Returns `Validation` for the first supplied field that is blank, does not
/// coerce to a number, or is out of range.
pub fn validate_patch(patch: StudentPatch) -> Result<StudentChanges, DomainError> {
    Ok(StudentChanges {
        name: patch
            .name
            .map(|v| required_text(StudentFields::NAME, &v))
            .transpose()?,
        age: patch.age.as_ref().map(parse_age).transpose()?,
        course: patch
            .course
            .map(|v| required_text(StudentFields::COURSE, &v))
            .transpose()?,
        email: patch
            .email
            .map(|v| required_text(StudentFields::EMAIL, &v))
            .transpose()?,
        semester: patch.semester.as_ref().map(parse_semester).transpose()?,
        enrollment_year: patch
            .enrollment_year
            .as_ref()
            .map(parse_enrollment_year)
            .transpose()?,
        fees_paid: patch.fees_paid,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn required_text(field: &str, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(field, "must not be empty"));
    }
    Ok(trimmed.to_owned())
}

fn integer(field: &str, input: &NumberInput) -> Result<i64, DomainError> {
    input
        .as_integer()
        .ok_or_else(|| DomainError::validation(field, "must be a number"))
}

fn parse_age(input: &NumberInput) -> Result<u32, DomainError> {
    let n = integer(StudentFields::AGE, input)?;
    u32::try_from(n)
        .ok()
        .filter(|age| *age > 0)
        .ok_or_else(|| DomainError::validation(StudentFields::AGE, "must be greater than 0"))
}

fn parse_semester(input: &NumberInput) -> Result<u8, DomainError> {
    let n = integer(StudentFields::SEMESTER, input)?;
    u8::try_from(n)
        .ok()
        .filter(|s| (MIN_SEMESTER..=MAX_SEMESTER).contains(s))
        .ok_or_else(|| {
            DomainError::validation(
                StudentFields::SEMESTER,
                format!("must be between {MIN_SEMESTER} and {MAX_SEMESTER}"),
            )
        })
}

fn parse_enrollment_year(input: &NumberInput) -> Result<i32, DomainError> {
    let n = integer(StudentFields::ENROLLMENT_YEAR, input)?;
    i32::try_from(n)
        .ok()
        .filter(|y| *y > 0)
        .ok_or_else(|| {
            DomainError::validation(StudentFields::ENROLLMENT_YEAR, "must be a positive year")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_new_student() -> NewStudent {
        NewStudent {
            name: Some("Aarav Sharma".to_owned()),
            age: Some(NumberInput::Int(20)),
            course: Some("B.Tech CSE".to_owned()),
            email: Some("aarav.sharma@vit.ac.in".to_owned()),
            semester: Some(NumberInput::Int(4)),
            enrollment_year: Some(NumberInput::Int(2024)),
            fees_paid: Some(true),
        }
    }

    #[test]
    fn test_validate_new_student_success() {
        let draft = validate_new_student(valid_new_student()).unwrap();
        assert_eq!(draft.name, "Aarav Sharma");
        assert_eq!(draft.age, 20);
        assert_eq!(draft.semester, 4);
        assert_eq!(draft.enrollment_year, 2024);
        assert!(draft.fees_paid);
    }

    #[test]
    fn test_validate_new_student_coerces_strings_and_trims() {
        let new_student = NewStudent {
            name: Some("  Priya Patel ".to_owned()),
            age: Some(NumberInput::from("21")),
            semester: Some(NumberInput::from(" 5 ")),
            enrollment_year: Some(NumberInput::from("2023")),
            fees_paid: None,
            ..valid_new_student()
        };
        let draft = validate_new_student(new_student).unwrap();
        assert_eq!(draft.name, "Priya Patel");
        assert_eq!(draft.age, 21);
        assert_eq!(draft.semester, 5);
        assert_eq!(draft.enrollment_year, 2023);
        assert!(!draft.fees_paid);
    }

    #[test]
    fn test_validate_new_student_reports_all_missing_fields() {
        let new_student = NewStudent {
            name: Some("   ".to_owned()),
            email: None,
            ..valid_new_student()
        };
        let err = validate_new_student(new_student).unwrap_err();
        match err {
            DomainError::MissingFields(fields) => {
                assert_eq!(fields, vec![StudentFields::NAME, StudentFields::EMAIL]);
            }
            other => panic!("Expected MissingFields, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_new_student_rejects_zero_age() {
        let new_student = NewStudent {
            age: Some(NumberInput::Int(0)),
            ..valid_new_student()
        };
        let err = validate_new_student(new_student).unwrap_err();
        assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "age"));
    }

    #[test]
    fn test_validate_new_student_rejects_semester_out_of_range() {
        for semester in [0, 11, -1] {
            let new_student = NewStudent {
                semester: Some(NumberInput::Int(semester)),
                ..valid_new_student()
            };
            let err = validate_new_student(new_student).unwrap_err();
            assert!(
                matches!(err, DomainError::Validation { ref field, .. } if field == "semester"),
                "semester {semester} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_patch_empty() {
        let changes = validate_patch(StudentPatch::default()).unwrap();
        assert_eq!(changes, StudentChanges::default());
    }

    #[test]
    fn test_validate_patch_rejects_non_numeric_age() {
        let patch = StudentPatch {
            name: Some("New Name".to_owned()),
            age: Some(NumberInput::from("abc")),
            ..StudentPatch::default()
        };
        let err = validate_patch(patch).unwrap_err();
        assert_eq!(err.to_string(), "Invalid age: must be a number");
    }

    #[test]
    fn test_validate_patch_rejects_non_numeric_semester() {
        let patch = StudentPatch {
            semester: Some(NumberInput::from("abc")),
            ..StudentPatch::default()
        };
        let err = validate_patch(patch).unwrap_err();
        assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "semester"));
    }

    #[test]
    fn test_validate_patch_trims_and_rejects_blank_strings() {
        let patch = StudentPatch {
            course: Some("  BBA  ".to_owned()),
            ..StudentPatch::default()
        };
        assert_eq!(validate_patch(patch).unwrap().course.as_deref(), Some("BBA"));

        let patch = StudentPatch {
            email: Some("   ".to_owned()),
            ..StudentPatch::default()
        };
        assert!(validate_patch(patch).is_err());
    }

    #[test]
    fn test_changes_apply_only_present_fields() {
        let mut student = validate_new_student(valid_new_student())
            .unwrap()
            .into_student("1".to_owned());
        let changes = StudentChanges {
            semester: Some(6),
            fees_paid: Some(false),
            ..StudentChanges::default()
        };
        changes.apply(&mut student);

        assert_eq!(student.id, "1");
        assert_eq!(student.name, "Aarav Sharma");
        assert_eq!(student.semester, 6);
        assert!(!student.fees_paid);
    }
}
