/// Field names as exposed to callers, used in validation messages.
pub struct StudentFields;

impl StudentFields {
    pub const NAME: &'static str = "name";
    pub const AGE: &'static str = "age";
    pub const COURSE: &'static str = "course";
    pub const EMAIL: &'static str = "email";
    pub const SEMESTER: &'static str = "semester";
    pub const ENROLLMENT_YEAR: &'static str = "enrollmentYear";
}
