//! Student Records SDK
//!
//! This crate provides the public API for the `student-records` module:
//! - `StudentRecordsApi` trait for in-process communication
//! - `Student` model and its create/patch inputs
//! - `StudentQuery` / `StudentPage` for filtered, paginated listings
//! - `StudentRecordsError` for error handling
//!
//! ## Usage
//!
//! ```ignore
//! use student_records_sdk::{StudentQuery, StudentRecordsApi};
//!
//! let page = client
//!     .list_students(StudentQuery::default().with_search("sharma"))
//!     .await?;
//!
//! let student = client.get_student("1").await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;

pub use api::StudentRecordsApi;
pub use error::StudentRecordsError;
pub use models::{
    FeesFilter, NewStudent, NumberInput, Student, StudentFacets, StudentPage, StudentPatch,
    StudentQuery,
};
