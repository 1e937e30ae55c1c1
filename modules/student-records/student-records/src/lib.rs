//! Student Records Module Implementation
//!
//! The public API is defined in `student-records-sdk` and re-exported here.
//!
//! Layers:
//! - `domain` - repository port, id generation, validation, query engine, service
//! - `infra` - in-memory record store and its seed data
//! - `api::rest` - axum handlers, DTOs, and error mapping
//! - `local_client` - `StudentRecordsApi` implementation for in-process callers
//! - `module` - wiring of store, service, client and router from config

pub use student_records_sdk::{
    FeesFilter, NewStudent, NumberInput, Student, StudentPage, StudentPatch, StudentQuery,
    StudentRecordsApi, StudentRecordsError,
};

pub mod api;
pub mod config;
pub mod domain;
pub mod infra;
pub mod local_client;
pub mod module;

pub use config::StudentRecordsConfig;
pub use domain::service::{ServiceConfig, StudentRecordsService};
pub use infra::InMemoryStudentsRepository;
pub use local_client::StudentRecordsLocalClient;
pub use module::StudentRecordsModule;
