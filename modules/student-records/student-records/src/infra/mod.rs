//! Infrastructure layer for the Student Records module.

pub mod storage;

pub use storage::InMemoryStudentsRepository;
