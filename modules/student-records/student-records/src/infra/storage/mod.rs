//! Storage implementations.

pub mod in_memory_repo;
pub mod seed;

pub use in_memory_repo::InMemoryStudentsRepository;
