pub mod error;
pub mod fields;
pub mod id_gen;
pub mod query;
pub mod repo;
pub mod service;
pub mod validation;
