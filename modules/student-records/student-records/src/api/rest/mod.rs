//! REST API layer for the Student Records module.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;

pub use routes::router;
