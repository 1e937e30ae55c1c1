//! API layer for the Student Records module.

pub mod rest;
