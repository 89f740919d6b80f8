//! Core types and trait definitions for the roster employee directory.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing heavier than serde.

pub mod employee;
pub mod store;

pub use employee::{Employee, NewEmployee};
pub use store::EmployeeStore;
