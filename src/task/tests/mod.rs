//! Unit tests for the task module.
//!
//! Domain tests cover value construction and form validation; service tests
//! drive the lifecycle service over the in-memory repository.

mod domain_tests;
mod service_tests;
