//! `PostgreSQL` adapters for task persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresTaskRepository, SCHEMA_SQL, TaskPgPool, apply_schema};
