//! Taskboard: a three-column kanban task tracker.
//!
//! The crate holds everything behind the board: the task model and its
//! stores, the HTTP API, the client the board UI drives, and the pure
//! arrangement logic that decides what each column shows.
//!
//! # Architecture
//!
//! - [`task`]: domain types, the store port, memory and `PostgreSQL`
//!   adapters, and the lifecycle service
//! - [`api`]: axum routes over the lifecycle service
//! - [`board`]: filtering, ordering, duplicate and overdue flags, column
//!   partition, drag planning
//! - [`client`]: snapshot-holding client with REST and local-disk gateways
//! - [`config`] and [`telemetry`]: server configuration and logging

pub mod api;
pub mod board;
pub mod client;
pub mod config;
pub mod task;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod test_support;
