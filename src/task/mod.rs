//! Task records and their persistence.
//!
//! A task is created from a validated form, edited as a whole, moved between
//! board columns, and deleted permanently. The store assigns identifiers and
//! never reuses them. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
