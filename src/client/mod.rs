//! Board-side access to the task collection.
//!
//! [`BoardClient`] keeps the last loaded snapshot of the collection and
//! reloads it after every mutation. It talks to the collection through a
//! [`TaskGateway`]: either the HTTP API ([`RestTaskGateway`]) or a JSON
//! document on local disk ([`LocalMirrorGateway`]).

mod board_client;
mod gateway;
mod mirror;
mod rest;

pub use board_client::{BoardClient, ClientError, ClientResult};
pub use gateway::{GatewayError, GatewayResult, TaskGateway};
pub use mirror::{LocalMirrorGateway, MIRROR_FILE_NAME};
pub use rest::RestTaskGateway;

#[cfg(test)]
pub use gateway::MockTaskGateway;

#[cfg(test)]
mod tests;
