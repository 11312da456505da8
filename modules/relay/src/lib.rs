//! Relay module: a thin HTTP shim in front of the event distribution topic.
//!
//! Exposes a publish route that wraps request data in an event envelope and
//! forwards it to the topic, a consume route that receives push-delivered
//! envelopes and logs them, and the standard module health route.

pub mod config;
pub mod models;
pub mod routes;

pub use routes::{router, AppState};
