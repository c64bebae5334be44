//! Maplewood API server library.
//!
//! Exposes configuration, state, error handling, the bearer-token extractor
//! and the route tree so integration tests and the binary entrypoint can
//! both build the same application.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
