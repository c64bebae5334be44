//! Request extractors.
//!
//! - [`auth::AuthStudent`] -- the student identified by a JWT Bearer token.

pub mod auth;
