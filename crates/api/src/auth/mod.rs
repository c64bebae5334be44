//! Authentication primitives.
//!
//! - [`jwt`] -- validation of the HS256 bearer tokens identifying a student.

pub mod jwt;
