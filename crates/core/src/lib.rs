//! Maplewood domain core.
//!
//! Pure domain logic with zero internal dependencies: identifier types,
//! lookup-table status enums, the course eligibility rule chain and the
//! enrollment committer. Persistence is reached only through the
//! [`enrollment::EnrollmentStore`] trait implemented by the `db` crate.

pub mod eligibility;
pub mod enrollment;
pub mod error;
pub mod status;
pub mod types;

#[cfg(test)]
mod testing;
