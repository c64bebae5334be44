//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts where rows are written
//! - Joined read models for the dashboard and catalog views

pub mod course;
pub mod course_history;
pub mod enrollment;
pub mod semester;
pub mod student;
