pub mod course;
pub mod dashboard;
