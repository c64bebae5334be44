//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods.
//! Methods used inside the enrollment transaction accept any
//! [`sqlx::PgExecutor`] so the same query runs on a pool or a transaction;
//! the rest take `&PgPool` as the first argument.

pub mod course_history_repo;
pub mod course_repo;
pub mod enrollment_repo;
pub mod semester_repo;
pub mod student_repo;

pub use course_history_repo::CourseHistoryRepo;
pub use course_repo::{CourseRepo, SpecializationRepo};
pub use enrollment_repo::EnrollmentRepo;
pub use semester_repo::SemesterRepo;
pub use student_repo::StudentRepo;

/// Subquery selecting the id of the current term: the most recent active
/// semester by year, then order in year. Every active-term scoped query
/// embeds this so several active rows are resolved the same way everywhere.
pub(crate) const CURRENT_TERM_ID: &str = "SELECT id FROM semesters \
    WHERE is_active = true \
    ORDER BY year DESC, order_in_year DESC \
    LIMIT 1";
