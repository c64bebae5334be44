//! Route definitions for the course catalog and enrollment.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::course;
use crate::state::AppState;

/// Routes mounted at `/courses`.
///
/// ```text
/// GET    /                              list_courses
/// GET    /semester                      list_semester_courses
/// GET    /{course_id}/eligibility       check_eligibility
/// POST   /{course_id}/enroll            enroll
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(course::list_courses))
        .route("/semester", get(course::list_semester_courses))
        .route("/{course_id}/eligibility", get(course::check_eligibility))
        .route("/{course_id}/enroll", post(course::enroll))
}
