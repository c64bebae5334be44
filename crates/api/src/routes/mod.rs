pub mod course;
pub mod dashboard;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Every route requires a student bearer token.
///
/// ```text
/// /courses                                  catalog (GET)
/// /courses/semester                         current term's offerings (GET)
/// /courses/{course_id}/eligibility          eligibility check (GET)
/// /courses/{course_id}/enroll               enroll (POST)
///
/// /dashboard/student/info                   profile and earned credits (GET)
/// /dashboard/student/course-history         aggregated history (GET)
/// /dashboard/student/enrolled-courses       current enrollments (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/courses", course::router())
        .nest("/dashboard/student", dashboard::router())
}
