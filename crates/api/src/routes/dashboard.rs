use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard/student`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/info", get(dashboard::student_info))
        .route("/course-history", get(dashboard::course_history))
        .route("/enrolled-courses", get(dashboard::enrolled_courses))
}
