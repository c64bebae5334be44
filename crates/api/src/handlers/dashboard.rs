//! Student dashboard handlers.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use maplewood_core::status::StudentStatus;
use maplewood_core::types::DbId;
use maplewood_db::repositories::{CourseHistoryRepo, EnrollmentRepo};
use maplewood_db::EnrollmentService;

use crate::error::AppResult;
use crate::middleware::auth::AuthStudent;
use crate::response::DataResponse;
use crate::state::AppState;

/// Profile summary shown at the top of the dashboard.
#[derive(Debug, Serialize)]
pub struct StudentInfo {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub grade_level: i16,
    pub status: Option<StudentStatus>,
    pub earned_credits: f64,
}

/// GET /api/v1/dashboard/student/info
pub async fn student_info(
    auth: AuthStudent,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let student = EnrollmentService::load_student(&state.pool, auth.student_id).await?;
    let earned_credits = CourseHistoryRepo::earned_credits(&state.pool, student.id).await?;

    let info = StudentInfo {
        id: student.id,
        status: student.status(),
        first_name: student.first_name,
        last_name: student.last_name,
        email: student.email,
        grade_level: student.grade_level,
        earned_credits,
    };

    Ok(Json(DataResponse { data: info }))
}

/// GET /api/v1/dashboard/student/course-history
///
/// One entry per course taken; a course counts as passed if any attempt passed.
/// Unknown students get 404, as on every dashboard route.
pub async fn course_history(
    auth: AuthStudent,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let student = EnrollmentService::load_student(&state.pool, auth.student_id).await?;
    let history = CourseHistoryRepo::list_for_student(&state.pool, student.id).await?;
    Ok(Json(DataResponse { data: history }))
}

/// GET /api/v1/dashboard/student/enrolled-courses
///
/// Courses the student is enrolled in for the current term. Empty when no
/// term is active.
pub async fn enrolled_courses(
    auth: AuthStudent,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let student = EnrollmentService::load_student(&state.pool, auth.student_id).await?;
    let courses =
        EnrollmentRepo::list_enrolled_courses_in_active_term(&state.pool, student.id).await?;
    Ok(Json(DataResponse { data: courses }))
}
