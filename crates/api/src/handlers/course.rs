//! Handlers for the course catalog, eligibility checks and enrollment.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use maplewood_core::eligibility::Eligibility;
use maplewood_core::error::{CoreError, EnrollmentError};
use maplewood_core::types::DbId;
use maplewood_db::repositories::{CourseRepo, SemesterRepo};
use maplewood_db::EnrollmentService;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthStudent;
use crate::response::DataResponse;
use crate::state::AppState;

/// Outcome of an eligibility check for one course.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResponse {
    pub course_id: DbId,
    pub eligible: bool,
    /// Rejection message code, absent when eligible.
    pub message_code: Option<&'static str>,
}

impl EligibilityResponse {
    fn new(course_id: DbId, outcome: Eligibility) -> Self {
        let message_code = match outcome {
            Eligibility::Eligible => None,
            Eligibility::Rejected(reason) => Some(reason.message_code()),
        };
        Self {
            course_id,
            eligible: outcome.is_eligible(),
            message_code,
        }
    }
}

/// GET /api/v1/courses
///
/// The course catalog, first page ordered by code.
pub async fn list_courses(
    _auth: AuthStudent,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let courses = CourseRepo::list_summaries(&state.pool).await?;
    Ok(Json(DataResponse { data: courses }))
}

/// GET /api/v1/courses/semester
///
/// Courses offered in the same half of the year as the current term.
pub async fn list_semester_courses(
    _auth: AuthStudent,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let term = SemesterRepo::find_current(&state.pool)
        .await?
        .ok_or(EnrollmentError::NoActiveTerm)?;

    let order = term.order().ok_or_else(|| {
        CoreError::Internal(format!(
            "Semester {} has unknown order_in_year {}",
            term.id, term.order_in_year
        ))
    })?;

    let courses = CourseRepo::list_summaries_by_semester_order(&state.pool, order).await?;
    Ok(Json(DataResponse { data: courses }))
}

/// GET /api/v1/courses/{course_id}/eligibility
///
/// Run the eligibility rules for the calling student without enrolling.
pub async fn check_eligibility(
    auth: AuthStudent,
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let outcome = EnrollmentService::check(&state.pool, auth.student_id, course_id).await?;

    Ok(Json(DataResponse {
        data: EligibilityResponse::new(course_id, outcome),
    }))
}

/// POST /api/v1/courses/{course_id}/enroll
///
/// Enroll the calling student in the course for the current term.
/// Rejections return 409 with `{ "messageCode", "courseId" }`.
pub async fn enroll(
    auth: AuthStudent,
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let receipt = EnrollmentService::enroll(&state.pool, auth.student_id, course_id)
        .await
        .map_err(|err| AppError::for_course(err, course_id))?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: receipt })))
}
