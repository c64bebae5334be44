use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maplewood_core::eligibility::EligibilityRejection;
use maplewood_core::error::{CoreError, EnrollmentError};
use maplewood_core::types::DbId;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`EnrollmentError`] for domain errors and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce consistent
/// JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A generic domain error from `maplewood_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An enrollment or eligibility failure not tied to a course in the URL.
    #[error(transparent)]
    Enrollment(#[from] EnrollmentError),

    /// A business rejection for a specific course, rendered as
    /// `{ "messageCode", "courseId" }`.
    #[error("Enrollment in course {course_id} rejected: {reason}")]
    Rejected {
        reason: EligibilityRejection,
        course_id: DbId,
    },

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Lift an enrollment error raised for `course_id`, keeping the course
    /// id on business rejections.
    pub fn for_course(err: EnrollmentError, course_id: DbId) -> Self {
        match err {
            EnrollmentError::Rejected(reason) => AppError::Rejected { reason, course_id },
            other => AppError::Enrollment(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Enrollment outcomes ---
            AppError::Rejected { reason, course_id } => {
                let body = json!({
                    "messageCode": reason.message_code(),
                    "courseId": course_id,
                });
                return (StatusCode::CONFLICT, axum::Json(body)).into_response();
            }
            AppError::Enrollment(err) => classify_enrollment_error(err),

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify an enrollment error into an HTTP status, error code, and message.
///
/// - Rejections map to 409 with the rejection's message code.
/// - Unknown student or course maps to 404.
/// - No active term maps to 503: the request is valid but cannot be served
///   until an administrator activates a term.
/// - Store failures map to 500 with a sanitized message.
fn classify_enrollment_error(err: &EnrollmentError) -> (StatusCode, &'static str, String) {
    match err {
        EnrollmentError::Rejected(reason) => {
            (StatusCode::CONFLICT, reason.message_code(), reason.to_string())
        }
        EnrollmentError::StudentNotFound { student_id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("Student with id {student_id} not found"),
        ),
        EnrollmentError::CourseNotFound { course_id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("Course with id {course_id} not found"),
        ),
        EnrollmentError::NoActiveTerm => (
            StatusCode::SERVICE_UNAVAILABLE,
            "NO_ACTIVE_TERM",
            "No academic term is currently active".to_string(),
        ),
        EnrollmentError::Store(detail) => {
            tracing::error!(error = %detail, "Enrollment store error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
