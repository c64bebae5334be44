use crate::eligibility::EligibilityRejection;
use crate::types::DbId;

/// Generic domain error for handlers outside the enrollment flow.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Every way an eligibility check or enrollment commit can end other than success.
///
/// Business rejections ([`EnrollmentError::Rejected`]) are expected outcomes the
/// student can act on. The remaining variants are operational failures: a bad
/// reference, a system state the student cannot change, or a persistence fault.
#[derive(Debug, thiserror::Error)]
pub enum EnrollmentError {
    #[error("Enrollment rejected: {0}")]
    Rejected(EligibilityRejection),

    #[error("Student not found: {student_id}")]
    StudentNotFound { student_id: DbId },

    #[error("Course not found: {course_id}")]
    CourseNotFound { course_id: DbId },

    #[error("No active academic term")]
    NoActiveTerm,

    #[error("Enrollment store error: {0}")]
    Store(String),
}

impl EnrollmentError {
    /// `true` for rejections produced by the rule chain.
    pub fn is_business_rejection(&self) -> bool {
        matches!(self, EnrollmentError::Rejected(_))
    }

    /// The rejection reason, if this is a business rejection.
    pub fn rejection(&self) -> Option<EligibilityRejection> {
        match self {
            EnrollmentError::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}

impl From<EligibilityRejection> for EnrollmentError {
    fn from(reason: EligibilityRejection) -> Self {
        EnrollmentError::Rejected(reason)
    }
}
