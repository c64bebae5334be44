//! Enrollment committer.
//!
//! [`commit`] resolves the course, runs the eligibility rule chain and, when
//! eligible, issues a single guarded insert scoped to the active term. The
//! store handed in must be bound to one transaction; the caller commits it
//! only when this returns `Ok` so a rejected, failed or cancelled attempt
//! leaves no row behind.

use async_trait::async_trait;
use serde::Serialize;

use crate::eligibility::{
    self, CourseProfile, Eligibility, EligibilityRejection, EligibilityStore, StudentProfile,
};
use crate::error::EnrollmentError;
use crate::status::EnrollmentStatus;
use crate::types::{DbId, Timestamp};

/// The enrollment row created by a successful commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrollmentReceipt {
    pub enrollment_id: DbId,
    pub student_id: DbId,
    pub course_id: DbId,
    pub semester_id: DbId,
    pub status: EnrollmentStatus,
    pub created_at: Timestamp,
}

/// What the guarded insert did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// One row was inserted into the active term.
    Inserted(EnrollmentReceipt),
    /// The active-term subquery yielded no row, so nothing was inserted.
    NoActiveTerm,
    /// The `enrolled` uniqueness constraint rejected the row: a concurrent
    /// commit for the same student, course and term got there first.
    AlreadyEnrolled,
}

/// Full datastore seam used by [`commit`].
#[async_trait]
pub trait EnrollmentStore: EligibilityStore {
    /// Load the course and its prerequisite reference.
    async fn find_course(&mut self, course_id: DbId)
        -> Result<Option<CourseProfile>, EnrollmentError>;

    /// Insert an `enrolled` row for the pair into the current active term.
    ///
    /// The active-term lookup and the insert must be one atomic statement.
    async fn insert_enrollment_in_active_term(
        &mut self,
        student_id: DbId,
        course_id: DbId,
    ) -> Result<InsertOutcome, EnrollmentError>;
}

/// Enroll `student` in the course identified by `course_id`.
///
/// - unknown course: [`EnrollmentError::CourseNotFound`], nothing inserted
/// - rule chain rejects: [`EnrollmentError::Rejected`] with the reason verbatim
/// - no active term at insert time: [`EnrollmentError::NoActiveTerm`]
pub async fn commit<S>(
    store: &mut S,
    student: &StudentProfile,
    course_id: DbId,
) -> Result<EnrollmentReceipt, EnrollmentError>
where
    S: EnrollmentStore + ?Sized,
{
    let course = store
        .find_course(course_id)
        .await?
        .ok_or(EnrollmentError::CourseNotFound { course_id })?;

    if let Eligibility::Rejected(reason) = eligibility::evaluate(store, student, &course).await? {
        return Err(EnrollmentError::Rejected(reason));
    }

    // The rule chain has already rejected a missing student id.
    let student_id = student
        .id
        .ok_or(EnrollmentError::Rejected(EligibilityRejection::InvalidInput))?;

    match store
        .insert_enrollment_in_active_term(student_id, course_id)
        .await?
    {
        InsertOutcome::Inserted(receipt) => {
            tracing::info!(
                student_id,
                course_id,
                semester_id = receipt.semester_id,
                enrollment_id = receipt.enrollment_id,
                "Student enrolled in course"
            );
            Ok(receipt)
        }
        InsertOutcome::NoActiveTerm => {
            tracing::warn!(student_id, course_id, "Enrollment attempted with no active term");
            Err(EnrollmentError::NoActiveTerm)
        }
        InsertOutcome::AlreadyEnrolled => {
            tracing::debug!(
                student_id,
                course_id,
                "Concurrent enrollment detected by uniqueness constraint"
            );
            Err(EnrollmentError::Rejected(
                EligibilityRejection::CourseAlreadyEnrolled,
            ))
        }
    }
}
