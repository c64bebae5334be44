//! Student enrollment models.

use maplewood_core::enrollment::EnrollmentReceipt;
use maplewood_core::error::EnrollmentError;
use maplewood_core::status::{EnrollmentStatus, StatusId};
use maplewood_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `student_enrollments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentEnrollment {
    pub id: DbId,
    pub student_id: DbId,
    pub course_id: DbId,
    pub semester_id: DbId,
    pub status_id: StatusId,
    pub created_at: Timestamp,
}

impl StudentEnrollment {
    pub fn status(&self) -> Option<EnrollmentStatus> {
        EnrollmentStatus::from_id(self.status_id)
    }

    /// Receipt for a freshly inserted row.
    ///
    /// Fails with [`EnrollmentError::Store`] when `status_id` is outside the
    /// lookup table seed data.
    pub fn into_receipt(self) -> Result<EnrollmentReceipt, EnrollmentError> {
        let status = self.status().ok_or_else(|| {
            tracing::warn!(
                enrollment_id = self.id,
                status_id = self.status_id,
                "Enrollment row has unknown status id"
            );
            EnrollmentError::Store(format!(
                "enrollment {} has unknown status id {}",
                self.id, self.status_id
            ))
        })?;

        Ok(EnrollmentReceipt {
            enrollment_id: self.id,
            student_id: self.student_id,
            course_id: self.course_id,
            semester_id: self.semester_id,
            status,
            created_at: self.created_at,
        })
    }
}

/// A course the student is currently enrolled in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EnrolledCourse {
    pub enrollment_id: DbId,
    pub course_id: DbId,
    pub code: String,
    pub name: String,
    pub credits: f64,
    pub semester_id: DbId,
}
