//! Transactional entry points for eligibility checks and enrollment.

use maplewood_core::eligibility::{self, Eligibility};
use maplewood_core::enrollment::{self, EnrollmentReceipt};
use maplewood_core::error::EnrollmentError;
use maplewood_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::Student;
use crate::repositories::{CourseRepo, StudentRepo};
use crate::store::PgEnrollmentStore;

fn store_error(err: sqlx::Error) -> EnrollmentError {
    tracing::error!(error = %err, "Enrollment transaction failed");
    EnrollmentError::Store(err.to_string())
}

/// Stateless service wrapping the core committer in a database transaction.
pub struct EnrollmentService;

impl EnrollmentService {
    /// Load a student or fail with [`EnrollmentError::StudentNotFound`].
    pub async fn load_student(pool: &PgPool, student_id: DbId) -> Result<Student, EnrollmentError> {
        StudentRepo::find_by_id(pool, student_id)
            .await
            .map_err(store_error)?
            .ok_or(EnrollmentError::StudentNotFound { student_id })
    }

    /// Enroll a student in a course.
    ///
    /// The student row is locked first, then course resolution, the rule
    /// chain and the guarded insert run inside the same transaction, which is
    /// committed only on success. Concurrent commits for one student are
    /// serialized by the lock, so the course-load cap holds under contention.
    /// If the future is dropped (request timeout, client gone) the
    /// transaction is rolled back.
    pub async fn enroll(
        pool: &PgPool,
        student_id: DbId,
        course_id: DbId,
    ) -> Result<EnrollmentReceipt, EnrollmentError> {
        let mut tx = pool.begin().await.map_err(store_error)?;

        let student = StudentRepo::find_by_id_for_update(&mut *tx, student_id)
            .await
            .map_err(store_error)?
            .ok_or(EnrollmentError::StudentNotFound { student_id })?;

        let receipt = {
            let mut store = PgEnrollmentStore::new(&mut tx);
            enrollment::commit(&mut store, &student.profile(), course_id).await?
        };
        tx.commit().await.map_err(store_error)?;

        Ok(receipt)
    }

    /// Run the rule chain without writing anything.
    pub async fn check(
        pool: &PgPool,
        student_id: DbId,
        course_id: DbId,
    ) -> Result<Eligibility, EnrollmentError> {
        let student = Self::load_student(pool, student_id).await?;
        let course = CourseRepo::find_eligibility_row(pool, course_id)
            .await
            .map_err(store_error)?
            .ok_or(EnrollmentError::CourseNotFound { course_id })?;

        let mut conn = pool.acquire().await.map_err(store_error)?;
        let mut store = PgEnrollmentStore::new(&mut conn);
        eligibility::evaluate(&mut store, &student.profile(), &course.profile()).await
    }
}
