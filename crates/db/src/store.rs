//! Transaction-bound implementation of the core enrollment store.

use std::collections::HashSet;

use async_trait::async_trait;
use maplewood_core::eligibility::{CourseProfile, EligibilityStore};
use maplewood_core::enrollment::{EnrollmentStore, InsertOutcome};
use maplewood_core::error::EnrollmentError;
use maplewood_core::status::EnrollmentStatus;
use maplewood_core::types::DbId;
use sqlx::PgConnection;

use crate::repositories::enrollment_repo::is_duplicate_enrollment;
use crate::repositories::{CourseHistoryRepo, CourseRepo, EnrollmentRepo};

/// Runs every enrollment query on one connection, normally the connection
/// of an open transaction, so eligibility reads and the insert share it.
pub struct PgEnrollmentStore<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PgEnrollmentStore<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }
}

fn store_error(err: sqlx::Error) -> EnrollmentError {
    tracing::error!(error = %err, "Enrollment store query failed");
    EnrollmentError::Store(err.to_string())
}

#[async_trait]
impl EligibilityStore for PgEnrollmentStore<'_> {
    async fn passed_course_ids(
        &mut self,
        student_id: DbId,
    ) -> Result<HashSet<DbId>, EnrollmentError> {
        CourseHistoryRepo::passed_course_ids(&mut *self.conn, student_id)
            .await
            .map_err(store_error)
    }

    async fn has_enrollment_with_status(
        &mut self,
        student_id: DbId,
        course_id: DbId,
        status: EnrollmentStatus,
    ) -> Result<bool, EnrollmentError> {
        EnrollmentRepo::exists_with_status(&mut *self.conn, student_id, course_id, status)
            .await
            .map_err(store_error)
    }

    async fn count_enrolled_in_active_term(
        &mut self,
        student_id: DbId,
    ) -> Result<i64, EnrollmentError> {
        EnrollmentRepo::count_enrolled_in_active_term(&mut *self.conn, student_id)
            .await
            .map_err(store_error)
    }
}

#[async_trait]
impl EnrollmentStore for PgEnrollmentStore<'_> {
    async fn find_course(
        &mut self,
        course_id: DbId,
    ) -> Result<Option<CourseProfile>, EnrollmentError> {
        let row = CourseRepo::find_eligibility_row(&mut *self.conn, course_id)
            .await
            .map_err(store_error)?;
        Ok(row.map(|r| r.profile()))
    }

    async fn insert_enrollment_in_active_term(
        &mut self,
        student_id: DbId,
        course_id: DbId,
    ) -> Result<InsertOutcome, EnrollmentError> {
        match EnrollmentRepo::insert_in_active_term(&mut *self.conn, student_id, course_id).await {
            Ok(Some(row)) => Ok(InsertOutcome::Inserted(row.into_receipt()?)),
            Ok(None) => Ok(InsertOutcome::NoActiveTerm),
            Err(err) if is_duplicate_enrollment(&err) => Ok(InsertOutcome::AlreadyEnrolled),
            Err(err) => Err(store_error(err)),
        }
    }
}
