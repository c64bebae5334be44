//! Repository for the `student_enrollments` table.

use maplewood_core::status::EnrollmentStatus;
use maplewood_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use super::CURRENT_TERM_ID;
use crate::models::enrollment::{EnrolledCourse, StudentEnrollment};

/// Column list for student_enrollments queries.
const COLUMNS: &str = "id, student_id, course_id, semester_id, status_id, created_at";

/// Partial unique index allowing one `enrolled` row per student, course and term.
pub const ENROLLED_UNIQUE_INDEX: &str = "uq_student_enrollments_enrolled";

/// PostgreSQL SQLSTATE for unique_violation.
const UNIQUE_VIOLATION: &str = "23505";

/// Provides access to student enrollments.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Whether an enrollment with `status` exists for the pair, in any term.
    pub async fn exists_with_status<'e, E>(
        executor: E,
        student_id: DbId,
        course_id: DbId,
        status: EnrollmentStatus,
    ) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                SELECT 1 FROM student_enrollments
                WHERE student_id = $1 AND course_id = $2 AND status_id = $3
             )",
        )
        .bind(student_id)
        .bind(course_id)
        .bind(status.id())
        .fetch_one(executor)
        .await?;
        Ok(exists)
    }

    /// Number of `enrolled` rows the student holds in the current term.
    ///
    /// Zero when no term is active.
    pub async fn count_enrolled_in_active_term<'e, E>(
        executor: E,
        student_id: DbId,
    ) -> Result<i64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT COUNT(*) FROM student_enrollments
             WHERE student_id = $1
               AND status_id = $2
               AND semester_id = ({CURRENT_TERM_ID})"
        );
        let (count,): (i64,) = sqlx::query_as(&query)
            .bind(student_id)
            .bind(EnrollmentStatus::Enrolled.id())
            .fetch_one(executor)
            .await?;
        Ok(count)
    }

    /// Guarded insert of an `enrolled` row into the current term.
    ///
    /// Term resolution and insert are one statement: the row is inserted only
    /// if the term subquery yields a row at execution time. Returns `None`
    /// when no term is active. A concurrent duplicate fails with a unique
    /// violation on [`ENROLLED_UNIQUE_INDEX`].
    pub async fn insert_in_active_term<'e, E>(
        executor: E,
        student_id: DbId,
        course_id: DbId,
    ) -> Result<Option<StudentEnrollment>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "WITH current_term AS ({CURRENT_TERM_ID})
             INSERT INTO student_enrollments (student_id, course_id, semester_id, status_id)
             SELECT $1, $2, current_term.id, $3 FROM current_term
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudentEnrollment>(&query)
            .bind(student_id)
            .bind(course_id)
            .bind(EnrollmentStatus::Enrolled.id())
            .fetch_optional(executor)
            .await
    }

    /// Courses the student is enrolled in for the current term, by course code.
    pub async fn list_enrolled_courses_in_active_term(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<EnrolledCourse>, sqlx::Error> {
        let query = format!(
            "SELECT se.id AS enrollment_id, c.id AS course_id, c.code, c.name, c.credits,
                    se.semester_id
             FROM student_enrollments se
             JOIN courses c ON c.id = se.course_id
             WHERE se.student_id = $1
               AND se.status_id = $2
               AND se.semester_id = ({CURRENT_TERM_ID})
             ORDER BY c.code ASC"
        );
        sqlx::query_as::<_, EnrolledCourse>(&query)
            .bind(student_id)
            .bind(EnrollmentStatus::Enrolled.id())
            .fetch_all(pool)
            .await
    }

    /// All enrollment rows of a student across terms, newest first.
    pub async fn list_for_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<StudentEnrollment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM student_enrollments
             WHERE student_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, StudentEnrollment>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }
}

/// Whether `err` is the duplicate-`enrolled` unique violation.
pub fn is_duplicate_enrollment(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
                && db_err.constraint() == Some(ENROLLED_UNIQUE_INDEX)
        }
        _ => false,
    }
}
