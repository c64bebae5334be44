//! Repository for the `student_course_history` table.
//!
//! History rows are append-only: nothing here updates or deletes them.

use std::collections::HashSet;

use maplewood_core::status::CourseHistoryStatus;
use maplewood_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::course_history::{
    CourseHistoryEntry, CourseHistoryRecord, CreateCourseHistoryRecord,
};

/// Column list for student_course_history queries.
const COLUMNS: &str = "id, student_id, course_id, semester_id, status_id, created_at";

/// Provides access to students' course outcomes.
pub struct CourseHistoryRepo;

impl CourseHistoryRepo {
    /// Record a course outcome, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCourseHistoryRecord,
    ) -> Result<CourseHistoryRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO student_course_history (student_id, course_id, semester_id, status_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CourseHistoryRecord>(&query)
            .bind(input.student_id)
            .bind(input.course_id)
            .bind(input.semester_id)
            .bind(input.status_id)
            .fetch_one(pool)
            .await
    }

    /// Ids of the courses the student has at least one passed record for.
    pub async fn passed_course_ids<'e, E>(
        executor: E,
        student_id: DbId,
    ) -> Result<HashSet<DbId>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let rows: Vec<(DbId,)> = sqlx::query_as(
            "SELECT DISTINCT course_id FROM student_course_history
             WHERE student_id = $1 AND status_id = $2",
        )
        .bind(student_id)
        .bind(CourseHistoryStatus::Passed.id())
        .fetch_all(executor)
        .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Sum of credits over distinct passed courses; retakes count once.
    pub async fn earned_credits(pool: &PgPool, student_id: DbId) -> Result<f64, sqlx::Error> {
        let (credits,): (f64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(c.credits), 0)::DOUBLE PRECISION
             FROM courses c
             WHERE c.id IN (
                 SELECT course_id FROM student_course_history
                 WHERE student_id = $1 AND status_id = $2
             )",
        )
        .bind(student_id)
        .bind(CourseHistoryStatus::Passed.id())
        .fetch_one(pool)
        .await?;
        Ok(credits)
    }

    /// One entry per course the student attempted; passed if any attempt passed.
    pub async fn list_for_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<CourseHistoryEntry>, sqlx::Error> {
        sqlx::query_as::<_, CourseHistoryEntry>(
            "SELECT c.id AS course_id, c.name AS course_name, c.credits,
                    CASE WHEN bool_or(h.status_id = $2) THEN $2 ELSE $3 END AS status_id
             FROM student_course_history h
             JOIN courses c ON c.id = h.course_id
             WHERE h.student_id = $1
             GROUP BY c.id, c.name, c.credits
             ORDER BY c.name ASC",
        )
        .bind(student_id)
        .bind(CourseHistoryStatus::Passed.id())
        .bind(CourseHistoryStatus::Failed.id())
        .fetch_all(pool)
        .await
    }
}
