//! Repository for the `students` table.

use maplewood_core::status::StudentStatus;
use maplewood_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::student::{CreateStudent, Student};

/// Column list for students queries.
const COLUMNS: &str = "id, first_name, last_name, email, grade_level, status_id, \
    created_at, updated_at";

/// Provides read access to student records. Writes exist for fixtures and
/// administrative tooling; the enrollment core never mutates students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (first_name, last_name, email, grade_level, status_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(input.grade_level)
            .bind(input.status_id.unwrap_or(StudentStatus::Active.id()))
            .fetch_one(pool)
            .await
    }

    /// Find a student by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a student by id and take a row lock held until the transaction ends.
    ///
    /// Enrollment commits for the same student queue behind this lock, so the
    /// course-load count and the insert of one commit are never interleaved
    /// with another's.
    pub async fn find_by_id_for_update<'e, E>(
        executor: E,
        id: DbId,
    ) -> Result<Option<Student>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}
