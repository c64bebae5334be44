//! Repository for the `semesters` table.

use sqlx::{PgExecutor, PgPool};

use super::CURRENT_TERM_ID;
use crate::models::semester::{CreateSemester, Semester};

/// Column list for semesters queries.
const COLUMNS: &str = "id, name, year, order_in_year, start_date, end_date, is_active, created_at";

/// Provides access to academic terms.
pub struct SemesterRepo;

impl SemesterRepo {
    /// Insert a new semester, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSemester) -> Result<Semester, sqlx::Error> {
        let query = format!(
            "INSERT INTO semesters (name, year, order_in_year, start_date, end_date, is_active)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Semester>(&query)
            .bind(&input.name)
            .bind(input.year)
            .bind(input.order_in_year)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Resolve the current term: the most recent active semester by year,
    /// then order in year. `None` when no semester is active.
    pub async fn find_current<'e, E>(executor: E) -> Result<Option<Semester>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM semesters WHERE id = ({CURRENT_TERM_ID})");
        sqlx::query_as::<_, Semester>(&query)
            .fetch_optional(executor)
            .await
    }
}
