//! Repository for the `courses` and `specializations` tables.

use maplewood_core::status::SemesterOrder;
use maplewood_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::course::{
    Course, CourseEligibilityRow, CourseSummary, CreateCourse, Specialization,
};

/// Column list for courses queries.
const COLUMNS: &str = "id, code, name, description, credits, hours_per_week, \
    specialization_id, prerequisite_id, course_type_id, grade_level_min, grade_level_max, \
    semester_order, created_at, updated_at";

/// Select list and joins for the catalog view.
const SUMMARY_SELECT: &str = "SELECT c.id, c.code, c.name, c.description, c.credits, \
        c.hours_per_week, sp.name AS specialization, pre.name AS prerequisite, \
        ct.name AS course_type, c.grade_level_min, c.grade_level_max, \
        so.name AS semester_order \
     FROM courses c \
     JOIN specializations sp ON sp.id = c.specialization_id \
     JOIN course_types ct ON ct.id = c.course_type_id \
     JOIN semester_orders so ON so.id = c.semester_order \
     LEFT JOIN courses pre ON pre.id = c.prerequisite_id";

/// Catalog pages are capped; the catalog is small enough to return whole.
pub const CATALOG_PAGE_SIZE: i64 = 100;

/// Provides access to the course catalog.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCourse) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses
                (code, name, description, credits, hours_per_week, specialization_id,
                 prerequisite_id, course_type_id, grade_level_min, grade_level_max,
                 semester_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.credits)
            .bind(input.hours_per_week)
            .bind(input.specialization_id)
            .bind(input.prerequisite_id)
            .bind(input.course_type_id)
            .bind(input.grade_level_min)
            .bind(input.grade_level_max)
            .bind(input.semester_order)
            .fetch_one(pool)
            .await
    }

    /// Find a course by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load the grade window and prerequisite reference of a course.
    pub async fn find_eligibility_row<'e, E>(
        executor: E,
        id: DbId,
    ) -> Result<Option<CourseEligibilityRow>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, CourseEligibilityRow>(
            "SELECT c.id, c.grade_level_min, c.grade_level_max, c.prerequisite_id,
                    pre.id AS prerequisite_resolved_id
             FROM courses c
             LEFT JOIN courses pre ON pre.id = c.prerequisite_id
             WHERE c.id = $1",
        )
        .bind(id)
        .fetch_optional(executor)
        .await
    }

    /// List the catalog ordered by course code.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<CourseSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} ORDER BY c.code ASC LIMIT $1");
        sqlx::query_as::<_, CourseSummary>(&query)
            .bind(CATALOG_PAGE_SIZE)
            .fetch_all(pool)
            .await
    }

    /// List catalog courses offered in the given half of the year.
    pub async fn list_summaries_by_semester_order(
        pool: &PgPool,
        order: SemesterOrder,
    ) -> Result<Vec<CourseSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT} WHERE c.semester_order = $1 ORDER BY c.code ASC LIMIT $2"
        );
        sqlx::query_as::<_, CourseSummary>(&query)
            .bind(order.id())
            .bind(CATALOG_PAGE_SIZE)
            .fetch_all(pool)
            .await
    }
}

/// Provides access to course specializations.
pub struct SpecializationRepo;

impl SpecializationRepo {
    /// Insert a new specialization, returning the created row.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Specialization, sqlx::Error> {
        sqlx::query_as::<_, Specialization>(
            "INSERT INTO specializations (name) VALUES ($1) RETURNING id, name, created_at",
        )
        .bind(name)
        .fetch_one(pool)
        .await
    }
}
