//! Course catalog models and DTOs.

use maplewood_core::eligibility::{
    is_valid_grade_window, CourseProfile, MAX_GRADE_LEVEL, MIN_GRADE_LEVEL,
};
use maplewood_core::status::{CourseType, SemesterOrder, StatusId};
use maplewood_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub credits: f64,
    pub hours_per_week: i16,
    pub specialization_id: DbId,
    pub prerequisite_id: Option<DbId>,
    pub course_type_id: StatusId,
    pub grade_level_min: i16,
    pub grade_level_max: i16,
    pub semester_order: StatusId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Course {
    pub fn course_type(&self) -> Option<CourseType> {
        CourseType::from_id(self.course_type_id)
    }

    pub fn semester_order(&self) -> Option<SemesterOrder> {
        SemesterOrder::from_id(self.semester_order)
    }
}

/// Course grade window and prerequisite as loaded for an eligibility check.
///
/// `prerequisite_id` is the column value; `prerequisite_resolved_id` is the id
/// of the referenced row, `None` when the reference dangles.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct CourseEligibilityRow {
    pub id: DbId,
    pub grade_level_min: i16,
    pub grade_level_max: i16,
    pub prerequisite_id: Option<DbId>,
    pub prerequisite_resolved_id: Option<DbId>,
}

impl CourseEligibilityRow {
    /// The fields the eligibility rules read.
    pub fn profile(&self) -> CourseProfile {
        if !is_valid_grade_window(self.grade_level_min, self.grade_level_max) {
            tracing::warn!(
                course_id = self.id,
                grade_level_min = self.grade_level_min,
                grade_level_max = self.grade_level_max,
                min_allowed = MIN_GRADE_LEVEL,
                max_allowed = MAX_GRADE_LEVEL,
                "Course grade window violates catalog bounds"
            );
        }
        let profile = CourseProfile::new(self.id, self.grade_level_min, self.grade_level_max);
        match self.prerequisite_id {
            Some(_) => profile.with_prerequisite(self.prerequisite_resolved_id),
            None => profile,
        }
    }
}

/// Catalog view of a course with its specialization and prerequisite names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseSummary {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub credits: f64,
    pub hours_per_week: i16,
    pub specialization: String,
    pub prerequisite: Option<String>,
    pub course_type: String,
    pub grade_level_min: i16,
    pub grade_level_max: i16,
    pub semester_order: String,
}

/// A row from the `specializations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Specialization {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new course.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourse {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub credits: f64,
    pub hours_per_week: i16,
    pub specialization_id: DbId,
    pub prerequisite_id: Option<DbId>,
    pub course_type_id: StatusId,
    pub grade_level_min: i16,
    pub grade_level_max: i16,
    pub semester_order: StatusId,
}
