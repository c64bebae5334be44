//! Course history models (append-only pass/fail records).

use maplewood_core::status::{CourseHistoryStatus, StatusId};
use maplewood_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `student_course_history` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseHistoryRecord {
    pub id: DbId,
    pub student_id: DbId,
    pub course_id: DbId,
    pub semester_id: DbId,
    pub status_id: StatusId,
    pub created_at: Timestamp,
}

/// One course in a student's history, with retakes folded together.
///
/// `status_id` is passed if any attempt passed, otherwise failed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseHistoryEntry {
    pub course_id: DbId,
    pub course_name: String,
    pub credits: f64,
    pub status_id: StatusId,
}

impl CourseHistoryEntry {
    pub fn status(&self) -> Option<CourseHistoryStatus> {
        CourseHistoryStatus::from_id(self.status_id)
    }
}

/// DTO for recording a course outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseHistoryRecord {
    pub student_id: DbId,
    pub course_id: DbId,
    pub semester_id: DbId,
    pub status_id: StatusId,
}
