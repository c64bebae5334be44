//! Student model and DTOs.

use maplewood_core::eligibility::StudentProfile;
use maplewood_core::status::{StatusId, StudentStatus};
use maplewood_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub grade_level: i16,
    pub status_id: StatusId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Student {
    /// The fields the eligibility rules read.
    pub fn profile(&self) -> StudentProfile {
        StudentProfile::new(self.id, self.grade_level)
    }

    pub fn status(&self) -> Option<StudentStatus> {
        StudentStatus::from_id(self.status_id)
    }
}

/// DTO for creating a new student.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub grade_level: i16,
    pub status_id: Option<StatusId>,
}
