//! Academic term model and DTOs.

use chrono::NaiveDate;
use maplewood_core::status::{SemesterOrder, StatusId};
use maplewood_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `semesters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Semester {
    pub id: DbId,
    pub name: String,
    pub year: i32,
    pub order_in_year: StatusId,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl Semester {
    pub fn order(&self) -> Option<SemesterOrder> {
        SemesterOrder::from_id(self.order_in_year)
    }
}

/// DTO for creating a new semester.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSemester {
    pub name: String,
    pub year: i32,
    pub order_in_year: StatusId,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
}
