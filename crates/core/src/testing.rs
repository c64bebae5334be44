//! In-memory enrollment store for unit tests, counting every query it serves.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use crate::eligibility::{CourseProfile, EligibilityStore};
use crate::enrollment::{EnrollmentReceipt, EnrollmentStore, InsertOutcome};
use crate::error::EnrollmentError;
use crate::status::{CourseHistoryStatus, EnrollmentStatus};
use crate::types::DbId;

#[derive(Debug, Default)]
pub struct CallCounts {
    pub passed_course_ids: usize,
    pub has_enrollment_with_status: usize,
    pub count_enrolled_in_active_term: usize,
    pub find_course: usize,
    pub insert_enrollment_in_active_term: usize,
}

impl CallCounts {
    /// Calls made by the eligibility rules.
    pub fn total(&self) -> usize {
        self.passed_course_ids + self.has_enrollment_with_status + self.count_enrolled_in_active_term
    }
}

/// Backing data for a single student.
#[derive(Debug, Default)]
pub struct FakeStore {
    pub calls: CallCounts,
    pub inserted: Vec<EnrollmentReceipt>,
    history: Vec<(DbId, CourseHistoryStatus)>,
    enrollments: Vec<(DbId, EnrollmentStatus)>,
    active_term_load: i64,
    courses: HashMap<DbId, CourseProfile>,
    active_term: Option<DbId>,
    conflict_on_insert: bool,
    failing: bool,
}

impl FakeStore {
    pub fn passed(mut self, course_id: DbId) -> Self {
        self.history.push((course_id, CourseHistoryStatus::Passed));
        self
    }

    pub fn failed(mut self, course_id: DbId) -> Self {
        self.history.push((course_id, CourseHistoryStatus::Failed));
        self
    }

    pub fn enrolled_in(self, course_id: DbId) -> Self {
        self.with_enrollment(course_id, EnrollmentStatus::Enrolled)
    }

    pub fn with_enrollment(mut self, course_id: DbId, status: EnrollmentStatus) -> Self {
        self.enrollments.push((course_id, status));
        self
    }

    /// Enrolled courses already held in the active term, besides any inserted here.
    pub fn active_term_load(mut self, count: i64) -> Self {
        self.active_term_load = count;
        self
    }

    pub fn course(mut self, course: CourseProfile) -> Self {
        if let Some(id) = course.id {
            self.courses.insert(id, course);
        }
        self
    }

    pub fn active_term(mut self, semester_id: DbId) -> Self {
        self.active_term = Some(semester_id);
        self
    }

    pub fn conflict_on_insert(mut self) -> Self {
        self.conflict_on_insert = true;
        self
    }

    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    fn check_available(&self) -> Result<(), EnrollmentError> {
        if self.failing {
            Err(EnrollmentError::Store("store unavailable".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl EligibilityStore for FakeStore {
    async fn passed_course_ids(
        &mut self,
        _student_id: DbId,
    ) -> Result<HashSet<DbId>, EnrollmentError> {
        self.calls.passed_course_ids += 1;
        self.check_available()?;
        Ok(self
            .history
            .iter()
            .filter(|(_, status)| *status == CourseHistoryStatus::Passed)
            .map(|(course_id, _)| *course_id)
            .collect())
    }

    async fn has_enrollment_with_status(
        &mut self,
        _student_id: DbId,
        course_id: DbId,
        status: EnrollmentStatus,
    ) -> Result<bool, EnrollmentError> {
        self.calls.has_enrollment_with_status += 1;
        self.check_available()?;
        let stored = self
            .enrollments
            .iter()
            .any(|(id, s)| *id == course_id && *s == status);
        let inserted = status == EnrollmentStatus::Enrolled
            && self.inserted.iter().any(|r| r.course_id == course_id);
        Ok(stored || inserted)
    }

    async fn count_enrolled_in_active_term(
        &mut self,
        _student_id: DbId,
    ) -> Result<i64, EnrollmentError> {
        self.calls.count_enrolled_in_active_term += 1;
        self.check_available()?;
        Ok(self.active_term_load + self.inserted.len() as i64)
    }
}

#[async_trait]
impl EnrollmentStore for FakeStore {
    async fn find_course(
        &mut self,
        course_id: DbId,
    ) -> Result<Option<CourseProfile>, EnrollmentError> {
        self.calls.find_course += 1;
        self.check_available()?;
        Ok(self.courses.get(&course_id).copied())
    }

    async fn insert_enrollment_in_active_term(
        &mut self,
        student_id: DbId,
        course_id: DbId,
    ) -> Result<InsertOutcome, EnrollmentError> {
        self.calls.insert_enrollment_in_active_term += 1;
        self.check_available()?;
        let Some(semester_id) = self.active_term else {
            return Ok(InsertOutcome::NoActiveTerm);
        };
        if self.conflict_on_insert {
            return Ok(InsertOutcome::AlreadyEnrolled);
        }
        let receipt = EnrollmentReceipt {
            enrollment_id: self.inserted.len() as DbId + 1,
            student_id,
            course_id,
            semester_id,
            status: EnrollmentStatus::Enrolled,
            created_at: chrono::Utc::now(),
        };
        self.inserted.push(receipt.clone());
        Ok(InsertOutcome::Inserted(receipt))
    }
}
