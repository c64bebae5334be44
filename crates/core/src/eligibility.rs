//! Course eligibility rule chain.
//!
//! [`evaluate`] decides whether a student may enroll in a course. Rules run in
//! a fixed order and the first failing rule wins; violations are never
//! aggregated. The in-memory grade-level check runs before any store access,
//! and the passed-course set fetched for the "already passed" rule is reused
//! by the prerequisite rule.
//!
//! Evaluation is read-only and keeps no state between calls, so repeated
//! calls over unchanged data return the same outcome.
//!
//! Time-slot conflicts are not checked: there is no section or time-slot
//! model to check them against.

use std::collections::HashSet;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::EnrollmentError;
use crate::status::EnrollmentStatus;
use crate::types::DbId;

/// Maximum number of enrolled courses a student may hold in the active term.
pub const MAX_COURSES_PER_TERM: i64 = 5;

/// Lowest grade level a student or course window may have.
pub const MIN_GRADE_LEVEL: i16 = 9;

/// Highest grade level a student or course window may have.
pub const MAX_GRADE_LEVEL: i16 = 12;

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Business reason a student cannot enroll in a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EligibilityRejection {
    #[error("student or course is missing identity or grade-level data")]
    InvalidInput,

    #[error("student grade level is outside the course's grade window")]
    GradeLevelMismatch,

    #[error("student has already passed this course")]
    CourseAlreadyPassed,

    #[error("student is already enrolled in this course")]
    CourseAlreadyEnrolled,

    #[error("student has not passed the prerequisite course")]
    PrerequisiteNotMet,

    #[error("student is already enrolled in the maximum number of courses this term")]
    MaxCoursesReached,
}

impl EligibilityRejection {
    /// Stable message code rendered to clients.
    pub fn message_code(self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::GradeLevelMismatch => "GRADE_LEVEL_MISMATCH",
            Self::CourseAlreadyPassed => "COURSE_ALREADY_PASSED",
            Self::CourseAlreadyEnrolled => "COURSE_ALREADY_ENROLLED",
            Self::PrerequisiteNotMet => "PREREQUISITE_NOT_MET",
            Self::MaxCoursesReached => "MAX_COURSES_REACHED",
        }
    }
}

/// Result of running the rule chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Rejected(EligibilityRejection),
}

impl Eligibility {
    pub fn is_eligible(self) -> bool {
        matches!(self, Eligibility::Eligible)
    }
}

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// The student fields the rule chain reads.
///
/// Fields are optional because rows handed over by collaborators are not
/// trusted to be complete; a missing field rejects with `InvalidInput`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StudentProfile {
    pub id: Option<DbId>,
    pub grade_level: Option<i16>,
}

impl StudentProfile {
    pub fn new(id: DbId, grade_level: i16) -> Self {
        Self {
            id: Some(id),
            grade_level: Some(grade_level),
        }
    }
}

/// Reference from a course to its prerequisite.
///
/// `id` is `None` when the referenced row could not be resolved, which the
/// prerequisite rule treats as not met.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrerequisiteRef {
    pub id: Option<DbId>,
}

/// The course fields the rule chain reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CourseProfile {
    pub id: Option<DbId>,
    pub grade_level_min: Option<i16>,
    pub grade_level_max: Option<i16>,
    pub prerequisite: Option<PrerequisiteRef>,
}

impl CourseProfile {
    pub fn new(id: DbId, grade_level_min: i16, grade_level_max: i16) -> Self {
        Self {
            id: Some(id),
            grade_level_min: Some(grade_level_min),
            grade_level_max: Some(grade_level_max),
            prerequisite: None,
        }
    }

    pub fn with_prerequisite(mut self, prerequisite_id: Option<DbId>) -> Self {
        self.prerequisite = Some(PrerequisiteRef {
            id: prerequisite_id,
        });
        self
    }
}

/// Profiles after the input contract check; every field the rules need is present.
#[derive(Debug, Clone, Copy)]
struct CheckedInput {
    student_id: DbId,
    grade_level: i16,
    course_id: DbId,
    grade_level_min: i16,
    grade_level_max: i16,
    prerequisite: Option<PrerequisiteRef>,
}

impl CheckedInput {
    fn from_profiles(student: &StudentProfile, course: &CourseProfile) -> Option<Self> {
        Some(Self {
            student_id: student.id?,
            grade_level: student.grade_level?,
            course_id: course.id?,
            grade_level_min: course.grade_level_min?,
            grade_level_max: course.grade_level_max?,
            prerequisite: course.prerequisite,
        })
    }
}

// ---------------------------------------------------------------------------
// Store seam
// ---------------------------------------------------------------------------

/// Read queries the rule chain issues against the enrollment datastore.
///
/// Implementations bound to a transaction see that transaction's view, so the
/// checks and a following insert share one consistency boundary.
#[async_trait]
pub trait EligibilityStore: Send {
    /// Distinct ids of courses the student has at least one passed history row for.
    async fn passed_course_ids(&mut self, student_id: DbId)
        -> Result<HashSet<DbId>, EnrollmentError>;

    /// Whether an enrollment row with `status` exists for the pair, in any term.
    async fn has_enrollment_with_status(
        &mut self,
        student_id: DbId,
        course_id: DbId,
        status: EnrollmentStatus,
    ) -> Result<bool, EnrollmentError>;

    /// Number of `enrolled` rows the student holds in the current active term.
    async fn count_enrolled_in_active_term(
        &mut self,
        student_id: DbId,
    ) -> Result<i64, EnrollmentError>;
}

// ---------------------------------------------------------------------------
// Pure rules
// ---------------------------------------------------------------------------

/// Whether `grade_level` lies inside `[min, max]` inclusive.
pub fn grade_level_in_window(grade_level: i16, min: i16, max: i16) -> bool {
    (min..=max).contains(&grade_level)
}

/// Whether a course grade window respects `9 <= min <= max <= 12`.
pub fn is_valid_grade_window(min: i16, max: i16) -> bool {
    MIN_GRADE_LEVEL <= min && min <= max && max <= MAX_GRADE_LEVEL
}

fn prerequisite_met(prerequisite: Option<PrerequisiteRef>, passed: &HashSet<DbId>) -> bool {
    match prerequisite {
        None => true,
        Some(PrerequisiteRef { id: Some(id) }) => passed.contains(&id),
        Some(PrerequisiteRef { id: None }) => false,
    }
}

// ---------------------------------------------------------------------------
// Evaluator
// ---------------------------------------------------------------------------

/// Run the eligibility rule chain for `student` against `course`.
///
/// Order:
/// 1. grade level within the course window (no store access)
/// 2. course not already passed
/// 3. no `enrolled` record for the pair
/// 4. prerequisite passed, using the set from step 2
/// 5. fewer than [`MAX_COURSES_PER_TERM`] enrolled courses in the active term
///
/// Store failures are returned as `Err`; every business outcome is `Ok`.
pub async fn evaluate<S>(
    store: &mut S,
    student: &StudentProfile,
    course: &CourseProfile,
) -> Result<Eligibility, EnrollmentError>
where
    S: EligibilityStore + ?Sized,
{
    let outcome = run_rules(store, student, course).await?;

    if let Eligibility::Rejected(reason) = outcome {
        tracing::debug!(
            student_id = ?student.id,
            course_id = ?course.id,
            reason = reason.message_code(),
            "Enrollment eligibility rejected"
        );
    }

    Ok(outcome)
}

async fn run_rules<S>(
    store: &mut S,
    student: &StudentProfile,
    course: &CourseProfile,
) -> Result<Eligibility, EnrollmentError>
where
    S: EligibilityStore + ?Sized,
{
    use EligibilityRejection::*;

    let Some(input) = CheckedInput::from_profiles(student, course) else {
        return Ok(Eligibility::Rejected(InvalidInput));
    };

    if !grade_level_in_window(input.grade_level, input.grade_level_min, input.grade_level_max) {
        return Ok(Eligibility::Rejected(GradeLevelMismatch));
    }

    let passed = store.passed_course_ids(input.student_id).await?;
    if passed.contains(&input.course_id) {
        return Ok(Eligibility::Rejected(CourseAlreadyPassed));
    }

    if store
        .has_enrollment_with_status(input.student_id, input.course_id, EnrollmentStatus::Enrolled)
        .await?
    {
        return Ok(Eligibility::Rejected(CourseAlreadyEnrolled));
    }

    if !prerequisite_met(input.prerequisite, &passed) {
        return Ok(Eligibility::Rejected(PrerequisiteNotMet));
    }

    let enrolled = store.count_enrolled_in_active_term(input.student_id).await?;
    if enrolled >= MAX_COURSES_PER_TERM {
        return Ok(Eligibility::Rejected(MaxCoursesReached));
    }

    Ok(Eligibility::Eligible)
}
