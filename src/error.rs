//! Error types.
//!
//! Broken hard constraints are not errors: they are reported through
//! [`Verdict`](crate::engine::Verdict). The types here cover malformed
//! model values and caller bugs that make a timetable unfit for validation.

use thiserror::Error;

use crate::models::CourseId;

/// Rejection of a malformed model value at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown day '{0}' (expected Saturday..Thursday)")]
    UnknownDay(String),

    #[error("invalid time '{0}' (expected HH:MM)")]
    InvalidTime(String),

    #[error("time slot must end after it starts ({start}-{end})")]
    EmptySlot { start: String, end: String },

    #[error("session pattern slots must be distinct")]
    DuplicatePatternSlot,

    #[error("course {0} cannot be paired with itself")]
    SelfPairedCourse(CourseId),

    #[error("course {0} has no session pattern and cannot be scheduled")]
    UnschedulableCourse(CourseId),

    #[error("field '{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("sub-group must be at least 1, got {0}")]
    InvalidSubGroup(u32),
}

/// Kind of shared entity referenced by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Course,
    Instructor,
    Room,
    Group,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Course => "course",
            Self::Instructor => "instructor",
            Self::Room => "room",
            Self::Group => "group",
        };
        f.write_str(name)
    }
}

/// A timetable the construction layer should never have produced.
///
/// Signals a bug in the caller, not in the schedule. Validation aborts
/// for the whole timetable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreconditionViolation {
    #[error("session #{session} references course {course_id}, which has no session pattern")]
    UnschedulableCourse { session: usize, course_id: CourseId },

    #[error("{entity} {id} is defined more than once with different contents")]
    ConflictingDefinition { entity: EntityKind, id: u32 },

    #[error("course {course_id} is paired with itself")]
    SelfPairedCourse { course_id: CourseId },
}

/// Invalid validator configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid validator config: {0}")]
pub struct ConfigError(pub String);

/// Result alias for model construction.
pub type Result<T> = std::result::Result<T, ModelError>;
