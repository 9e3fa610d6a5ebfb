//! Hard constraints.
//!
//! Each checker is a pure function of a [`Timetable`]: it reads the
//! sessions and reports violations, never mutating anything.
//!
//! | Id | Constraint | Checker |
//! |----|-----------|---------|
//! | H1 | No instructor double-booked | [`conflict`] |
//! | H2 | No room double-booked | [`conflict`] |
//! | H3 | No student group double-booked | [`conflict`] |
//! | H4 | Instructor available in the slot | [`availability`] |
//! | H5 | Sessions follow the course pattern | [`conformance`] |
//! | H6 | Room kind matches session type (opt-in) | [`suitability`] |
//!
//! Slots are compared by exact `(day, start, end)` equality throughout.
//! Two sessions whose slots overlap without being identical are not
//! double-booked.

pub mod availability;
pub mod conflict;
pub mod conformance;
pub mod suitability;

use serde::Serialize;
use std::fmt;

use crate::models::{CourseId, InstructorId, RoomId, SessionType, TimeSlot, Timetable};

pub use availability::check_instructor_availability;
pub use conflict::{
    check_group_conflicts, check_instructor_conflicts, check_resource_conflicts,
    check_room_conflicts, detect_conflicts, ConflictGroup, ResourceKind,
};
pub use conformance::check_pattern_conformance;
pub use suitability::check_room_suitability;

/// Stable identifiers of the hard constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum HardConstraint {
    /// H1: an instructor teaches at most one session per slot.
    InstructorConflict,
    /// H2: a room hosts at most one session per slot.
    RoomConflict,
    /// H3: a group attends at most one session per slot.
    GroupConflict,
    /// H4: sessions fall in their instructor's available slots.
    InstructorAvailability,
    /// H5: each course's sessions match its declared pattern.
    PatternConformance,
    /// H6: lab sessions in lab rooms, theory sessions in classrooms.
    RoomSuitability,
}

impl HardConstraint {
    /// Constraints checked by default (H1-H5).
    pub const CORE: [HardConstraint; 5] = [
        HardConstraint::InstructorConflict,
        HardConstraint::RoomConflict,
        HardConstraint::GroupConflict,
        HardConstraint::InstructorAvailability,
        HardConstraint::PatternConformance,
    ];

    /// Every known constraint.
    pub const ALL: [HardConstraint; 6] = [
        HardConstraint::InstructorConflict,
        HardConstraint::RoomConflict,
        HardConstraint::GroupConflict,
        HardConstraint::InstructorAvailability,
        HardConstraint::PatternConformance,
        HardConstraint::RoomSuitability,
    ];

    /// Short code ("H1".."H6").
    pub fn code(self) -> &'static str {
        match self {
            Self::InstructorConflict => "H1",
            Self::RoomConflict => "H2",
            Self::GroupConflict => "H3",
            Self::InstructorAvailability => "H4",
            Self::PatternConformance => "H5",
            Self::RoomSuitability => "H6",
        }
    }

    /// Snake-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::InstructorConflict => "instructor_conflict",
            Self::RoomConflict => "room_conflict",
            Self::GroupConflict => "group_conflict",
            Self::InstructorAvailability => "instructor_availability",
            Self::PatternConformance => "pattern_conformance",
            Self::RoomSuitability => "room_suitability",
        }
    }

    /// Runs this constraint's checker.
    pub(crate) fn check(self, timetable: &Timetable, sink: &mut ViolationSink) {
        match self {
            Self::InstructorConflict => {
                conflict::collect(timetable, ResourceKind::Instructor, sink)
            }
            Self::RoomConflict => conflict::collect(timetable, ResourceKind::Room, sink),
            Self::GroupConflict => conflict::collect(timetable, ResourceKind::Group, sink),
            Self::InstructorAvailability => availability::collect(timetable, sink),
            Self::PatternConformance => conformance::collect(timetable, sink),
            Self::RoomSuitability => suitability::collect(timetable, sink),
        }
    }
}

impl fmt::Display for HardConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.name())
    }
}

/// A broken hard constraint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// Which constraint.
    pub constraint: HardConstraint,
    /// Offending sessions (indices into `Timetable::sessions`, ascending).
    pub sessions: Vec<usize>,
    /// What exactly went wrong.
    pub kind: ViolationKind,
}

/// Details of a violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ViolationKind {
    /// A resource holds two or more sessions in the same slot and week.
    DoubleBooking {
        resource: ResourceKind,
        resource_id: u32,
        slot: TimeSlot,
    },
    /// The instructor is not available in the slot.
    Unavailable {
        instructor_id: InstructorId,
        slot: TimeSlot,
    },
    /// Sessions do not follow the course pattern.
    Pattern {
        course_id: CourseId,
        mismatch: PatternMismatch,
    },
    /// The room kind does not fit the session type.
    RoomMismatch {
        room_id: RoomId,
        session_type: SessionType,
    },
}

/// The expectation of a session pattern that was not met.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PatternMismatch {
    /// Session of a type the pattern does not produce.
    UnexpectedSessionType(SessionType),
    /// Session at a slot the pattern does not declare.
    UnexpectedSlot(TimeSlot),
    /// Declared slot with no session.
    MissingSlot(TimeSlot),
    /// Declared slot used more than once.
    RepeatedSlot { slot: TimeSlot, count: usize },
    /// The paired course has no session in the timetable.
    PairedCourseMissing(CourseId),
    /// The paired course is not alternating.
    PairedCourseNotAlternating(CourseId),
    /// The paired course alternates in a different slot.
    PairedSlotMismatch(CourseId),
    /// The paired course alternates on the same week parity.
    PairedParityClash(CourseId),
    /// The paired course is paired with some other course.
    PairedCourseNotReciprocal(CourseId),
}

impl Violation {
    pub(crate) fn new(constraint: HardConstraint, sessions: Vec<usize>, kind: ViolationKind) -> Self {
        Self {
            constraint,
            sessions,
            kind,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.constraint.code())?;
        match &self.kind {
            ViolationKind::DoubleBooking {
                resource,
                resource_id,
                slot,
            } => write!(f, "{resource} {resource_id} double-booked at {slot}")?,
            ViolationKind::Unavailable {
                instructor_id,
                slot,
            } => write!(f, "instructor {instructor_id} not available at {slot}")?,
            ViolationKind::Pattern {
                course_id,
                mismatch,
            } => write!(f, "course {course_id} {mismatch}")?,
            ViolationKind::RoomMismatch {
                room_id,
                session_type,
            } => write!(f, "room {room_id} unsuitable for {session_type} session")?,
        }
        write!(f, " {:?}", self.sessions)
    }
}

impl fmt::Display for PatternMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedSessionType(t) => write!(f, "has unexpected {t} session"),
            Self::UnexpectedSlot(s) => write!(f, "uses undeclared slot {s}"),
            Self::MissingSlot(s) => write!(f, "misses declared slot {s}"),
            Self::RepeatedSlot { slot, count } => write!(f, "uses slot {slot} {count} times"),
            Self::PairedCourseMissing(c) => write!(f, "is paired with course {c}, which is not scheduled"),
            Self::PairedCourseNotAlternating(c) => {
                write!(f, "is paired with course {c}, which does not alternate")
            }
            Self::PairedSlotMismatch(c) => write!(f, "alternates in a different slot than course {c}"),
            Self::PairedParityClash(c) => write!(f, "alternates on the same weeks as course {c}"),
            Self::PairedCourseNotReciprocal(c) => write!(f, "is not paired back by course {c}"),
        }
    }
}

/// Violation collector with an optional stop limit.
#[derive(Debug, Default)]
pub(crate) struct ViolationSink {
    violations: Vec<Violation>,
    limit: Option<usize>,
}

impl ViolationSink {
    /// Collects everything.
    pub(crate) fn unbounded() -> Self {
        Self::default()
    }

    /// Stops accepting after `limit` violations.
    pub(crate) fn bounded(limit: usize) -> Self {
        Self {
            violations: Vec::new(),
            limit: Some(limit),
        }
    }

    pub(crate) fn push(&mut self, violation: Violation) {
        if !self.is_full() {
            self.violations.push(violation);
        }
    }

    /// Whether checkers should stop scanning.
    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.limit.is_some_and(|l| self.violations.len() >= l)
    }

    pub(crate) fn into_vec(self) -> Vec<Violation> {
        self.violations
    }
}

/// Runs one checker to completion.
pub(crate) fn run_unbounded(
    timetable: &Timetable,
    check: impl FnOnce(&Timetable, &mut ViolationSink),
) -> Vec<Violation> {
    let mut sink = ViolationSink::unbounded();
    check(timetable, &mut sink);
    sink.into_vec()
}

/// Combined instructor gate: availability (H4) and double booking (H1).
///
/// Returns `true` iff every session sits in an available slot of its
/// instructor and no instructor teaches twice in the same slot.
pub fn check_h1_instructor_conflicts(timetable: &Timetable) -> bool {
    let mut sink = ViolationSink::bounded(1);
    availability::collect(timetable, &mut sink);
    if !sink.is_full() {
        conflict::collect(timetable, ResourceKind::Instructor, &mut sink);
    }
    !sink.is_full()
}
