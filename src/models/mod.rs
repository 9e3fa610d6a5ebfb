//! Timetabling domain models.
//!
//! Value types for university timetables. Constructors enforce structural
//! invariants (teaching days, `HH:MM` times, exactly-one-pattern shapes),
//! and deserialization is routed through the same constructors, so the
//! validation engine only ever sees well-formed values.
//!
//! # Domain Mappings
//!
//! | u-timetable | Generic scheduling |
//! |-------------|--------------------|
//! | Course + SessionPattern | Task with recurring activities |
//! | Instructor / Room / StudentGroup | Resource |
//! | TimeSlot | Time window |
//! | Timetable | Schedule (candidate solution) |

mod course;
mod pattern;
mod resource;
mod session;
mod slot;
mod timetable;

/// Course identifier.
pub type CourseId = u32;
/// Instructor identifier.
pub type InstructorId = u32;
/// Room identifier.
pub type RoomId = u32;
/// Student group identifier.
pub type GroupId = u32;

pub use course::{Course, CourseOffering};
pub use pattern::{AlternatingPattern, FixedPattern, LabPattern, SessionPattern, WeekParity};
pub use resource::{Instructor, Room, Student, StudentGroup};
pub use session::{ScheduledSession, SessionType};
pub use slot::{ClockTime, TimeSlot, Weekday};
pub use timetable::Timetable;
