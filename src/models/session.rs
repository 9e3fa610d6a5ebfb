//! Scheduled session model.
//!
//! One concrete weekly occurrence of a course for a group, taught by an
//! instructor in a room at a slot. Entities are shared between sessions
//! through `Arc`, so a timetable never copies course or instructor data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::{Course, Instructor, Room, StudentGroup, TimeSlot};
use crate::error::{ModelError, Result};

/// Kind of teaching session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Theory,
    Lab,
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Theory => "theory",
            Self::Lab => "lab",
        })
    }
}

/// A scheduled session (theory or lab).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledSession {
    pub course: Arc<Course>,
    pub group: Arc<StudentGroup>,
    pub instructor: Arc<Instructor>,
    pub room: Arc<Room>,
    pub slot: TimeSlot,
    #[serde(rename = "type")]
    pub session_type: SessionType,
}

impl ScheduledSession {
    /// Creates a session. The course must carry a session pattern.
    pub fn new(
        course: Arc<Course>,
        group: Arc<StudentGroup>,
        instructor: Arc<Instructor>,
        room: Arc<Room>,
        slot: TimeSlot,
        session_type: SessionType,
    ) -> Result<Self> {
        if !course.is_schedulable() {
            return Err(ModelError::UnschedulableCourse(course.id));
        }
        Ok(Self {
            course,
            group,
            instructor,
            room,
            slot,
            session_type,
        })
    }
}

impl fmt::Display for ScheduledSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (group {}, instructor {}, room {}) at {}",
            self.course.code,
            self.session_type,
            self.group.id,
            self.instructor.id,
            self.room.id,
            self.slot
        )
    }
}
