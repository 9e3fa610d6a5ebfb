//! Resource models.
//!
//! Instructors, rooms and student groups are the entities a session
//! occupies. Each can be double-booked, and each is compared by its id.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{GroupId, InstructorId, RoomId, TimeSlot};
use crate::error::{ModelError, Result};

/// An instructor with the slots they may be scheduled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    /// Unique instructor identifier.
    pub id: InstructorId,
    /// Display name.
    pub full_name: String,
    /// Slots the instructor is assignable in. Hard constraint.
    pub available_slots: BTreeSet<TimeSlot>,
    /// Preferred slots. Soft signal, ignored by hard constraints.
    #[serde(default)]
    pub preferred_slots: Option<BTreeSet<TimeSlot>>,
}

impl Instructor {
    /// Creates an instructor with no available slots.
    pub fn new(id: InstructorId, full_name: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            available_slots: BTreeSet::new(),
            preferred_slots: None,
        }
    }

    /// Adds available slots.
    pub fn with_available(mut self, slots: impl IntoIterator<Item = TimeSlot>) -> Self {
        self.available_slots.extend(slots);
        self
    }

    /// Sets preferred slots.
    pub fn with_preferred(mut self, slots: impl IntoIterator<Item = TimeSlot>) -> Self {
        self.preferred_slots = Some(slots.into_iter().collect());
        self
    }

    /// Whether the instructor may teach in `slot` (exact match).
    #[inline]
    pub fn is_available(&self, slot: &TimeSlot) -> bool {
        self.available_slots.contains(slot)
    }
}

/// A classroom or lab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: RoomId,
    /// Display name (e.g., "Room 101").
    pub name: String,
    /// Maximum number of students.
    pub capacity: u32,
    /// Lab rooms host lab sessions only.
    #[serde(default)]
    pub is_lab: bool,
}

impl Room {
    /// Creates a regular classroom.
    pub fn classroom(id: RoomId, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            capacity,
            is_lab: false,
        }
    }

    /// Creates a lab room.
    pub fn lab(id: RoomId, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            is_lab: true,
            ..Self::classroom(id, name, capacity)
        }
    }
}

/// A cohort of students that attends sessions together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentGroup {
    /// Unique group identifier.
    pub id: GroupId,
    /// Group label (e.g., "CS-401").
    pub name: String,
    /// Field of study (e.g., "Computer Engineering").
    pub major: String,
    /// Year of entry (e.g., 2022).
    pub entry_year: u16,
}

impl StudentGroup {
    pub fn new(
        id: GroupId,
        name: impl Into<String>,
        major: impl Into<String>,
        entry_year: u16,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            major: major.into(),
            entry_year,
        }
    }
}

/// A student belonging to a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStudent")]
pub struct Student {
    pub full_name: String,
    /// University student number (e.g., "401234567").
    pub student_number: String,
    pub group_id: GroupId,
}

#[derive(Deserialize)]
struct RawStudent {
    full_name: String,
    student_number: String,
    group_id: GroupId,
}

impl TryFrom<RawStudent> for Student {
    type Error = ModelError;

    fn try_from(raw: RawStudent) -> Result<Self> {
        Self::new(raw.full_name, raw.student_number, raw.group_id)
    }
}

impl Student {
    pub fn new(
        full_name: impl Into<String>,
        student_number: impl Into<String>,
        group_id: GroupId,
    ) -> Result<Self> {
        let full_name = full_name.into();
        let student_number = student_number.into();
        if full_name.trim().is_empty() {
            return Err(ModelError::EmptyField("full_name"));
        }
        if student_number.trim().is_empty() {
            return Err(ModelError::EmptyField("student_number"));
        }
        Ok(Self {
            full_name,
            student_number,
            group_id,
        })
    }
}
