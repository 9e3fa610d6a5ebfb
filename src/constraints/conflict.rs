//! Resource double-booking detection (H1, H2, H3).
//!
//! # Algorithm
//! One pass over the sessions groups them by `(resource_id, slot)` in a
//! hash map scoped to the call. Groups are kept in order of first
//! appearance, so reports are reproducible. Any group holding two or more
//! sessions is a conflict, whatever the session types or week parities.
//!
//! Linear in the number of sessions; no pairwise comparison.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use super::{run_unbounded, HardConstraint, Violation, ViolationKind, ViolationSink};
use crate::models::{ScheduledSession, TimeSlot, Timetable};

/// A resource dimension that can be double-booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResourceKind {
    Instructor,
    Room,
    Group,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Instructor,
        ResourceKind::Room,
        ResourceKind::Group,
    ];

    /// The id of this resource used by a session.
    #[inline]
    pub fn resource_id(self, session: &ScheduledSession) -> u32 {
        match self {
            Self::Instructor => session.instructor.id,
            Self::Room => session.room.id,
            Self::Group => session.group.id,
        }
    }

    /// Constraint guarding this resource.
    pub fn constraint(self) -> HardConstraint {
        match self {
            Self::Instructor => HardConstraint::InstructorConflict,
            Self::Room => HardConstraint::RoomConflict,
            Self::Group => HardConstraint::GroupConflict,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Instructor => "instructor",
            Self::Room => "room",
            Self::Group => "group",
        })
    }
}

/// Sessions booking one resource in one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictGroup {
    pub resource_id: u32,
    pub slot: TimeSlot,
    /// Indices of every session in the `(resource, slot)` group, ascending.
    pub sessions: Vec<usize>,
}

struct Bucket {
    resource_id: u32,
    slot: TimeSlot,
    entries: Vec<usize>,
}

impl Bucket {
    #[inline]
    fn is_conflicting(&self) -> bool {
        self.entries.len() > 1
    }
}

/// Finds double bookings of the resource selected by `key`.
///
/// `key` maps a session to the id of the resource it occupies. Sessions
/// with equal keys and identical slots conflict.
pub fn detect_conflicts<F>(timetable: &Timetable, key: F) -> Vec<ConflictGroup>
where
    F: Fn(&ScheduledSession) -> u32,
{
    group_sessions(timetable, key)
        .into_iter()
        .filter(Bucket::is_conflicting)
        .map(|b| ConflictGroup {
            resource_id: b.resource_id,
            slot: b.slot,
            sessions: b.entries,
        })
        .collect()
}

fn group_sessions<F>(timetable: &Timetable, key: F) -> Vec<Bucket>
where
    F: Fn(&ScheduledSession) -> u32,
{
    let mut index: HashMap<(u32, TimeSlot), usize> = HashMap::with_capacity(timetable.len());
    let mut buckets: Vec<Bucket> = Vec::new();

    for (i, session) in timetable.indexed() {
        let resource_id = key(session);
        let slot = session.slot;
        let b = *index.entry((resource_id, slot)).or_insert_with(|| {
            buckets.push(Bucket {
                resource_id,
                slot,
                entries: Vec::with_capacity(1),
            });
            buckets.len() - 1
        });
        buckets[b].entries.push(i);
    }

    buckets
}

pub(crate) fn collect(timetable: &Timetable, kind: ResourceKind, sink: &mut ViolationSink) {
    for bucket in group_sessions(timetable, |s| kind.resource_id(s)) {
        if sink.is_full() {
            return;
        }
        if bucket.is_conflicting() {
            sink.push(Violation::new(
                kind.constraint(),
                bucket.entries,
                ViolationKind::DoubleBooking {
                    resource: kind,
                    resource_id: bucket.resource_id,
                    slot: bucket.slot,
                },
            ));
        }
    }
}

/// Reports every double booking of `kind`.
pub fn check_resource_conflicts(timetable: &Timetable, kind: ResourceKind) -> Vec<Violation> {
    run_unbounded(timetable, |t, sink| collect(t, kind, sink))
}

/// H1: instructors teaching two sessions in the same slot.
pub fn check_instructor_conflicts(timetable: &Timetable) -> Vec<Violation> {
    check_resource_conflicts(timetable, ResourceKind::Instructor)
}

/// H2: rooms hosting two sessions in the same slot.
pub fn check_room_conflicts(timetable: &Timetable) -> Vec<Violation> {
    check_resource_conflicts(timetable, ResourceKind::Room)
}

/// H3: groups attending two sessions in the same slot.
pub fn check_group_conflicts(timetable: &Timetable) -> Vec<Violation> {
    check_resource_conflicts(timetable, ResourceKind::Group)
}
