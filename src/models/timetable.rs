//! Timetable (candidate solution) model.
//!
//! A timetable is an unordered collection of scheduled sessions, one
//! candidate produced by the search. Duplicate sessions are kept: the
//! same session listed twice is a double booking, not a no-op.

use serde::{Deserialize, Serialize};

use super::ScheduledSession;

/// A complete candidate timetable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// Scheduled sessions. Indices into this list identify sessions in
    /// validation reports.
    pub sessions: Vec<ScheduledSession>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a session.
    pub fn add_session(&mut self, session: ScheduledSession) {
        self.sessions.push(session);
    }

    /// Adds a session (builder form).
    pub fn with_session(mut self, session: ScheduledSession) -> Self {
        self.sessions.push(session);
        self
    }

    /// Number of sessions.
    #[inline]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Session at `index`.
    pub fn session(&self, index: usize) -> Option<&ScheduledSession> {
        self.sessions.get(index)
    }

    /// Iterates over `(index, session)` pairs.
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &ScheduledSession)> {
        self.sessions.iter().enumerate()
    }
}

impl FromIterator<ScheduledSession> for Timetable {
    fn from_iter<T: IntoIterator<Item = ScheduledSession>>(iter: T) -> Self {
        Self {
            sessions: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Course, Instructor, Room, SessionPattern, SessionType, StudentGroup, TimeSlot,
    };
    use std::sync::Arc;

    fn sample_timetable() -> Timetable {
        let s1 = TimeSlot::parse("Saturday", "08:00", "10:00").unwrap();
        let s2 = TimeSlot::parse("Monday", "10:00", "12:00").unwrap();
        let course = Arc::new(
            Course::new(1, "Algorithms", "CS101")
                .unwrap()
                .with_pattern(SessionPattern::fixed(s1, s2).unwrap())
                .unwrap(),
        );
        let group = Arc::new(StudentGroup::new(1, "CS-A", "CS", 2023));
        let instructor = Arc::new(Instructor::new(1, "Dr. Smith").with_available([s1, s2]));
        let room = Arc::new(Room::classroom(1, "Room 101", 40));

        [s1, s2]
            .into_iter()
            .map(|slot| {
                ScheduledSession::new(
                    course.clone(),
                    group.clone(),
                    instructor.clone(),
                    room.clone(),
                    slot,
                    SessionType::Theory,
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_empty_timetable() {
        let t = Timetable::new();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert!(t.session(0).is_none());
    }

    #[test]
    fn test_indexed_and_lookup() {
        let t = sample_timetable();
        assert_eq!(t.len(), 2);
        let indices: Vec<usize> = t.indexed().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(t.session(1).map(|s| s.course.id), Some(1));
        assert!(t.session(2).is_none());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let t = sample_timetable();
        let dup = t.sessions[0].clone();
        let t = t.with_session(dup);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_serde_roundtrip() {
        let t = sample_timetable();
        let json = serde_json::to_string(&t).unwrap();
        let back: Timetable = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back.sessions[1].slot, t.sessions[1].slot);
        assert_eq!(back.sessions[0].session_type, SessionType::Theory);
    }
}
