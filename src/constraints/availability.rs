//! Instructor availability (H4).
//!
//! Every session must sit in one of its instructor's available slots,
//! matched exactly. Independent of any other session.

use super::{run_unbounded, HardConstraint, Violation, ViolationKind, ViolationSink};
use crate::models::Timetable;

pub(crate) fn collect(timetable: &Timetable, sink: &mut ViolationSink) {
    for (i, session) in timetable.indexed() {
        if sink.is_full() {
            return;
        }
        if !session.instructor.is_available(&session.slot) {
            sink.push(Violation::new(
                HardConstraint::InstructorAvailability,
                vec![i],
                ViolationKind::Unavailable {
                    instructor_id: session.instructor.id,
                    slot: session.slot,
                },
            ));
        }
    }
}

/// H4: sessions outside their instructor's available slots.
pub fn check_instructor_availability(timetable: &Timetable) -> Vec<Violation> {
    run_unbounded(timetable, collect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::check_h1_instructor_conflicts;
    use crate::models::{
        Course, Instructor, Room, ScheduledSession, SessionPattern, SessionType, StudentGroup,
        TimeSlot,
    };
    use std::sync::Arc;

    struct Setup {
        group: Arc<StudentGroup>,
        room: Arc<Room>,
        instructor: Arc<Instructor>,
        course: Arc<Course>,
        slot1: TimeSlot,
        slot2: TimeSlot,
        slot3: TimeSlot,
    }

    fn common_setup() -> Setup {
        let slot1 = TimeSlot::parse("Saturday", "08:00", "10:00").unwrap();
        let slot2 = TimeSlot::parse("Saturday", "10:00", "12:00").unwrap();
        let slot3 = TimeSlot::parse("Sunday", "08:00", "10:00").unwrap();
        Setup {
            group: Arc::new(StudentGroup::new(1, "CS-A", "CS", 2023)),
            room: Arc::new(Room::classroom(1, "Room 101", 40)),
            instructor: Arc::new(Instructor::new(1, "Dr. Smith").with_available([slot1, slot2])),
            course: Arc::new(
                Course::new(1, "Algorithms", "CS101")
                    .unwrap()
                    .with_pattern(SessionPattern::fixed(slot1, slot2).unwrap())
                    .unwrap(),
            ),
            slot1,
            slot2,
            slot3,
        }
    }

    fn theory(setup: &Setup, slot: TimeSlot) -> ScheduledSession {
        ScheduledSession::new(
            setup.course.clone(),
            setup.group.clone(),
            setup.instructor.clone(),
            setup.room.clone(),
            slot,
            SessionType::Theory,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_schedule() {
        let s = common_setup();
        let t: Timetable = [theory(&s, s.slot1), theory(&s, s.slot2)].into_iter().collect();
        assert!(check_instructor_availability(&t).is_empty());
        assert!(check_h1_instructor_conflicts(&t));
    }

    #[test]
    fn test_slot_not_available() {
        let s = common_setup();
        let t: Timetable = [theory(&s, s.slot3)].into_iter().collect();
        let v = check_instructor_availability(&t);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].sessions, vec![0]);
        assert_eq!(
            v[0].kind,
            ViolationKind::Unavailable {
                instructor_id: 1,
                slot: s.slot3
            }
        );
        assert!(!check_h1_instructor_conflicts(&t));
    }

    #[test]
    fn test_slot_conflict_fails_combined_gate() {
        let s = common_setup();
        let t: Timetable = [theory(&s, s.slot1), theory(&s, s.slot1)].into_iter().collect();
        assert!(check_instructor_availability(&t).is_empty());
        assert!(!check_h1_instructor_conflicts(&t));
    }

    #[test]
    fn test_every_unavailable_session_reported() {
        let s = common_setup();
        let t: Timetable = [theory(&s, s.slot3), theory(&s, s.slot1), theory(&s, s.slot3)]
            .into_iter()
            .collect();
        let sessions: Vec<_> = check_instructor_availability(&t)
            .into_iter()
            .flat_map(|v| v.sessions)
            .collect();
        assert_eq!(sessions, vec![0, 2]);
    }
}
