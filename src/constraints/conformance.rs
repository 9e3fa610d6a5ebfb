//! Session pattern conformance (H5).
//!
//! Sessions are grouped per course, across every group that takes it.
//! Each pattern declares the slots it needs, each to be used by exactly one
//! session of the pattern's session type:
//!
//! - `Fixed`: both slots, theory.
//! - `Alternating`: the fixed slot and the alternating slot, theory.
//! - `Lab`: the lab slot, lab.
//!
//! Alternating courses are also checked against their paired course: it
//! must be scheduled, alternate in the same slot on the other parity, and
//! name this course as its own pair. The model carries no week index, so
//! parity legality is checked structurally only.
//!
//! Courses without a pattern are skipped here; the engine rejects them
//! as a precondition before any checker runs.

use std::collections::HashMap;

use super::{
    run_unbounded, HardConstraint, PatternMismatch, Violation, ViolationKind, ViolationSink,
};
use crate::models::{
    AlternatingPattern, Course, CourseId, SessionPattern, Timetable,
};

/// Sessions of one course, in first-appearance order.
struct CourseSessions<'a> {
    course: &'a Course,
    sessions: Vec<usize>,
}

pub(crate) fn collect(timetable: &Timetable, sink: &mut ViolationSink) {
    let mut course_index: HashMap<CourseId, usize> = HashMap::new();
    let mut courses: Vec<CourseSessions<'_>> = Vec::new();

    for (i, session) in timetable.indexed() {
        let course: &Course = &session.course;
        let c = *course_index.entry(course.id).or_insert_with(|| {
            courses.push(CourseSessions {
                course,
                sessions: Vec::new(),
            });
            courses.len() - 1
        });
        courses[c].sessions.push(i);
    }

    for entry in &courses {
        if sink.is_full() {
            return;
        }
        if let Some(pattern) = &entry.course.session_pattern {
            check_slots(timetable, entry, pattern, sink);
        }
    }

    for entry in &courses {
        if sink.is_full() {
            return;
        }
        let Some(alt) = entry
            .course
            .session_pattern
            .as_ref()
            .and_then(SessionPattern::as_alternating)
        else {
            continue;
        };
        let paired = course_index
            .get(&alt.paired_course_id())
            .map(|&c| courses[c].course);
        if let Some(mismatch) = pairing_mismatch(entry.course.id, alt, paired) {
            sink.push(Violation::new(
                HardConstraint::PatternConformance,
                entry.sessions.clone(),
                ViolationKind::Pattern {
                    course_id: entry.course.id,
                    mismatch,
                },
            ));
        }
    }
}

fn check_slots(
    timetable: &Timetable,
    entry: &CourseSessions<'_>,
    pattern: &SessionPattern,
    sink: &mut ViolationSink,
) {
    let expected_type = pattern.session_type();
    let expected = pattern.expected_slots();
    let mut hits: Vec<Vec<usize>> = vec![Vec::new(); expected.len()];

    let report = |sink: &mut ViolationSink, sessions: Vec<usize>, mismatch: PatternMismatch| {
        sink.push(Violation::new(
            HardConstraint::PatternConformance,
            sessions,
            ViolationKind::Pattern {
                course_id: entry.course.id,
                mismatch,
            },
        ));
    };

    for &i in &entry.sessions {
        let session = &timetable.sessions[i];
        if session.session_type != expected_type {
            report(
                sink,
                vec![i],
                PatternMismatch::UnexpectedSessionType(session.session_type),
            );
            continue;
        }
        match expected.iter().position(|slot| *slot == session.slot) {
            Some(p) => hits[p].push(i),
            None => report(sink, vec![i], PatternMismatch::UnexpectedSlot(session.slot)),
        }
    }

    for (slot, used) in expected.into_iter().zip(hits) {
        match used.len() {
            0 => report(sink, entry.sessions.clone(), PatternMismatch::MissingSlot(slot)),
            1 => {}
            count => report(sink, used, PatternMismatch::RepeatedSlot { slot, count }),
        }
    }
}

/// First pairing expectation `alt` fails against its paired course.
fn pairing_mismatch(
    course_id: CourseId,
    alt: &AlternatingPattern,
    paired: Option<&Course>,
) -> Option<PatternMismatch> {
    let paired_id = alt.paired_course_id();
    let Some(paired) = paired else {
        return Some(PatternMismatch::PairedCourseMissing(paired_id));
    };
    let Some(other) = paired
        .session_pattern
        .as_ref()
        .and_then(SessionPattern::as_alternating)
    else {
        return Some(PatternMismatch::PairedCourseNotAlternating(paired_id));
    };
    if other.paired_course_id() != course_id {
        return Some(PatternMismatch::PairedCourseNotReciprocal(paired_id));
    }
    if other.alternating_slot() != alt.alternating_slot() {
        return Some(PatternMismatch::PairedSlotMismatch(paired_id));
    }
    if other.mode() != alt.mode().complement() {
        return Some(PatternMismatch::PairedParityClash(paired_id));
    }
    None
}

/// H5: sessions that do not follow their course's pattern.
pub fn check_pattern_conformance(timetable: &Timetable) -> Vec<Violation> {
    run_unbounded(timetable, collect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Instructor, Room, ScheduledSession, SessionType, StudentGroup, TimeSlot, WeekParity,
    };
    use std::sync::Arc;

    fn slot(day: &str, start: &str, end: &str) -> TimeSlot {
        TimeSlot::parse(day, start, end).unwrap()
    }

    fn course(id: CourseId, pattern: SessionPattern) -> Arc<Course> {
        Arc::new(
            Course::new(id, format!("Course {id}"), format!("C{id}"))
                .unwrap()
                .with_pattern(pattern)
                .unwrap(),
        )
    }

    fn session(course: &Arc<Course>, group: u32, slot: TimeSlot, kind: SessionType) -> ScheduledSession {
        ScheduledSession::new(
            course.clone(),
            Arc::new(StudentGroup::new(group, format!("G{group}"), "CS", 2023)),
            Arc::new(Instructor::new(1, "Dr. Smith").with_available([slot])),
            Arc::new(Room::classroom(1, "Room 101", 40)),
            slot,
            kind,
        )
        .unwrap()
    }

    fn mismatches(t: &Timetable) -> Vec<PatternMismatch> {
        check_pattern_conformance(t)
            .into_iter()
            .map(|v| match v.kind {
                ViolationKind::Pattern { mismatch, .. } => mismatch,
                other => panic!("unexpected violation {other:?}"),
            })
            .collect()
    }

    fn fixed_course() -> (Arc<Course>, TimeSlot, TimeSlot) {
        let a = slot("Saturday", "08:00", "10:00");
        let b = slot("Monday", "10:00", "12:00");
        (course(1, SessionPattern::fixed(a, b).unwrap()), a, b)
    }

    #[test]
    fn test_fixed_conforming() {
        let (c, a, b) = fixed_course();
        let t: Timetable = [
            session(&c, 1, b, SessionType::Theory),
            session(&c, 1, a, SessionType::Theory),
        ]
        .into_iter()
        .collect();
        assert!(check_pattern_conformance(&t).is_empty());
    }

    #[test]
    fn test_fixed_only_one_slot_used() {
        let (c, a, b) = fixed_course();
        let t: Timetable = [session(&c, 1, a, SessionType::Theory)].into_iter().collect();
        assert_eq!(mismatches(&t), vec![PatternMismatch::MissingSlot(b)]);
    }

    #[test]
    fn test_fixed_same_slot_twice() {
        let (c, a, b) = fixed_course();
        let t: Timetable = [
            session(&c, 1, a, SessionType::Theory),
            session(&c, 1, a, SessionType::Theory),
        ]
        .into_iter()
        .collect();
        let found = mismatches(&t);
        assert!(found.contains(&PatternMismatch::MissingSlot(b)));
        assert!(found.contains(&PatternMismatch::RepeatedSlot { slot: a, count: 2 }));
    }

    #[test]
    fn test_fixed_unrelated_slot() {
        let (c, a, _) = fixed_course();
        let other = slot("Thursday", "16:00", "18:00");
        let t: Timetable = [
            session(&c, 1, a, SessionType::Theory),
            session(&c, 1, other, SessionType::Theory),
        ]
        .into_iter()
        .collect();
        let violations = check_pattern_conformance(&t);
        assert!(violations.iter().any(|v| v.sessions == vec![1]
            && v.kind
                == ViolationKind::Pattern {
                    course_id: 1,
                    mismatch: PatternMismatch::UnexpectedSlot(other),
                }));
    }

    #[test]
    fn test_fixed_counted_across_groups() {
        let (c, a, b) = fixed_course();
        let t: Timetable = [
            session(&c, 1, a, SessionType::Theory),
            session(&c, 1, b, SessionType::Theory),
            session(&c, 2, a, SessionType::Theory),
            session(&c, 2, b, SessionType::Theory),
        ]
        .into_iter()
        .collect();
        let violations = check_pattern_conformance(&t);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].sessions, vec![0, 2]);
        assert_eq!(
            mismatches(&t),
            vec![
                PatternMismatch::RepeatedSlot { slot: a, count: 2 },
                PatternMismatch::RepeatedSlot { slot: b, count: 2 },
            ]
        );
    }

    #[test]
    fn test_fixed_split_between_groups() {
        let (c, a, b) = fixed_course();
        let t: Timetable = [
            session(&c, 1, a, SessionType::Theory),
            session(&c, 2, b, SessionType::Theory),
        ]
        .into_iter()
        .collect();
        assert!(check_pattern_conformance(&t).is_empty());
    }

    #[test]
    fn test_lab_conforming_and_wrong_type() {
        let s = slot("Wednesday", "14:00", "16:00");
        let c = course(3, SessionPattern::lab(s));
        let ok: Timetable = [session(&c, 1, s, SessionType::Lab)].into_iter().collect();
        assert!(check_pattern_conformance(&ok).is_empty());

        let wrong: Timetable = [session(&c, 1, s, SessionType::Theory)].into_iter().collect();
        assert_eq!(
            mismatches(&wrong),
            vec![
                PatternMismatch::UnexpectedSessionType(SessionType::Theory),
                PatternMismatch::MissingSlot(s),
            ]
        );
    }

    #[test]
    fn test_lab_twice() {
        let s = slot("Wednesday", "14:00", "16:00");
        let c = course(3, SessionPattern::lab(s));
        let t: Timetable = [
            session(&c, 1, s, SessionType::Lab),
            session(&c, 1, s, SessionType::Lab),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            mismatches(&t),
            vec![PatternMismatch::RepeatedSlot { slot: s, count: 2 }]
        );
    }

    fn alternating_pair(
        second_mode: WeekParity,
        second_pair: CourseId,
    ) -> (Arc<Course>, Arc<Course>, TimeSlot, TimeSlot, TimeSlot) {
        let fixed_a = slot("Sunday", "08:00", "10:00");
        let fixed_b = slot("Monday", "08:00", "10:00");
        let shared = slot("Tuesday", "10:00", "12:00");
        let a = course(
            10,
            SessionPattern::alternating(fixed_a, shared, WeekParity::Odd, 11).unwrap(),
        );
        let b = course(
            11,
            SessionPattern::alternating(fixed_b, shared, second_mode, second_pair).unwrap(),
        );
        (a, b, fixed_a, fixed_b, shared)
    }

    fn pair_timetable(
        a: &Arc<Course>,
        b: &Arc<Course>,
        fixed_a: TimeSlot,
        fixed_b: TimeSlot,
        shared: TimeSlot,
    ) -> Timetable {
        [
            session(a, 1, fixed_a, SessionType::Theory),
            session(a, 1, shared, SessionType::Theory),
            session(b, 1, fixed_b, SessionType::Theory),
            session(b, 1, shared, SessionType::Theory),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_alternating_pair_conforming() {
        let (a, b, fa, fb, shared) = alternating_pair(WeekParity::Even, 10);
        let t = pair_timetable(&a, &b, fa, fb, shared);
        assert!(check_pattern_conformance(&t).is_empty());
    }

    #[test]
    fn test_alternating_parity_clash() {
        let (a, b, fa, fb, shared) = alternating_pair(WeekParity::Odd, 10);
        let t = pair_timetable(&a, &b, fa, fb, shared);
        let found = mismatches(&t);
        assert_eq!(
            found,
            vec![
                PatternMismatch::PairedParityClash(11),
                PatternMismatch::PairedParityClash(10),
            ]
        );
    }

    #[test]
    fn test_alternating_not_reciprocal() {
        let (a, b, fa, fb, shared) = alternating_pair(WeekParity::Even, 99);
        let t = pair_timetable(&a, &b, fa, fb, shared);
        let found = mismatches(&t);
        assert!(found.contains(&PatternMismatch::PairedCourseNotReciprocal(11)));
        assert!(found.contains(&PatternMismatch::PairedCourseMissing(99)));
    }

    #[test]
    fn test_alternating_paired_course_missing() {
        let (a, _, fa, _, shared) = alternating_pair(WeekParity::Even, 10);
        let t: Timetable = [
            session(&a, 1, fa, SessionType::Theory),
            session(&a, 1, shared, SessionType::Theory),
        ]
        .into_iter()
        .collect();
        let violations = check_pattern_conformance(&t);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].sessions, vec![0, 1]);
        assert_eq!(
            violations[0].kind,
            ViolationKind::Pattern {
                course_id: 10,
                mismatch: PatternMismatch::PairedCourseMissing(11),
            }
        );
    }

    #[test]
    fn test_alternating_paired_with_fixed_course() {
        let fixed_a = slot("Sunday", "08:00", "10:00");
        let shared = slot("Tuesday", "10:00", "12:00");
        let a = course(
            10,
            SessionPattern::alternating(fixed_a, shared, WeekParity::Odd, 1).unwrap(),
        );
        let (f, x, y) = fixed_course();
        let t: Timetable = [
            session(&a, 1, fixed_a, SessionType::Theory),
            session(&a, 1, shared, SessionType::Theory),
            session(&f, 1, x, SessionType::Theory),
            session(&f, 1, y, SessionType::Theory),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            mismatches(&t),
            vec![PatternMismatch::PairedCourseNotAlternating(1)]
        );
    }

    #[test]
    fn test_alternating_paired_slot_mismatch() {
        let shared = slot("Tuesday", "10:00", "12:00");
        let elsewhere = slot("Thursday", "10:00", "12:00");
        let fa = slot("Sunday", "08:00", "10:00");
        let fb = slot("Monday", "08:00", "10:00");
        let a = course(10, SessionPattern::alternating(fa, shared, WeekParity::Odd, 11).unwrap());
        let b = course(11, SessionPattern::alternating(fb, elsewhere, WeekParity::Even, 10).unwrap());
        let t: Timetable = [
            session(&a, 1, fa, SessionType::Theory),
            session(&a, 1, shared, SessionType::Theory),
            session(&b, 1, fb, SessionType::Theory),
            session(&b, 1, elsewhere, SessionType::Theory),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            mismatches(&t),
            vec![
                PatternMismatch::PairedSlotMismatch(11),
                PatternMismatch::PairedSlotMismatch(10),
            ]
        );
    }
}
