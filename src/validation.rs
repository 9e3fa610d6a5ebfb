//! Precondition checks for timetables.
//!
//! Detects timetables the construction layer should never have produced.
//! These are caller bugs, not schedule defects, so they abort validation
//! instead of becoming constraint violations:
//! - Sessions for a course without a session pattern
//! - Alternating courses paired with themselves
//! - One id bound to two different course/instructor/room/group values
//!
//! Entities are compared by id everywhere else in the engine, which is
//! only sound when each id names exactly one value.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{EntityKind, PreconditionViolation};
use crate::models::Timetable;

/// Checks that a timetable is fit for validation.
///
/// # Returns
/// `Ok(())` if all preconditions hold, otherwise the first violation found
/// in session order.
pub fn check_preconditions(timetable: &Timetable) -> Result<(), PreconditionViolation> {
    let mut courses = HashMap::new();
    let mut instructors = HashMap::new();
    let mut rooms = HashMap::new();
    let mut groups = HashMap::new();

    for (i, session) in timetable.indexed() {
        let course = &session.course;
        let Some(pattern) = &course.session_pattern else {
            return Err(PreconditionViolation::UnschedulableCourse {
                session: i,
                course_id: course.id,
            });
        };
        if pattern
            .as_alternating()
            .is_some_and(|alt| alt.paired_course_id() == course.id)
        {
            return Err(PreconditionViolation::SelfPairedCourse {
                course_id: course.id,
            });
        }

        register(&mut courses, course.id, course, EntityKind::Course)?;
        register(
            &mut instructors,
            session.instructor.id,
            &session.instructor,
            EntityKind::Instructor,
        )?;
        register(&mut rooms, session.room.id, &session.room, EntityKind::Room)?;
        register(&mut groups, session.group.id, &session.group, EntityKind::Group)?;
    }

    Ok(())
}

/// Records `value` under `id`, failing if `id` is already bound to a
/// different value. Shared `Arc`s are accepted without a deep compare.
fn register<'a, T: PartialEq>(
    seen: &mut HashMap<u32, &'a Arc<T>>,
    id: u32,
    value: &'a Arc<T>,
    entity: EntityKind,
) -> Result<(), PreconditionViolation> {
    match seen.get(&id) {
        Some(existing) if !Arc::ptr_eq(existing, value) && ***existing != **value => {
            Err(PreconditionViolation::ConflictingDefinition { entity, id })
        }
        Some(_) => Ok(()),
        None => {
            seen.insert(id, value);
            Ok(())
        }
    }
}
