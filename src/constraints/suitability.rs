//! Room suitability (H6, opt-in).
//!
//! Lab rooms are reserved for lab sessions; lab sessions need a lab room.

use super::{run_unbounded, HardConstraint, Violation, ViolationKind, ViolationSink};
use crate::models::{SessionType, Timetable};

pub(crate) fn collect(timetable: &Timetable, sink: &mut ViolationSink) {
    for (i, session) in timetable.indexed() {
        if sink.is_full() {
            return;
        }
        let needs_lab = session.session_type == SessionType::Lab;
        if session.room.is_lab != needs_lab {
            sink.push(Violation::new(
                HardConstraint::RoomSuitability,
                vec![i],
                ViolationKind::RoomMismatch {
                    room_id: session.room.id,
                    session_type: session.session_type,
                },
            ));
        }
    }
}

/// H6: sessions held in a room of the wrong kind.
pub fn check_room_suitability(timetable: &Timetable) -> Vec<Violation> {
    run_unbounded(timetable, collect)
}
