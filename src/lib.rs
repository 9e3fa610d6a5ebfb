//! University timetable validation for the U-Engine ecosystem.
//!
//! Decides whether a candidate timetable satisfies the hard scheduling
//! constraints, and if not, which rule and which sessions break it. Built
//! to be called once per candidate per generation inside a search loop:
//! pure, linear-time, and reproducible over unordered sessions.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `TimeSlot`, `SessionPattern`, `Course`,
//!   `Instructor`, `Room`, `StudentGroup`, `ScheduledSession`, `Timetable`
//! - **`constraints`**: Hard-constraint checkers (H1-H6)
//! - **`validation`**: Precondition checks (caller bugs, not schedule defects)
//! - **`engine`**: `Validator` aggregation, verdicts, configuration
//! - **`error`**: Error types
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use u_timetable::engine::validate;
//! use u_timetable::models::*;
//!
//! let s1 = TimeSlot::parse("Saturday", "08:00", "10:00").unwrap();
//! let s2 = TimeSlot::parse("Monday", "10:00", "12:00").unwrap();
//! let course = Arc::new(
//!     Course::new(1, "Algorithms", "CS101")
//!         .unwrap()
//!         .with_pattern(SessionPattern::fixed(s1, s2).unwrap())
//!         .unwrap(),
//! );
//! let group = Arc::new(StudentGroup::new(1, "CS-A", "CS", 2023));
//! let instructor = Arc::new(Instructor::new(1, "Dr. Smith").with_available([s1, s2]));
//! let room = Arc::new(Room::classroom(1, "Room 101", 40));
//!
//! let timetable: Timetable = [s1, s2]
//!     .into_iter()
//!     .map(|slot| {
//!         ScheduledSession::new(
//!             course.clone(),
//!             group.clone(),
//!             instructor.clone(),
//!             room.clone(),
//!             slot,
//!             SessionType::Theory,
//!         )
//!         .unwrap()
//!     })
//!     .collect();
//!
//! assert!(validate(&timetable).unwrap().is_satisfied());
//! ```
//!
//! # Architecture
//!
//! This crate sits at Layer 3 (Frameworks) in the U-Engine ecosystem,
//! beside `u-schedule`. Candidate generation belongs to the optimizer
//! (e.g. `u-metaheur`), which consumes verdicts as fitness penalties.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"

pub mod constraints;
pub mod engine;
pub mod error;
pub mod models;
pub mod validation;

pub use constraints::{check_h1_instructor_conflicts, HardConstraint, Violation};
pub use engine::{is_feasible, validate, Validator, ValidatorConfig, Verdict};
pub use error::{ModelError, PreconditionViolation};
