//! Course model.
//!
//! A course carries its identity and the session pattern its sessions
//! must follow. A course without a pattern is known to the catalog but
//! not yet schedulable.

use serde::{Deserialize, Serialize};

use super::{CourseId, InstructorId, SessionPattern};
use crate::error::{ModelError, Result};

/// A course in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCourse")]
pub struct Course {
    /// Unique course identifier.
    pub id: CourseId,
    /// Course title (e.g., "Algorithms").
    pub name: String,
    /// Catalog code (e.g., "CS101").
    pub code: String,
    /// Declared weekly shape. `None` = not schedulable yet.
    pub session_pattern: Option<SessionPattern>,
}

#[derive(Deserialize)]
struct RawCourse {
    id: CourseId,
    name: String,
    code: String,
    #[serde(default)]
    session_pattern: Option<SessionPattern>,
}

impl TryFrom<RawCourse> for Course {
    type Error = ModelError;

    fn try_from(raw: RawCourse) -> Result<Self> {
        let course = Self::new(raw.id, raw.name, raw.code)?;
        match raw.session_pattern {
            Some(pattern) => course.with_pattern(pattern),
            None => Ok(course),
        }
    }
}

impl Course {
    /// Creates a course without a session pattern.
    pub fn new(id: CourseId, name: impl Into<String>, code: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let code = code.into();
        if name.trim().is_empty() {
            return Err(ModelError::EmptyField("name"));
        }
        if code.trim().is_empty() {
            return Err(ModelError::EmptyField("code"));
        }
        Ok(Self {
            id,
            name,
            code,
            session_pattern: None,
        })
    }

    /// Attaches a session pattern.
    ///
    /// Rejects an alternating pattern paired with this very course.
    pub fn with_pattern(mut self, pattern: SessionPattern) -> Result<Self> {
        if let Some(alt) = pattern.as_alternating() {
            if alt.paired_course_id() == self.id {
                return Err(ModelError::SelfPairedCourse(self.id));
            }
        }
        self.session_pattern = Some(pattern);
        Ok(self)
    }

    /// Whether sessions can be scheduled for this course.
    #[inline]
    pub fn is_schedulable(&self) -> bool {
        self.session_pattern.is_some()
    }
}

/// An offering of a course by one instructor to one sub-group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCourseOffering")]
pub struct CourseOffering {
    pub course_id: CourseId,
    pub instructor_id: InstructorId,
    /// Section number within the course (1-based).
    pub sub_group: u32,
}

#[derive(Deserialize)]
struct RawCourseOffering {
    course_id: CourseId,
    instructor_id: InstructorId,
    #[serde(default = "default_sub_group")]
    sub_group: u32,
}

fn default_sub_group() -> u32 {
    1
}

impl TryFrom<RawCourseOffering> for CourseOffering {
    type Error = ModelError;

    fn try_from(raw: RawCourseOffering) -> Result<Self> {
        Self::new(raw.course_id, raw.instructor_id).with_sub_group(raw.sub_group)
    }
}

impl CourseOffering {
    /// Creates an offering for sub-group 1.
    pub fn new(course_id: CourseId, instructor_id: InstructorId) -> Self {
        Self {
            course_id,
            instructor_id,
            sub_group: 1,
        }
    }

    /// Sets the sub-group (must be at least 1).
    pub fn with_sub_group(mut self, sub_group: u32) -> Result<Self> {
        if sub_group == 0 {
            return Err(ModelError::InvalidSubGroup(sub_group));
        }
        self.sub_group = sub_group;
        Ok(self)
    }
}
