//! Session patterns.
//!
//! A course declares the weekly shape its sessions must follow. The shape
//! is a closed set of variants, each carrying exactly the slots it needs:
//!
//! | Variant | Slots | Session type |
//! |---------|-------|--------------|
//! | [`FixedPattern`] | two, every week | theory |
//! | [`AlternatingPattern`] | one every week + one on odd or even weeks | theory |
//! | [`LabPattern`] | one, every week | lab |

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{CourseId, SessionType, TimeSlot};
use crate::error::{ModelError, Result};

/// Week parity for alternating sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekParity {
    Odd,
    Even,
}

impl WeekParity {
    /// The other parity.
    #[inline]
    pub fn complement(self) -> Self {
        match self {
            Self::Odd => Self::Even,
            Self::Even => Self::Odd,
        }
    }
}

impl fmt::Display for WeekParity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Odd => "odd",
            Self::Even => "even",
        })
    }
}

/// Two distinct weekly slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFixedPattern")]
pub struct FixedPattern {
    slots: [TimeSlot; 2],
}

#[derive(Deserialize)]
struct RawFixedPattern {
    slots: [TimeSlot; 2],
}

impl TryFrom<RawFixedPattern> for FixedPattern {
    type Error = ModelError;

    fn try_from(raw: RawFixedPattern) -> Result<Self> {
        let [a, b] = raw.slots;
        Self::new(a, b)
    }
}

impl FixedPattern {
    pub fn new(first: TimeSlot, second: TimeSlot) -> Result<Self> {
        if first == second {
            return Err(ModelError::DuplicatePatternSlot);
        }
        Ok(Self {
            slots: [first, second],
        })
    }

    pub fn slots(&self) -> &[TimeSlot; 2] {
        &self.slots
    }
}

/// A slot held every week plus a slot held on alternate weeks.
///
/// The alternating slot is shared with `paired_course_id`, which meets
/// there on the complementary parity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAlternatingPattern")]
pub struct AlternatingPattern {
    fixed_slot: TimeSlot,
    alternating_slot: TimeSlot,
    alternating_mode: WeekParity,
    paired_course_id: CourseId,
}

#[derive(Deserialize)]
struct RawAlternatingPattern {
    fixed_slot: TimeSlot,
    alternating_slot: TimeSlot,
    alternating_mode: WeekParity,
    paired_course_id: CourseId,
}

impl TryFrom<RawAlternatingPattern> for AlternatingPattern {
    type Error = ModelError;

    fn try_from(raw: RawAlternatingPattern) -> Result<Self> {
        Self::new(
            raw.fixed_slot,
            raw.alternating_slot,
            raw.alternating_mode,
            raw.paired_course_id,
        )
    }
}

impl AlternatingPattern {
    pub fn new(
        fixed_slot: TimeSlot,
        alternating_slot: TimeSlot,
        mode: WeekParity,
        paired_course_id: CourseId,
    ) -> Result<Self> {
        if fixed_slot == alternating_slot {
            return Err(ModelError::DuplicatePatternSlot);
        }
        Ok(Self {
            fixed_slot,
            alternating_slot,
            alternating_mode: mode,
            paired_course_id,
        })
    }

    pub fn fixed_slot(&self) -> &TimeSlot {
        &self.fixed_slot
    }

    pub fn alternating_slot(&self) -> &TimeSlot {
        &self.alternating_slot
    }

    pub fn mode(&self) -> WeekParity {
        self.alternating_mode
    }

    pub fn paired_course_id(&self) -> CourseId {
        self.paired_course_id
    }
}

/// A single weekly lab slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabPattern {
    slot: TimeSlot,
}

impl LabPattern {
    pub fn new(slot: TimeSlot) -> Self {
        Self { slot }
    }

    pub fn slot(&self) -> &TimeSlot {
        &self.slot
    }
}

/// Declared weekly session shape of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SessionPattern {
    Fixed(FixedPattern),
    Alternating(AlternatingPattern),
    Lab(LabPattern),
}

impl SessionPattern {
    /// Creates a fixed pattern from two distinct slots.
    pub fn fixed(first: TimeSlot, second: TimeSlot) -> Result<Self> {
        FixedPattern::new(first, second).map(Self::Fixed)
    }

    /// Creates an alternating pattern.
    pub fn alternating(
        fixed_slot: TimeSlot,
        alternating_slot: TimeSlot,
        mode: WeekParity,
        paired_course_id: CourseId,
    ) -> Result<Self> {
        AlternatingPattern::new(fixed_slot, alternating_slot, mode, paired_course_id)
            .map(Self::Alternating)
    }

    /// Creates a lab pattern.
    pub fn lab(slot: TimeSlot) -> Self {
        Self::Lab(LabPattern::new(slot))
    }

    /// Session type the pattern's sessions must carry.
    pub fn session_type(&self) -> SessionType {
        match self {
            Self::Fixed(_) | Self::Alternating(_) => SessionType::Theory,
            Self::Lab(_) => SessionType::Lab,
        }
    }

    /// Slots that must each be used exactly once per week template.
    pub fn expected_slots(&self) -> Vec<TimeSlot> {
        match self {
            Self::Fixed(p) => p.slots.to_vec(),
            Self::Alternating(p) => vec![p.fixed_slot, p.alternating_slot],
            Self::Lab(p) => vec![p.slot],
        }
    }

    /// Alternating variant, if any.
    pub fn as_alternating(&self) -> Option<&AlternatingPattern> {
        match self {
            Self::Alternating(p) => Some(p),
            _ => None,
        }
    }

    /// Tag name used in serialized form.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Fixed(_) => "fixed",
            Self::Alternating(_) => "alternating",
            Self::Lab(_) => "lab",
        }
    }
}
