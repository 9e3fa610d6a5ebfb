//! Validation verdicts and per-constraint counts.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::constraints::{HardConstraint, Violation};

/// Outcome of validating one timetable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Verdict {
    /// Every enabled hard constraint holds.
    Satisfied,
    /// At least one hard constraint is broken.
    Violated(Vec<Violation>),
}

impl Verdict {
    /// Builds a verdict from collected violations.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            Self::Satisfied
        } else {
            Self::Violated(violations)
        }
    }

    #[inline]
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied)
    }

    /// Violations (empty when satisfied).
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Satisfied => &[],
            Self::Violated(v) => v,
        }
    }

    /// Whether `constraint` has at least one violation.
    pub fn violates(&self, constraint: HardConstraint) -> bool {
        self.violations().iter().any(|v| v.constraint == constraint)
    }

    /// Violations per constraint.
    pub fn counts(&self) -> ViolationCounts {
        let mut counts = BTreeMap::new();
        for v in self.violations() {
            *counts.entry(v.constraint).or_insert(0) += 1;
        }
        ViolationCounts { counts }
    }
}

/// Number of violations per hard constraint.
///
/// Lets a search treat hard constraints as graded penalties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViolationCounts {
    counts: BTreeMap<HardConstraint, usize>,
}

impl ViolationCounts {
    /// Count for one constraint (0 if none).
    pub fn get(&self, constraint: HardConstraint) -> usize {
        self.counts.get(&constraint).copied().unwrap_or(0)
    }

    /// Total violations.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Non-zero counts in constraint order.
    pub fn iter(&self) -> impl Iterator<Item = (HardConstraint, usize)> + '_ {
        self.counts.iter().map(|(c, n)| (*c, *n))
    }

    /// Weighted penalty: `sum(weight(c) * count(c))`.
    ///
    /// ```
    /// use u_timetable::engine::Verdict;
    ///
    /// let counts = Verdict::Satisfied.counts();
    /// assert_eq!(counts.penalty(|_| 1000.0), 0.0);
    /// ```
    pub fn penalty(&self, weight: impl Fn(HardConstraint) -> f64) -> f64 {
        self.iter().map(|(c, n)| weight(c) * n as f64).sum()
    }
}
