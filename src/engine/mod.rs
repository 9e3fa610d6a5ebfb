//! Constraint aggregation.
//!
//! [`Validator`] runs the enabled hard constraints over a timetable and
//! folds their findings into a [`Verdict`]. Validation is a pure function
//! of the timetable: no state survives a call, so one validator can serve
//! any number of candidates, from any number of threads.
//!
//! # Pipeline
//!
//! 1. Preconditions ([`check_preconditions`]); failure aborts the call.
//! 2. Each enabled constraint, in configured order.
//! 3. Full mode collects everything; fast mode stops at the first violation.

mod config;
mod verdict;

pub use config::{ValidationMode, ValidatorConfig};
pub use verdict::{Verdict, ViolationCounts};

use tracing::{debug, trace, warn};

use crate::constraints::ViolationSink;
use crate::error::{ConfigError, PreconditionViolation};
use crate::models::Timetable;
use crate::validation::check_preconditions;

/// Hard-constraint validator.
///
/// # Usage
///
/// ```
/// use u_timetable::engine::{Validator, ValidatorConfig};
/// use u_timetable::models::Timetable;
///
/// let validator = Validator::new(ValidatorConfig::default()).unwrap();
/// let verdict = validator.validate(&Timetable::new()).unwrap();
/// assert!(verdict.is_satisfied());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Creates a validator, rejecting an invalid configuration.
    pub fn new(config: ValidatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates one timetable in the configured mode.
    pub fn validate(&self, timetable: &Timetable) -> Result<Verdict, PreconditionViolation> {
        let limit = match self.config.mode {
            ValidationMode::Full => None,
            ValidationMode::Fast => Some(1),
        };
        self.run(timetable, limit)
    }

    /// Whether the timetable satisfies every enabled constraint.
    ///
    /// Always short-circuits on the first violation, whatever the mode.
    pub fn is_feasible(&self, timetable: &Timetable) -> Result<bool, PreconditionViolation> {
        self.run(timetable, Some(1)).map(|v| v.is_satisfied())
    }

    /// Validates independent candidates.
    ///
    /// Results are in candidate order. With the `parallel` feature and
    /// `config.parallel` set, candidates are validated on the rayon pool.
    pub fn validate_all(
        &self,
        candidates: &[Timetable],
    ) -> Vec<Result<Verdict, PreconditionViolation>> {
        let results: Vec<_> = self.map_candidates(candidates);
        let feasible = results
            .iter()
            .filter(|r| matches!(r, Ok(v) if v.is_satisfied()))
            .count();
        let rejected = results.iter().filter(|r| r.is_err()).count();
        debug!(
            candidates = candidates.len(),
            feasible,
            rejected,
            "batch validated"
        );
        results
    }

    #[cfg(feature = "parallel")]
    fn map_candidates(
        &self,
        candidates: &[Timetable],
    ) -> Vec<Result<Verdict, PreconditionViolation>> {
        use rayon::prelude::*;

        if self.config.parallel {
            candidates.par_iter().map(|t| self.validate(t)).collect()
        } else {
            candidates.iter().map(|t| self.validate(t)).collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn map_candidates(
        &self,
        candidates: &[Timetable],
    ) -> Vec<Result<Verdict, PreconditionViolation>> {
        candidates.iter().map(|t| self.validate(t)).collect()
    }

    fn run(
        &self,
        timetable: &Timetable,
        limit: Option<usize>,
    ) -> Result<Verdict, PreconditionViolation> {
        if let Err(e) = check_preconditions(timetable) {
            warn!(error = %e, sessions = timetable.len(), "timetable rejected before validation");
            return Err(e);
        }

        let mut sink = match limit {
            Some(n) => ViolationSink::bounded(n),
            None => ViolationSink::unbounded(),
        };
        for &constraint in &self.config.constraints {
            if sink.is_full() {
                break;
            }
            constraint.check(timetable, &mut sink);
        }

        let violations = sink.into_vec();
        for v in &violations {
            trace!(constraint = v.constraint.code(), sessions = ?v.sessions, "{v}");
        }
        debug!(
            sessions = timetable.len(),
            violations = violations.len(),
            short_circuit = limit.is_some(),
            "timetable validated"
        );
        Ok(Verdict::from_violations(violations))
    }
}

/// Validates with the default configuration (H1-H5, full report).
pub fn validate(timetable: &Timetable) -> Result<Verdict, PreconditionViolation> {
    Validator::default().validate(timetable)
}

/// Boolean gate with the default constraints, stopping at the first violation.
pub fn is_feasible(timetable: &Timetable) -> Result<bool, PreconditionViolation> {
    Validator::default().is_feasible(timetable)
}
