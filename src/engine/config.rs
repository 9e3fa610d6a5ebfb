//! Validator configuration.
//!
//! [`ValidatorConfig`] selects which hard constraints run and how much
//! of the violation report is produced.

use crate::constraints::HardConstraint;
use crate::error::ConfigError;

/// How much of the report to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Report every violation of every enabled constraint.
    #[default]
    Full,
    /// Stop at the first violation. For use as a boolean fitness gate.
    Fast,
}

/// Configuration for the [`Validator`](super::Validator).
///
/// # Defaults
///
/// ```
/// use u_timetable::engine::{ValidationMode, ValidatorConfig};
/// use u_timetable::constraints::HardConstraint;
///
/// let config = ValidatorConfig::default();
/// assert_eq!(config.mode, ValidationMode::Full);
/// assert_eq!(config.constraints, HardConstraint::CORE.to_vec());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_timetable::engine::ValidatorConfig;
/// use u_timetable::constraints::HardConstraint;
///
/// let config = ValidatorConfig::default()
///     .fast()
///     .with_constraint(HardConstraint::RoomSuitability);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Report mode.
    pub mode: ValidationMode,

    /// Constraints to check, in evaluation order.
    ///
    /// In fast mode the order decides which violation is reported first,
    /// so cheap constraints belong at the front.
    pub constraints: Vec<HardConstraint>,

    /// Whether batch validation may use rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::Full,
            constraints: HardConstraint::CORE.to_vec(),
            parallel: true,
        }
    }
}

impl ValidatorConfig {
    /// Sets the report mode.
    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Shorthand for [`ValidationMode::Fast`].
    pub fn fast(self) -> Self {
        self.with_mode(ValidationMode::Fast)
    }

    /// Replaces the constraint list.
    pub fn with_constraints(mut self, constraints: impl IntoIterator<Item = HardConstraint>) -> Self {
        self.constraints = constraints.into_iter().collect();
        self
    }

    /// Enables one more constraint (no-op if already enabled).
    pub fn with_constraint(mut self, constraint: HardConstraint) -> Self {
        if !self.constraints.contains(&constraint) {
            self.constraints.push(constraint);
        }
        self
    }

    /// Enables or disables rayon for batch validation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.constraints.is_empty() {
            return Err(ConfigError("at least one constraint must be enabled".into()));
        }
        for (i, c) in self.constraints.iter().enumerate() {
            if self.constraints[..i].contains(c) {
                return Err(ConfigError(format!("constraint {c} listed more than once")));
            }
        }
        Ok(())
    }
}
