use std::fmt;

use crate::error::{ReqverError, Result};
use crate::version::GoVersion;

/// Inclusive bounds a go version has to fall within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Requirement {
    pub minimum: Option<GoVersion>,
    pub maximum: Option<GoVersion>,
}

/// Outcome of checking a version against a [`Requirement`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementStatus {
    Satisfied,
    TooOld { minimum: GoVersion },
    TooNew { maximum: GoVersion },
    /// The checked version or one of the bounds has a negative component
    Invalid,
}

impl Requirement {
    /// Requirement with only a lower bound
    pub fn at_least(minimum: GoVersion) -> Self {
        Requirement {
            minimum: Some(minimum),
            maximum: None,
        }
    }

    /// Requirement with only an upper bound
    pub fn at_most(maximum: GoVersion) -> Self {
        Requirement {
            minimum: None,
            maximum: Some(maximum),
        }
    }

    pub fn with_minimum(mut self, minimum: GoVersion) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn with_maximum(mut self, maximum: GoVersion) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// True when neither bound is set
    pub fn is_unbounded(&self) -> bool {
        self.minimum.is_none() && self.maximum.is_none()
    }

    /// Rejects invalid bounds and a minimum above the maximum
    pub fn validate(&self) -> Result<()> {
        for (name, bound) in [("minimum", self.minimum), ("maximum", self.maximum)] {
            if let Some(bound) = bound {
                if !bound.is_valid() {
                    return Err(ReqverError::config(format!(
                        "{} version {} has a negative component",
                        name,
                        bound.short()
                    )));
                }
            }
        }

        if let (Some(minimum), Some(maximum)) = (self.minimum, self.maximum) {
            if minimum.is_higher(&maximum) {
                return Err(ReqverError::config(format!(
                    "minimum {} is higher than maximum {}",
                    minimum.short(),
                    maximum.short()
                )));
            }
        }

        Ok(())
    }

    /// Checks `actual` against both bounds, lower bound first
    pub fn check(&self, actual: &GoVersion) -> RequirementStatus {
        let bounds_valid = [self.minimum, self.maximum]
            .iter()
            .flatten()
            .all(GoVersion::is_valid);
        if !actual.is_valid() || !bounds_valid {
            return RequirementStatus::Invalid;
        }

        if let Some(minimum) = self.minimum {
            if !actual.is_higher_or_equal(&minimum) {
                return RequirementStatus::TooOld { minimum };
            }
        }

        if let Some(maximum) = self.maximum {
            if !actual.is_smaller_or_equal(&maximum) {
                return RequirementStatus::TooNew { maximum };
            }
        }

        RequirementStatus::Satisfied
    }

    /// Shorthand for `check(actual) == Satisfied`
    pub fn is_satisfied_by(&self, actual: &GoVersion) -> bool {
        self.check(actual).is_satisfied()
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.minimum, self.maximum) {
            (Some(min), Some(max)) => write!(f, ">= {}, <= {}", min.short(), max.short()),
            (Some(min), None) => write!(f, ">= {}", min.short()),
            (None, Some(max)) => write!(f, "<= {}", max.short()),
            (None, None) => write!(f, "any version"),
        }
    }
}

impl RequirementStatus {
    pub fn is_satisfied(&self) -> bool {
        matches!(self, RequirementStatus::Satisfied)
    }
}

impl fmt::Display for RequirementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequirementStatus::Satisfied => write!(f, "requirement satisfied"),
            RequirementStatus::TooOld { minimum } => {
                write!(f, "version is older than required minimum {}", minimum.short())
            }
            RequirementStatus::TooNew { maximum } => {
                write!(f, "version is newer than allowed maximum {}", maximum.short())
            }
            RequirementStatus::Invalid => write!(f, "version or bound has a negative component"),
        }
    }
}
