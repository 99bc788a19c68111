use thiserror::Error;

use crate::support::constraint::{Constrained, Constraint, ConstraintError};

/// Errors returned by the closed-form models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A documented precondition is violated.
    ///
    /// Raised before any computation; no partial result is produced.
    #[error("invalid parameter `{name}`")]
    InvalidParameter {
        /// Name of the offending parameter or derived argument.
        name: &'static str,

        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },
}

impl ModelError {
    /// Name of the parameter that failed validation.
    #[must_use]
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidParameter { name, .. } => name,
        }
    }

    /// Checks `value` against constraint `C`, tagging failures with `name`.
    pub(super) fn require<C: Constraint<f64>>(name: &'static str, value: f64) -> Result<f64, Self> {
        Constrained::<f64, C>::new(value)
            .map(Constrained::into_inner)
            .map_err(|source| Self::InvalidParameter { name, source })
    }
}
