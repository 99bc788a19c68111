use thiserror::Error;
use twine_solvers::equation::bisection;

use crate::support::constraint::{Constrained, Constraint, ConstraintError, StrictlyPositive};

/// Errors that can occur while solving for a BIOSCREEN-AT plume length.
#[derive(Debug, Error)]
pub enum TransportError {
    /// A documented precondition on an input parameter is violated.
    #[error("invalid parameter `{name}`")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,

        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },

    /// Elapsed time, retardation, or a retarded dispersion coefficient is
    /// zero, negative, or not finite.
    ///
    /// Checked before integration so degenerate inputs never reach the
    /// quadrature.
    #[error("degenerate transport quantity `{name}` = {value}")]
    NumericDomain {
        /// Name of the degenerate quantity.
        name: &'static str,

        /// Its value.
        value: f64,
    },

    /// A concentration evaluation produced `NaN` or an infinity.
    #[error("concentration is not finite at x = {x}")]
    NonFinite {
        /// Downgradient distance of the failed evaluation.
        x: f64,
    },

    /// The bisection solver used by the refined search failed.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The refined search reached its iteration limit.
    #[error("threshold refinement hit iteration limit: residual={residual}")]
    RefinementStalled {
        /// Best concentration residual (`C(x) − Cthres`) achieved.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}

impl TransportError {
    /// Checks a raw input against constraint `C`.
    pub(super) fn require<C: Constraint<f64>>(name: &'static str, value: f64) -> Result<f64, Self> {
        Constrained::<f64, C>::new(value)
            .map(Constrained::into_inner)
            .map_err(|source| Self::InvalidParameter { name, source })
    }

    /// Checks that a quantity used as a divisor or time scale is strictly
    /// positive and finite.
    pub(super) fn require_domain(name: &'static str, value: f64) -> Result<f64, Self> {
        match StrictlyPositive::new(value) {
            Ok(checked) if value.is_finite() => Ok(checked.into_inner()),
            _ => Err(Self::NumericDomain { name, value }),
        }
    }
}
