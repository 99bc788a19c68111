//! Bisection refinement of the threshold crossing inside one marching step.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use twine_solvers::equation::bisection;

use super::{ConcentrationField, SearchConfig, TransportError};

/// A single centerline evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Sample {
    pub(super) x: f64,
    pub(super) concentration: f64,
}

/// Model adapter exposing the centerline concentration as a function of `x`.
pub(super) struct CenterlineModel<'a> {
    field: &'a ConcentrationField,
}

impl<'a> CenterlineModel<'a> {
    pub(super) fn new(field: &'a ConcentrationField) -> Self {
        Self { field }
    }
}

impl Model for CenterlineModel<'_> {
    type Input = f64;
    type Output = Sample;
    type Error = TransportError;

    fn call(&self, x: &Self::Input) -> Result<Self::Output, Self::Error> {
        let concentration = self.field.centerline(*x);
        if !concentration.is_finite() {
            return Err(TransportError::NonFinite { x: *x });
        }
        Ok(Sample {
            x: *x,
            concentration,
        })
    }
}

/// Residual `C(x) − Cthres`.
pub(super) struct ThresholdProblem {
    threshold: f64,
}

impl ThresholdProblem {
    pub(super) fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl EquationProblem<1> for ThresholdProblem {
    type Input = f64;
    type Output = Sample;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.concentration - self.threshold])
    }
}

/// Locates the distance in `bracket` where the centerline concentration
/// falls to `threshold`.
///
/// The concentration must be at or above the threshold at `bracket[0]` and
/// below it at `bracket[1]`.
///
/// # Errors
///
/// Returns [`TransportError::Bisection`] if the solver rejects the bracket or
/// an evaluation fails, and [`TransportError::RefinementStalled`] if it does
/// not converge.
pub(super) fn refine(
    field: &ConcentrationField,
    threshold: f64,
    bracket: [f64; 2],
    config: &SearchConfig,
) -> Result<f64, TransportError> {
    let model = CenterlineModel::new(field);
    let problem = ThresholdProblem::new(threshold);

    let solution = bisection::solve(
        &model,
        &problem,
        bracket,
        &config.bisection(),
        |_event: &bisection::Event<'_, _, _>| None,
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(TransportError::RefinementStalled {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output.x)
}
