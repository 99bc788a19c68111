//! Batch evaluation of a [`Model`] over ordered inputs.
//!
//! Every function here preserves input order and has no partial-success mode:
//! the first failing row (by index) aborts the batch and is reported as a
//! [`BatchError`].
//!
//! - [`compute_multiple`]: sequential evaluation.
//! - [`compute_multiple_par`]: parallel evaluation with identical results.
//! - [`sweep`]: varies a single parameter of a base input.
//!
//! # Example
//!
//! ```
//! use plume_models::models::plume::closed_form::{Liedl, LiedlInput};
//! use plume_models::support::batch::compute_multiple;
//! use twine_core::Model;
//!
//! let rows: Vec<LiedlInput> = vec![
//!     [3.5, 0.001, 3.5, 8.0, 5.0].into(),
//!     [2.0, 0.002, 3.5, 8.0, 5.0].into(),
//! ];
//!
//! let lengths = compute_multiple(&Liedl, &rows).unwrap();
//! assert_eq!(lengths.len(), rows.len());
//! assert_eq!(lengths[1], Liedl.call(&rows[1]).unwrap());
//! ```

mod sweep;

pub use sweep::{SweepPoint, sweep, sweep_values_around};

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};
use twine_core::Model;

/// A batch aborted at `row`.
#[derive(Debug, Error)]
#[error("batch aborted at row {row}")]
pub struct BatchError<E>
where
    E: std::error::Error + 'static,
{
    /// Zero-based index of the first failing row.
    pub row: usize,

    /// Error returned by the model for that row.
    #[source]
    pub source: E,
}

/// Evaluates `model` for every row, in order.
///
/// On success, `results[i]` equals `model.call(&rows[i])` for every `i`.
///
/// # Errors
///
/// Returns a [`BatchError`] for the first row whose evaluation fails.
/// Rows after it are not evaluated.
pub fn compute_multiple<M>(model: &M, rows: &[M::Input]) -> Result<Vec<M::Output>, BatchError<M::Error>>
where
    M: Model,
    M::Error: std::error::Error + 'static,
{
    debug!(rows = rows.len(), "evaluating batch");

    rows.iter()
        .enumerate()
        .map(|(row, input)| {
            model.call(input).map_err(|source| {
                warn!(row, error = %source, "batch row failed");
                BatchError { row, source }
            })
        })
        .collect()
}

/// Evaluates `model` for every row on the rayon thread pool.
///
/// Produces exactly what [`compute_multiple`] produces for the same rows.
/// All rows are evaluated; if any fail, the lowest failing index is reported,
/// so a concurrent run never returns a different error or partial results.
///
/// # Errors
///
/// Returns a [`BatchError`] for the lowest-index row whose evaluation fails.
pub fn compute_multiple_par<M>(
    model: &M,
    rows: &[M::Input],
) -> Result<Vec<M::Output>, BatchError<M::Error>>
where
    M: Model + Sync,
    M::Input: Sync,
    M::Output: Send,
    M::Error: std::error::Error + Send + 'static,
{
    debug!(rows = rows.len(), "evaluating batch in parallel");

    let outcomes: Vec<_> = rows.par_iter().map(|input| model.call(input)).collect();

    outcomes
        .into_iter()
        .enumerate()
        .map(|(row, outcome)| {
            outcome.map_err(|source| {
                warn!(row, error = %source, "batch row failed");
                BatchError { row, source }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::plume::closed_form::{
        Chu, ChuInput, Ham, HamInput, Liedl, LiedlInput, ModelError,
    };

    fn liedl_rows() -> Vec<LiedlInput> {
        vec![
            [3.5, 0.001, 3.5, 8.0, 5.0].into(),
            [1.0, 0.01, 2.0, 0.0, 5.0].into(),
            [5.0, 0.005, 3.0, 6.0, 0.0].into(),
        ]
    }

    #[test]
    fn matches_direct_calls_in_order() {
        let rows = liedl_rows();
        let results = compute_multiple(&Liedl, &rows).unwrap();

        assert_eq!(results.len(), rows.len());
        for (result, row) in results.iter().zip(&rows) {
            assert_eq!(*result, Liedl.call(row).unwrap());
        }
    }

    #[test]
    fn empty_batch() {
        let rows: Vec<ChuInput> = Vec::new();
        assert!(compute_multiple(&Chu, &rows).unwrap().is_empty());
        assert!(compute_multiple_par(&Chu, &rows).unwrap().is_empty());
    }

    #[test]
    fn first_failure_aborts() {
        let rows: Vec<HamInput> = vec![
            HamInput::default(),
            HamInput {
                alpha_t: 0.0,
                ..HamInput::default()
            },
            HamInput {
                v: 0.0,
                ..HamInput::default()
            },
        ];

        let err = compute_multiple(&Ham, &rows).unwrap_err();
        assert_eq!(err.row, 1);
        assert!(matches!(
            err.source,
            ModelError::InvalidParameter { name: "alpha_t", .. }
        ));
    }

    #[test]
    fn parallel_matches_sequential() {
        let rows: Vec<LiedlInput> = (1..=200)
            .map(|i| LiedlInput {
                m: f64::from(i),
                ..LiedlInput::default()
            })
            .collect();

        let sequential = compute_multiple(&Liedl, &rows).unwrap();
        let parallel = compute_multiple_par(&Liedl, &rows).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn parallel_reports_lowest_failing_row() {
        let mut rows: Vec<LiedlInput> = vec![LiedlInput::default(); 100];
        for i in [97, 41, 63] {
            rows[i].alpha_tv = -1.0;
        }

        let err = compute_multiple_par(&Liedl, &rows).unwrap_err();
        assert_eq!(err.row, 41);
        assert_eq!(compute_multiple(&Liedl, &rows).unwrap_err().row, 41);
    }
}
