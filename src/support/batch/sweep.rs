use tracing::debug;
use twine_core::Model;

use super::{BatchError, compute_multiple};

/// One evaluated point of a parameter sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint<T> {
    /// Value assigned to the swept parameter.
    pub value: f64,

    /// Model output for that value.
    pub output: T,
}

/// Evaluates `model` while varying a single parameter of `base`.
///
/// `apply` returns a copy of `base` with the swept parameter set to the given
/// value. Sweep values are sorted ascending and duplicates are removed before
/// evaluation, so the returned points are strictly increasing in `value`.
///
/// # Errors
///
/// Returns a [`BatchError`] for the first failing point. Its `row` indexes
/// the sorted, de-duplicated values.
///
/// # Example
///
/// ```
/// use plume_models::models::plume::closed_form::{Maier, MaierInput};
/// use plume_models::support::batch::sweep;
///
/// let points = sweep(
///     &Maier,
///     &MaierInput::default(),
///     &[3.0, 1.0, 2.0, 1.0],
///     |base, m| MaierInput { m, ..*base },
/// )
/// .unwrap();
///
/// let values: Vec<f64> = points.iter().map(|p| p.value).collect();
/// assert_eq!(values, [1.0, 2.0, 3.0]);
/// ```
pub fn sweep<M, F>(
    model: &M,
    base: &M::Input,
    values: &[f64],
    apply: F,
) -> Result<Vec<SweepPoint<M::Output>>, BatchError<M::Error>>
where
    M: Model,
    M::Error: std::error::Error + 'static,
    F: Fn(&M::Input, f64) -> M::Input,
{
    let mut values = values.to_vec();
    values.sort_by(f64::total_cmp);
    values.dedup();
    debug!(points = values.len(), "running parameter sweep");

    let inputs: Vec<_> = values.iter().map(|&value| apply(base, value)).collect();
    let outputs = compute_multiple(model, &inputs)?;

    Ok(values
        .into_iter()
        .zip(outputs)
        .map(|(value, output)| SweepPoint { value, output })
        .collect())
}

/// Builds the three-point sweep `[max(floor, center/2), center, 1.5·center]`.
///
/// Used when a single sweep value is supplied, to bracket it.
#[must_use]
pub fn sweep_values_around(center: f64, floor: f64) -> [f64; 3] {
    [(center * 0.5).max(floor), center, center * 1.5]
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::meter;

    use crate::models::plume::closed_form::{Birla, BirlaInput, birla_lmax};

    #[test]
    fn sorted_and_deduplicated() {
        let points = sweep(
            &Birla,
            &BirlaInput::default(),
            &[1.5, 0.5, 1.0, 0.5],
            |base, r| BirlaInput { r, ..*base },
        )
        .unwrap();

        assert_eq!(points.len(), 3);
        for (point, r) in points.iter().zip([0.5, 1.0, 1.5]) {
            assert_eq!(point.value, r);
            let expected = birla_lmax(2.0, 0.001, 3.5, 8.0, 5.0, r).unwrap();
            assert_relative_eq!(point.output.get::<meter>(), expected);
        }
    }

    #[test]
    fn failure_index_refers_to_sorted_values() {
        let err = sweep(
            &Birla,
            &BirlaInput::default(),
            &[0.002, -0.001, 0.001],
            |base, tv| BirlaInput { tv, ..*base },
        )
        .unwrap_err();

        assert_eq!(err.row, 0);
        assert_eq!(err.source.parameter(), "tv");
    }

    #[test]
    fn values_around_center() {
        assert_eq!(sweep_values_around(2.0, 0.1), [1.0, 2.0, 3.0]);
        assert_eq!(sweep_values_around(0.08, 0.05), [0.05, 0.08, 0.12]);
    }
}
