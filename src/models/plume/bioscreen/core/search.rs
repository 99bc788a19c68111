//! Fixed-step marching search for the threshold crossing.

use tracing::warn;

use super::{ConcentrationField, PlumeProfile, TransportError};

/// Distance between consecutive samples.
pub(super) const STEP: f64 = 1.0;

/// Maximum number of steps before the search gives up on a crossing.
pub(super) const MAX_STEPS: usize = 100_000;

/// Marches down the centerline from `x = 0` until `C(x) < threshold`.
///
/// # Errors
///
/// Returns [`TransportError::NonFinite`] if any evaluated concentration is
/// not finite.
pub(super) fn march(
    field: &ConcentrationField,
    threshold: f64,
) -> Result<PlumeProfile, TransportError> {
    let mut x = 0.0;
    let mut c = checked(field, x)?;

    let mut xs = vec![x];
    let mut cs = vec![c];
    let mut steps = 0;

    while c >= threshold && steps < MAX_STEPS {
        x += STEP;
        c = checked(field, x)?;
        xs.push(x);
        cs.push(c);
        steps += 1;
    }

    let crossed = c < threshold;
    if !crossed {
        warn!(
            steps,
            lmax = x,
            concentration = c,
            threshold,
            "plume search stopped at step cap without crossing the threshold"
        );
    }

    Ok(PlumeProfile::new(x, xs, cs, crossed))
}

fn checked(field: &ConcentrationField, x: f64) -> Result<f64, TransportError> {
    let c = field.centerline(x);
    if c.is_finite() {
        Ok(c)
    } else {
        Err(TransportError::NonFinite { x })
    }
}
