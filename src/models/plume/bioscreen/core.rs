//! BIOSCREEN-AT semi-analytical plume solver.
//!
//! The solver evaluates the centerline concentration of a continuous
//! rectangular source with first-order decay and sorption, marching down
//! the plume axis until the concentration drops below a threshold.

mod config;
mod error;
mod field;
mod params;
mod profile;
mod refine;
mod search;

#[cfg(test)]
mod test_support;

pub use config::{SearchConfig, SearchMode};
pub use error::TransportError;
pub use field::ConcentrationField;
pub use params::{Dispersivity, RECOMMENDED_QUADRATURE_ORDERS, TransportParameters};
pub use profile::PlumeProfile;

use tracing::debug;

use refine::refine;
use search::{STEP, march};

/// Solves for the plume length with the default marching search.
///
/// # Errors
///
/// Returns [`TransportError`] if the parameters are invalid or an evaluation
/// produces a non-finite concentration.
pub fn solve(params: &TransportParameters) -> Result<PlumeProfile, TransportError> {
    solve_with(params, &SearchConfig::default())
}

/// Solves for the plume length using `config`.
///
/// # Errors
///
/// Returns [`TransportError`] if the parameters are invalid, an evaluation
/// produces a non-finite concentration, or the refined search fails.
pub fn solve_with(
    params: &TransportParameters,
    config: &SearchConfig,
) -> Result<PlumeProfile, TransportError> {
    let field = ConcentrationField::new(params)?;

    let retarded = field.retarded();
    debug!(
        velocity = retarded.velocity,
        dx = retarded.dx,
        dy = retarded.dy,
        dz = retarded.dz,
        source_concentration = field.source_concentration(),
        quadrature_order = params.quadrature_order,
        mode = ?config.mode,
        "solving plume length"
    );

    let profile = march(&field, params.threshold)?;

    match config.mode {
        SearchMode::Refined if profile.threshold_crossed() && profile.lmax() > 0.0 => {
            let hi = profile.lmax();
            let lmax = refine(&field, params.threshold, [hi - STEP, hi], config)?;
            debug!(marched = hi, refined = lmax, "refined plume length");
            Ok(profile.with_lmax(lmax))
        }
        _ => Ok(profile),
    }
}

/// Plume length only.
///
/// # Errors
///
/// See [`solve`].
pub fn lmax(params: &TransportParameters) -> Result<f64, TransportError> {
    solve(params).map(|profile| profile.lmax())
}
