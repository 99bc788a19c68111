use twine_core::Model;
use uom::si::{f64::Length, length::meter};

use crate::support::constraint::{NonNegative, StrictlyPositive};

use super::ModelError;

/// Parameters of the Maier & Grathwohl (2005) model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaierInput {
    /// Aquifer thickness `M`.
    pub m: f64,
    /// Vertical transverse dispersivity `tv`.
    pub tv: f64,
    /// Stoichiometry coefficient `g`.
    pub g: f64,
    /// Contaminant concentration `Ca`.
    pub ca: f64,
    /// Reactant concentration `Cd`.
    pub cd: f64,
}

impl Default for MaierInput {
    fn default() -> Self {
        Self {
            m: 2.0,
            tv: 0.01,
            g: 3.5,
            ca: 8.0,
            cd: 5.0,
        }
    }
}

impl From<[f64; 5]> for MaierInput {
    fn from([m, tv, g, ca, cd]: [f64; 5]) -> Self {
        Self { m, tv, g, ca, cd }
    }
}

/// Computes Lmax for the Maier & Grathwohl (2005) model.
///
/// `L = 0.5·(M²/tv)·(g·Cd/Ca)^0.3`
///
/// # Errors
///
/// Returns [`ModelError::InvalidParameter`] if `tv` or `ca` is not strictly
/// positive, or if the base `g·Cd/Ca` of the fractional power is negative.
pub fn maier_lmax(m: f64, tv: f64, g: f64, ca: f64, cd: f64) -> Result<f64, ModelError> {
    let tv = ModelError::require::<StrictlyPositive>("tv", tv)?;
    let ca = ModelError::require::<StrictlyPositive>("ca", ca)?;
    let ratio = ModelError::require::<NonNegative>("g*cd/ca", g * cd / ca)?;
    Ok(0.5 * (m * m / tv) * ratio.powf(0.3))
}

/// Maier & Grathwohl (2005) empirical plume-length model.
#[derive(Debug, Clone, Copy, Default)]
pub struct Maier;

impl Model for Maier {
    type Input = MaierInput;
    type Output = Length;
    type Error = ModelError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let lmax = maier_lmax(input.m, input.tv, input.g, input.ca, input.cd)?;
        Ok(Length::new::<meter>(lmax))
    }
}
