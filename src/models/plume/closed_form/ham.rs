use twine_core::Model;
use uom::si::{f64::Length, length::meter};

use crate::support::constraint::StrictlyPositive;

use super::{ModelError, floored};

/// Parameters of the Ham et al. model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HamInput {
    /// Source term `Q`.
    pub q: f64,
    /// Transverse dispersivity `α_T`.
    pub alpha_t: f64,
    /// Groundwater velocity `v`.
    pub v: f64,
    /// Electron-acceptor concentration `C_EA0`.
    pub c_ea0: f64,
    /// Electron-donor concentration `C_ED0`.
    pub c_ed0: f64,
}

impl Default for HamInput {
    fn default() -> Self {
        Self {
            q: 1.0,
            alpha_t: 0.01,
            v: 0.1,
            c_ea0: 8.0,
            c_ed0: 5.0,
        }
    }
}

impl From<[f64; 5]> for HamInput {
    fn from([q, alpha_t, v, c_ea0, c_ed0]: [f64; 5]) -> Self {
        Self {
            q,
            alpha_t,
            v,
            c_ea0,
            c_ed0,
        }
    }
}

/// Computes Lmax for the Ham et al. model.
///
/// # Errors
///
/// Returns [`ModelError::InvalidParameter`] if `alpha_t` or `v` is not strictly positive.
pub fn ham_lmax(q: f64, alpha_t: f64, v: f64, c_ea0: f64, c_ed0: f64) -> Result<f64, ModelError> {
    let alpha_t = ModelError::require::<StrictlyPositive>("alpha_t", alpha_t)?;
    let v = ModelError::require::<StrictlyPositive>("v", v)?;
    Ok(q * floored(c_ed0) / (alpha_t * v * floored(c_ea0)))
}

/// Ham et al. plume-length model.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ham;

impl Model for Ham {
    type Input = HamInput;
    type Output = Length;
    type Error = ModelError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let lmax = ham_lmax(input.q, input.alpha_t, input.v, input.c_ea0, input.c_ed0)?;
        Ok(Length::new::<meter>(lmax))
    }
}
