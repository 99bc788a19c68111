use twine_core::Model;
use uom::si::{f64::Length, length::meter};

use crate::support::constraint::StrictlyPositive;

use super::{CONCENTRATION_FLOOR, ModelError, floored};

/// Parameters of the Chu et al. model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChuInput {
    /// Source width `W`.
    pub w: f64,
    /// Horizontal transverse dispersivity `α_Th`.
    pub alpha_th: f64,
    /// Stoichiometric ratio `γ`.
    pub gamma: f64,
    /// Electron-acceptor concentration `C_EA0`.
    pub c_ea0: f64,
    /// Electron-donor concentration `C_ED0`.
    pub c_ed0: f64,
    /// Biological factor `ε`, the acceptor concentration consumed by biomass.
    pub epsilon: f64,
}

impl Default for ChuInput {
    fn default() -> Self {
        Self {
            w: 2.0,
            alpha_th: 0.01,
            gamma: 1.5,
            c_ea0: 8.0,
            c_ed0: 5.0,
            epsilon: 0.0,
        }
    }
}

impl From<[f64; 6]> for ChuInput {
    fn from([w, alpha_th, gamma, c_ea0, c_ed0, epsilon]: [f64; 6]) -> Self {
        Self {
            w,
            alpha_th,
            gamma,
            c_ea0,
            c_ed0,
            epsilon,
        }
    }
}

/// Computes Lmax for the Chu et al. model.
///
/// The acceptor concentration available for the reaction is `C_EA0 − ε`,
/// floored like every other concentration denominator.
///
/// # Errors
///
/// Returns [`ModelError::InvalidParameter`] if `alpha_th` is not strictly positive.
pub fn chu_lmax(
    w: f64,
    alpha_th: f64,
    gamma: f64,
    c_ea0: f64,
    c_ed0: f64,
    epsilon: f64,
) -> Result<f64, ModelError> {
    let alpha_th = ModelError::require::<StrictlyPositive>("alpha_th", alpha_th)?;
    let effective_acceptor = (c_ea0 - epsilon).max(CONCENTRATION_FLOOR);
    Ok(w * gamma * floored(c_ed0) / (alpha_th * effective_acceptor))
}

/// Chu et al. plume-length model.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chu;

impl Model for Chu {
    type Input = ChuInput;
    type Output = Length;
    type Error = ModelError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let lmax = chu_lmax(
            input.w,
            input.alpha_th,
            input.gamma,
            input.c_ea0,
            input.c_ed0,
            input.epsilon,
        )?;
        Ok(Length::new::<meter>(lmax))
    }
}
