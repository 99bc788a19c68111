use std::f64::consts::PI;

use twine_core::Model;
use uom::si::{f64::Length, length::meter};

use crate::support::constraint::StrictlyPositive;

use super::ModelError;

/// Parameters of the Birla et al. (2020) model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirlaInput {
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
    /// Correction coefficient `R` applied through `M^0.404·R^1.883`.
    pub r: f64,
}

impl Default for BirlaInput {
    fn default() -> Self {
        Self {
            m: 2.0,
            tv: 0.001,
            g: 3.5,
            ca: 8.0,
            cd: 5.0,
            r: 1.0,
        }
    }
}

impl From<[f64; 6]> for BirlaInput {
    fn from([m, tv, g, ca, cd, r]: [f64; 6]) -> Self {
        Self {
            m,
            tv,
            g,
            ca,
            cd,
            r,
        }
    }
}

/// Computes Lmax for the Birla et al. (2020) model.
///
/// `L = (1 − 0.047·M^0.404·R^1.883) · (4M²/(π²·tv)) · ln(((g·Cd + Ca)/Ca)·(4/π))`
///
/// The leading correction factor turns negative for large `R`, and so does
/// the returned length. This is the published behavior and is not clamped.
///
/// # Errors
///
/// Returns [`ModelError::InvalidParameter`] if `tv` or `ca` is not strictly
/// positive, or if the logarithm argument is not strictly positive.
pub fn birla_lmax(m: f64, tv: f64, g: f64, ca: f64, cd: f64, r: f64) -> Result<f64, ModelError> {
    let tv = ModelError::require::<StrictlyPositive>("tv", tv)?;
    let ca = ModelError::require::<StrictlyPositive>("ca", ca)?;

    let factor = 1.0 - 0.047 * m.powf(0.404) * r.powf(1.883);
    let log_argument = ModelError::require::<StrictlyPositive>(
        "log argument",
        ((g * cd + ca) / ca) * (4.0 / PI),
    )?;

    Ok(factor * ((4.0 * m * m) / (PI * PI * tv)) * log_argument.ln())
}

/// Birla et al. (2020) empirical plume-length model.
#[derive(Debug, Clone, Copy, Default)]
pub struct Birla;

impl Model for Birla {
    type Input = BirlaInput;
    type Output = Length;
    type Error = ModelError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let lmax = birla_lmax(input.m, input.tv, input.g, input.ca, input.cd, input.r)?;
        Ok(Length::new::<meter>(lmax))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn reference_value() {
        let lmax = birla_lmax(2.0, 0.001, 3.5, 8.0, 5.0, 1.0).unwrap();
        assert_relative_eq!(lmax, 2_129.668_933_744_322, max_relative = 1e-12);
    }

    #[test]
    fn large_r_gives_negative_length() {
        let lmax = Birla
            .call(&BirlaInput {
                r: 5.0,
                ..BirlaInput::default()
            })
            .unwrap();
        assert!(lmax.get::<meter>() < 0.0);
    }

    #[test]
    fn rejects_non_positive_log_argument() {
        // g·Cd + Ca = -2, so the argument is negative.
        assert_eq!(
            birla_lmax(2.0, 0.001, -2.0, 8.0, 5.0, 1.0),
            Err(ModelError::InvalidParameter {
                name: "log argument",
                source: ConstraintError::Negative,
            })
        );

        // g·Cd + Ca = 0, so the argument is exactly zero.
        assert_eq!(
            birla_lmax(2.0, 0.001, -1.6, 8.0, 5.0, 1.0).unwrap_err().parameter(),
            "log argument"
        );
    }

    #[test]
    fn rejects_structural_parameters() {
        assert_eq!(
            birla_lmax(2.0, 0.0, 3.5, 8.0, 5.0, 1.0).unwrap_err().parameter(),
            "tv"
        );
        assert_eq!(
            birla_lmax(2.0, 0.001, 3.5, -8.0, 5.0, 1.0).unwrap_err().parameter(),
            "ca"
        );
    }
}
