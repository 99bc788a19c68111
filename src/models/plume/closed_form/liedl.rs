use twine_core::Model;
use uom::si::{f64::Length, length::meter};

use crate::support::constraint::StrictlyPositive;

use super::{ModelError, floored};

/// Parameters of the Liedl et al. (2005) model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiedlInput {
    /// Aquifer thickness `M`.
    pub m: f64,
    /// Vertical transverse dispersivity `α_Tv`.
    pub alpha_tv: f64,
    /// Stoichiometric ratio `γ`.
    pub gamma: f64,
    /// Electron-acceptor concentration `C_EA0`.
    pub c_ea0: f64,
    /// Electron-donor concentration `C_ED0`.
    pub c_ed0: f64,
}

impl Default for LiedlInput {
    fn default() -> Self {
        Self {
            m: 3.5,
            alpha_tv: 0.001,
            gamma: 3.5,
            c_ea0: 8.0,
            c_ed0: 5.0,
        }
    }
}

impl From<[f64; 5]> for LiedlInput {
    fn from([m, alpha_tv, gamma, c_ea0, c_ed0]: [f64; 5]) -> Self {
        Self {
            m,
            alpha_tv,
            gamma,
            c_ea0,
            c_ed0,
        }
    }
}

/// Computes Lmax for the Liedl et al. (2005) model.
///
/// `L = M·γ·C_ED0 / (α_Tv·C_EA0)`, with both concentrations floored.
///
/// # Errors
///
/// Returns [`ModelError::InvalidParameter`] if `alpha_tv` is not strictly positive.
pub fn liedl_lmax(
    m: f64,
    alpha_tv: f64,
    gamma: f64,
    c_ea0: f64,
    c_ed0: f64,
) -> Result<f64, ModelError> {
    let alpha_tv = ModelError::require::<StrictlyPositive>("alpha_tv", alpha_tv)?;
    Ok(m * gamma * floored(c_ed0) / (alpha_tv * floored(c_ea0)))
}

/// Liedl et al. (2005) plume-length model.
#[derive(Debug, Clone, Copy, Default)]
pub struct Liedl;

impl Model for Liedl {
    type Input = LiedlInput;
    type Output = Length;
    type Error = ModelError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let lmax = liedl_lmax(
            input.m,
            input.alpha_tv,
            input.gamma,
            input.c_ea0,
            input.c_ed0,
        )?;
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
        let lmax = liedl_lmax(3.5, 0.001, 3.5, 8.0, 5.0).unwrap();
        assert_relative_eq!(lmax, 7656.25, max_relative = 1e-12);

        let length = Liedl.call(&LiedlInput::default()).unwrap();
        assert_relative_eq!(length.get::<meter>(), lmax);
    }

    #[test]
    fn floors_zero_concentrations() {
        let no_acceptor = liedl_lmax(3.5, 0.001, 3.5, 0.0, 5.0).unwrap();
        assert_relative_eq!(no_acceptor, 6.125e10, max_relative = 1e-12);

        let neither = liedl_lmax(3.5, 0.001, 3.5, 0.0, 0.0).unwrap();
        assert_relative_eq!(neither, 12_250.0, max_relative = 1e-12);
    }

    #[test]
    fn rejects_non_positive_dispersivity() {
        assert_eq!(
            liedl_lmax(3.5, 0.0, 3.5, 8.0, 5.0),
            Err(ModelError::InvalidParameter {
                name: "alpha_tv",
                source: ConstraintError::Zero,
            })
        );

        let err = Liedl
            .call(&LiedlInput {
                alpha_tv: -0.001,
                ..LiedlInput::default()
            })
            .unwrap_err();
        assert_eq!(err.parameter(), "alpha_tv");
    }

    #[test]
    fn positional_rows() {
        let input = LiedlInput::from([1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(input.m, 1.0);
        assert_eq!(input.alpha_tv, 2.0);
        assert_eq!(input.c_ed0, 5.0);
    }
}
