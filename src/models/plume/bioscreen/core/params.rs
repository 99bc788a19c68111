use crate::support::constraint::{NonNegative, StrictlyPositive};

use super::TransportError;

/// Conventional Gauss-Legendre orders for the time integral.
///
/// Any positive order is accepted.
pub const RECOMMENDED_QUADRATURE_ORDERS: [usize; 9] = [4, 5, 6, 10, 15, 20, 60, 104, 256];

/// Dispersivities along the three plume axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dispersivity {
    /// Longitudinal dispersivity `ax`.
    pub longitudinal: f64,
    /// Horizontal transverse dispersivity `ay`.
    pub horizontal: f64,
    /// Vertical transverse dispersivity `az`.
    pub vertical: f64,
}

/// Inputs for one BIOSCREEN-AT solve.
///
/// All values share one consistent unit system, typically metres, years, and
/// mg/L.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportParameters {
    /// Threshold concentration `Cthres` that ends the plume.
    pub threshold: f64,
    /// Elapsed time since the source appeared.
    pub time: f64,
    /// Source thickness `H`.
    pub source_thickness: f64,
    /// Source concentration `c0`.
    pub source_concentration: f64,
    /// Source width `W`.
    pub source_width: f64,
    /// Average linear groundwater velocity `v`.
    pub velocity: f64,
    /// Dispersivities `ax`, `ay`, `az`.
    pub dispersivity: Dispersivity,
    /// Effective diffusion coefficient `Df`.
    pub diffusion: f64,
    /// Retardation factor `R`.
    pub retardation: f64,
    /// Source decay coefficient `γ`.
    pub source_decay: f64,
    /// Effective first-order decay coefficient `λ_eff`.
    pub decay: f64,
    /// Number of Gauss-Legendre points.
    pub quadrature_order: usize,
}

impl Default for TransportParameters {
    fn default() -> Self {
        Self {
            threshold: 5e-5,
            time: 20.0,
            source_thickness: 5.0,
            source_concentration: 100.0,
            source_width: 10.0,
            velocity: 50.0,
            dispersivity: Dispersivity {
                longitudinal: 10.0,
                horizontal: 0.5,
                vertical: 0.05,
            },
            diffusion: 0.0,
            retardation: 1.0,
            source_decay: 0.0,
            decay: 0.1,
            quadrature_order: 60,
        }
    }
}

/// Velocity and dispersion coefficients divided by the retardation factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Retarded {
    pub(super) velocity: f64,
    pub(super) dx: f64,
    pub(super) dy: f64,
    pub(super) dz: f64,
}

impl TransportParameters {
    /// Validates the parameters and derives the retarded coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidParameter`] for out-of-range inputs and
    /// [`TransportError::NumericDomain`] for a degenerate time, retardation, or
    /// retarded dispersion.
    pub(super) fn retarded(&self) -> Result<Retarded, TransportError> {
        TransportError::require::<StrictlyPositive>("threshold", self.threshold)?;
        TransportError::require_domain("time", self.time)?;
        TransportError::require::<NonNegative>("source_thickness", self.source_thickness)?;
        TransportError::require::<NonNegative>("source_concentration", self.source_concentration)?;
        TransportError::require::<NonNegative>("source_width", self.source_width)?;

        let v = TransportError::require::<StrictlyPositive>("velocity", self.velocity)?;
        let ax = TransportError::require::<StrictlyPositive>(
            "longitudinal_dispersivity",
            self.dispersivity.longitudinal,
        )?;
        let ay = TransportError::require::<StrictlyPositive>(
            "horizontal_dispersivity",
            self.dispersivity.horizontal,
        )?;
        let az = TransportError::require::<StrictlyPositive>(
            "vertical_dispersivity",
            self.dispersivity.vertical,
        )?;
        let df = TransportError::require::<NonNegative>("diffusion", self.diffusion)?;
        let r = TransportError::require_domain("retardation", self.retardation)?;

        TransportError::require::<NonNegative>("source_decay", self.source_decay)?;
        TransportError::require::<NonNegative>("decay", self.decay)?;

        Ok(Retarded {
            velocity: v / r,
            dx: TransportError::require_domain("retarded_dx", (ax * v + df) / r)?,
            dy: TransportError::require_domain("retarded_dy", (ay * v + df) / r)?,
            dz: TransportError::require_domain("retarded_dz", (az * v + df) / r)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn derives_retarded_coefficients() {
        let params = TransportParameters {
            diffusion: 0.2,
            retardation: 2.0,
            ..TransportParameters::default()
        };

        let retarded = params.retarded().unwrap();
        assert_relative_eq!(retarded.velocity, 25.0);
        assert_relative_eq!(retarded.dx, (10.0 * 50.0 + 0.2) / 2.0);
        assert_relative_eq!(retarded.dy, (0.5 * 50.0 + 0.2) / 2.0);
        assert_relative_eq!(retarded.dz, (0.05 * 50.0 + 0.2) / 2.0);
    }

    #[test]
    fn default_order_is_recommended() {
        let order = TransportParameters::default().quadrature_order;
        assert!(RECOMMENDED_QUADRATURE_ORDERS.contains(&order));
    }

    #[test]
    fn degenerate_time_and_retardation() {
        for time in [0.0, -1.0, f64::INFINITY] {
            let params = TransportParameters {
                time,
                ..TransportParameters::default()
            };
            assert!(matches!(
                params.retarded(),
                Err(TransportError::NumericDomain { name: "time", .. })
            ));
        }

        let params = TransportParameters {
            retardation: 0.0,
            ..TransportParameters::default()
        };
        assert!(matches!(
            params.retarded(),
            Err(TransportError::NumericDomain {
                name: "retardation",
                value,
            }) if value == 0.0
        ));
    }

    #[test]
    fn overflowing_dispersion_is_degenerate() {
        let params = TransportParameters {
            velocity: f64::MAX,
            ..TransportParameters::default()
        };
        assert!(matches!(
            params.retarded(),
            Err(TransportError::NumericDomain {
                name: "retarded_dx",
                ..
            })
        ));
    }

    #[test]
    fn invalid_inputs() {
        let cases = [
            (
                TransportParameters {
                    threshold: 0.0,
                    ..TransportParameters::default()
                },
                "threshold",
                ConstraintError::Zero,
            ),
            (
                TransportParameters {
                    velocity: -50.0,
                    ..TransportParameters::default()
                },
                "velocity",
                ConstraintError::Negative,
            ),
            (
                TransportParameters {
                    dispersivity: Dispersivity {
                        vertical: 0.0,
                        ..TransportParameters::default().dispersivity
                    },
                    ..TransportParameters::default()
                },
                "vertical_dispersivity",
                ConstraintError::Zero,
            ),
            (
                TransportParameters {
                    source_concentration: f64::NAN,
                    ..TransportParameters::default()
                },
                "source_concentration",
                ConstraintError::NotANumber,
            ),
            (
                TransportParameters {
                    diffusion: -0.1,
                    ..TransportParameters::default()
                },
                "diffusion",
                ConstraintError::Negative,
            ),
        ];

        for (params, expected_name, expected_source) in cases {
            match params.retarded() {
                Err(TransportError::InvalidParameter { name, source }) => {
                    assert_eq!(name, expected_name);
                    assert_eq!(source, expected_source);
                }
                other => panic!("Expected InvalidParameter for {expected_name}, got: {other:?}"),
            }
        }
    }
}
