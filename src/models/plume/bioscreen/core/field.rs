use std::f64::consts::PI;

use libm::erfc;

use crate::support::quadrature::GaussLegendre;

use super::{
    TransportError, TransportParameters,
    params::Retarded,
};

/// Distances at or below this are treated as the source plane.
const SOURCE_PLANE_TOL: f64 = 1e-6;

/// Vertical coordinate `z1` of the bottom of the source.
const SOURCE_BASE: f64 = 0.0;

/// Concentration field of a continuous, decaying, rectangular source.
///
/// The field is evaluated from the point-source Green's function integrated
/// over time with Gauss-Legendre quadrature. The time variable is substituted
/// as `t = τ⁴`, which concentrates quadrature points near `τ = 0` where the
/// integrand is singular.
///
/// A field is built once per solve; every evaluation reuses the same
/// quadrature rule.
#[derive(Debug, Clone)]
pub struct ConcentrationField {
    params: TransportParameters,
    retarded: Retarded,
    rule: GaussLegendre,
}

impl ConcentrationField {
    /// Validates `params` and prepares the quadrature rule.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidParameter`] or
    /// [`TransportError::NumericDomain`] if the parameters cannot produce a
    /// meaningful field.
    pub fn new(params: &TransportParameters) -> Result<Self, TransportError> {
        let retarded = params.retarded()?;
        let rule = GaussLegendre::new(params.quadrature_order).map_err(|source| {
            TransportError::InvalidParameter {
                name: "quadrature_order",
                source,
            }
        })?;

        Ok(Self {
            params: *params,
            retarded,
            rule,
        })
    }

    /// Parameters this field was built from.
    #[must_use]
    pub fn params(&self) -> &TransportParameters {
        &self.params
    }

    /// Source concentration after source decay over the elapsed time.
    #[must_use]
    pub fn source_concentration(&self) -> f64 {
        self.params.source_concentration * (-self.params.source_decay * self.params.time).exp()
    }

    /// Whether `(y, z)` lies within the source footprint at `x = 0`.
    #[must_use]
    pub fn in_footprint(&self, y: f64, z: f64) -> bool {
        let half_width = self.params.source_width / 2.0;
        (-half_width..=half_width).contains(&y)
            && (SOURCE_BASE..=self.params.source_thickness).contains(&z)
    }

    /// Concentration on the plume axis: lateral centerline (`y = 0`) at the
    /// vertical midpoint of the source (`z = H/2`).
    #[must_use]
    pub fn centerline(&self, x: f64) -> f64 {
        self.at(x, 0.0, (SOURCE_BASE + self.params.source_thickness) / 2.0)
    }

    /// Concentration at `(x, y, z)`.
    #[must_use]
    pub fn at(&self, x: f64, y: f64, z: f64) -> f64 {
        let c_source = self.source_concentration();

        if x <= SOURCE_PLANE_TOL {
            return if self.in_footprint(y, z) { c_source } else { 0.0 };
        }

        let p = &self.params;
        let r = &self.retarded;
        let half_width = p.source_width / 2.0;
        let net_decay = p.decay - p.source_decay;

        let sum: f64 = self
            .rule
            .on_interval(0.0, p.time.sqrt().sqrt())
            .map(|(tau, weight)| {
                let tau4 = tau.powi(4);

                let x_term = (-(net_decay * tau4 + (x - r.velocity * tau4).powi(2) / (4.0 * r.dx * tau4)))
                    .exp()
                    / tau.powi(3);

                let spread_y = 2.0 * (r.dy * tau4).sqrt();
                let y_term = erfc((y - half_width) / spread_y) - erfc((y + half_width) / spread_y);

                let spread_z = 2.0 * (r.dz * tau4).sqrt();
                let z_term = erfc((z - p.source_thickness) / spread_z) - erfc((z - SOURCE_BASE) / spread_z);

                x_term * y_term * z_term * weight
            })
            .sum();

        let a = c_source * x / (8.0 * (PI * r.dx).sqrt());
        a * 4.0 * sum
    }

    pub(super) fn retarded(&self) -> &Retarded {
        &self.retarded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::plume::bioscreen::core::test_support::reference;

    #[test]
    fn source_plane_inside_footprint() {
        let params = TransportParameters {
            source_decay: 0.05,
            ..reference()
        };
        let field = ConcentrationField::new(&params).unwrap();

        let expected = 100.0 * (-0.05_f64 * 20.0).exp();
        assert_relative_eq!(field.centerline(0.0), expected, max_relative = 1e-15);
        assert_relative_eq!(field.at(1e-7, 5.0, 0.0), expected, max_relative = 1e-15);
    }

    #[test]
    fn source_plane_outside_footprint() {
        let field = ConcentrationField::new(&reference()).unwrap();

        assert_eq!(field.at(0.0, 5.1, 2.5), 0.0);
        assert_eq!(field.at(0.0, -5.1, 2.5), 0.0);
        assert_eq!(field.at(0.0, 0.0, 5.5), 0.0);
        assert_eq!(field.at(0.0, 0.0, -0.1), 0.0);
    }

    #[test]
    fn downgradient_concentration_is_bounded() {
        let field = ConcentrationField::new(&reference()).unwrap();
        let source = field.source_concentration();

        for x in [1.0, 10.0, 100.0, 1000.0, 2000.0] {
            let c = field.centerline(x);
            assert!(c.is_finite());
            assert!(c >= 0.0, "negative concentration {c} at x={x}");
            assert!(c <= source, "concentration {c} exceeds source at x={x}");
        }
    }

    #[test]
    fn symmetric_across_centerline() {
        let field = ConcentrationField::new(&reference()).unwrap();

        for x in [5.0, 50.0, 500.0] {
            let left = field.at(x, -2.0, 2.5);
            let right = field.at(x, 2.0, 2.5);
            assert_relative_eq!(left, right, max_relative = 1e-12);
            assert!(field.centerline(x) >= right);
        }
    }

    #[test]
    fn rejects_zero_quadrature_order() {
        let params = TransportParameters {
            quadrature_order: 0,
            ..reference()
        };
        assert!(matches!(
            ConcentrationField::new(&params),
            Err(TransportError::InvalidParameter {
                name: "quadrature_order",
                ..
            })
        ));
    }
}
