//! Numerical quadrature.
//!
//! Provides Gauss-Legendre rules of arbitrary order. A rule is built once on
//! the reference interval `[-1, 1]` and mapped onto any finite interval with
//! [`GaussLegendre::on_interval`].
//!
//! # Example
//!
//! ```
//! use plume_models::support::quadrature::GaussLegendre;
//!
//! # fn main() -> Result<(), plume_models::support::constraint::ConstraintError> {
//! let rule = GaussLegendre::new(5)?;
//!
//! // Integrate x^2 over [0, 3].
//! let integral: f64 = rule.on_interval(0.0, 3.0).map(|(x, w)| w * x * x).sum();
//! assert!((integral - 9.0).abs() < 1e-12);
//! # Ok(())
//! # }
//! ```

mod gauss_legendre;

pub use gauss_legendre::GaussLegendre;
