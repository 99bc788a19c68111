//! Supporting utilities used by models.
//!
//! - [`batch`]: Ordered, fail-fast evaluation of a model over many inputs.
//! - [`constraint`]: Type-level numeric constraints for parameter checks.
//! - [`quadrature`]: Gauss-Legendre quadrature rules.

pub mod batch;
pub mod constraint;
pub mod quadrature;
