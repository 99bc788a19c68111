//! BIOSCREEN-AT plume-length model.
//!
//! [`BioscreenAt`] is the [`twine_core::Model`] adapter for the
//! semi-analytical solver in the internal `core` module. The free functions
//! [`solve`], [`solve_with`], and [`lmax`] expose the same solver without the
//! adapter.
//!
//! # Example
//!
//! ```
//! use plume_models::models::plume::bioscreen::{BioscreenAt, TransportParameters};
//! use twine_core::Model;
//! use uom::si::length::meter;
//!
//! let profile = BioscreenAt::default()
//!     .call(&TransportParameters::default())
//!     .unwrap();
//!
//! assert_eq!(profile.lmax(), 1522.0);
//! assert_eq!(profile.lmax_length().get::<meter>(), 1522.0);
//! assert_eq!(profile.x().len(), profile.concentration().len());
//! ```

pub(crate) mod core;

pub use self::core::{
    ConcentrationField, Dispersivity, PlumeProfile, RECOMMENDED_QUADRATURE_ORDERS, SearchConfig,
    SearchMode, TransportError, TransportParameters, lmax, solve, solve_with,
};

use twine_core::Model;

/// BIOSCREEN-AT plume-length model.
#[derive(Debug, Clone, Copy, Default)]
pub struct BioscreenAt {
    /// Search configuration applied to every call.
    pub config: SearchConfig,
}

impl BioscreenAt {
    /// Creates a model that searches with `config`.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

impl Model for BioscreenAt {
    type Input = TransportParameters;
    type Output = PlumeProfile;
    type Error = TransportError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        solve_with(input, &self.config)
    }
}
