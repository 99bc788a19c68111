//! Closed-form plume-length models.
//!
//! Each model maps a fixed tuple of physical parameters to a scalar Lmax in
//! O(1). All models are pure and deterministic.
//!
//! | Model | Parameters (order) |
//! |---|---|
//! | [`Liedl`] | `M, α_Tv, γ, C_EA0, C_ED0` |
//! | [`Chu`] | `W, α_Th, γ, C_EA0, C_ED0, ε` |
//! | [`Ham`] | `Q, α_T, v, C_EA0, C_ED0` |
//! | [`Maier`] | `M, tv, g, Ca, Cd` |
//! | [`Birla`] | `M, tv, g, Ca, Cd, R` |
//!
//! # Concentration floor
//!
//! Concentrations used as denominators are floored at [`CONCENTRATION_FLOOR`]
//! instead of being rejected, so sweeps over data containing zero
//! concentrations still produce finite values. Only structural parameters
//! (dispersivities, velocities, logarithm arguments) are validated and fail
//! with [`ModelError::InvalidParameter`].
//!
//! # Provisional formulas
//!
//! The Liedl, Chu, and Ham formulas implemented here are the working
//! contract of this crate and remain provisional until checked against the
//! cited publications. Maier and Birla follow their published forms.
//!
//! # Example
//!
//! ```
//! use plume_models::models::plume::closed_form::{Liedl, LiedlInput, liedl_lmax};
//! use twine_core::Model;
//! use uom::si::length::meter;
//!
//! # fn main() -> Result<(), plume_models::models::plume::closed_form::ModelError> {
//! let lmax = liedl_lmax(3.5, 0.001, 3.5, 8.0, 5.0)?;
//! assert_eq!(lmax, 7656.25);
//!
//! let length = Liedl.call(&LiedlInput::from([3.5, 0.001, 3.5, 8.0, 5.0]))?;
//! assert_eq!(length.get::<meter>(), lmax);
//! # Ok(())
//! # }
//! ```

mod birla;
mod chu;
mod error;
mod ham;
mod liedl;
mod maier;

pub use birla::{Birla, BirlaInput, birla_lmax};
pub use chu::{Chu, ChuInput, chu_lmax};
pub use error::ModelError;
pub use ham::{Ham, HamInput, ham_lmax};
pub use liedl::{Liedl, LiedlInput, liedl_lmax};
pub use maier::{Maier, MaierInput, maier_lmax};

/// Lower bound applied to concentration-like denominators.
pub const CONCENTRATION_FLOOR: f64 = 1e-6;

/// Floors a concentration at [`CONCENTRATION_FLOOR`].
fn floored(concentration: f64) -> f64 {
    concentration.max(CONCENTRATION_FLOOR)
}
