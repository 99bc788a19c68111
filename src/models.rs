//! Public plume-length models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model exposes a plain function following the numeric call contract
//! used by calling layers (`f64` parameters in, `f64` Lmax out) and a unit
//! struct implementing [`twine_core::Model`].
//!
//! Models with non-trivial computation keep it in an internal `core`
//! submodule. The `core` module is an implementation detail; the
//! [`twine_core::Model`] implementation is a thin adapter that delegates to it.

pub mod plume;
