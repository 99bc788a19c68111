//! # Plume Models
//!
//! Plume-length (Lmax) models for groundwater contaminant transport, built on
//! the [`twine_core::Model`] abstraction.
//!
//! ## Crate layout
//!
//! - [`models`]: Lmax models, both closed-form and semi-analytical.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Units
//!
//! Model inputs are plain `f64` values in one consistent unit system chosen by
//! the caller (for example metres, years, and mg/L). Lengths returned through
//! the [`twine_core::Model`] adapters are [`uom`] quantities expressed in
//! metres.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code that only one model needs lives in that model's internal
//! `core` module and moves to [`support`] once a second model needs it.

pub mod models;
pub mod support;
