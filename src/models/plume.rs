//! Groundwater contaminant plume models.
//!
//! All models compute Lmax, the downgradient distance at which a contaminant
//! plume stops growing (closed-form models) or where its centerline
//! concentration first falls below a threshold (semi-analytical model).
//!
//! - [`closed_form`]: Liedl, Chu, Ham, Maier, and Birla formulas.
//! - [`bioscreen`]: BIOSCREEN-AT semi-analytical transport solution.

pub mod bioscreen;
pub mod closed_form;
