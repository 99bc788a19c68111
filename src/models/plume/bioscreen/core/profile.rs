use uom::si::{f64::Length, length::meter};

/// Sampled centerline concentrations and the resulting plume length.
///
/// Samples start at `x = 0` and advance by exactly one distance unit. The
/// final sample is the first one below the threshold, unless the search
/// stopped at its step cap.
#[derive(Debug, Clone, PartialEq)]
pub struct PlumeProfile {
    lmax: f64,
    x: Vec<f64>,
    concentration: Vec<f64>,
    threshold_crossed: bool,
}

impl PlumeProfile {
    pub(super) fn new(
        lmax: f64,
        x: Vec<f64>,
        concentration: Vec<f64>,
        threshold_crossed: bool,
    ) -> Self {
        debug_assert_eq!(x.len(), concentration.len());
        Self {
            lmax,
            x,
            concentration,
            threshold_crossed,
        }
    }

    pub(super) fn with_lmax(self, lmax: f64) -> Self {
        Self { lmax, ..self }
    }

    /// Plume length Lmax.
    #[must_use]
    pub fn lmax(&self) -> f64 {
        self.lmax
    }

    /// Plume length as a [`Length`], interpreting distances as metres.
    #[must_use]
    pub fn lmax_length(&self) -> Length {
        Length::new::<meter>(self.lmax)
    }

    /// Sampled distances, strictly increasing from zero.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Concentrations matching [`x`](Self::x).
    #[must_use]
    pub fn concentration(&self) -> &[f64] {
        &self.concentration
    }

    /// Iterates over `(x, concentration)` samples.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.concentration.iter().copied())
    }

    /// Whether the concentration fell below the threshold.
    ///
    /// `false` means the search stopped at its step cap.
    #[must_use]
    pub fn threshold_crossed(&self) -> bool {
        self.threshold_crossed
    }

    /// Whether the search gave up at its step cap.
    #[must_use]
    pub fn reached_step_cap(&self) -> bool {
        !self.threshold_crossed
    }

    /// Consumes the profile, returning `(lmax, x, concentration)`.
    #[must_use]
    pub fn into_parts(self) -> (f64, Vec<f64>, Vec<f64>) {
        (self.lmax, self.x, self.concentration)
    }
}
