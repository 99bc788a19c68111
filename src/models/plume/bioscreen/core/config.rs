use twine_solvers::equation::bisection;

/// How the plume length is located along the centerline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Unit steps from the source until the first sample below the threshold.
    ///
    /// Lmax is always a whole number of steps.
    #[default]
    Marching,

    /// Marching, followed by bisection inside the final step.
    ///
    /// The sampled curve is unchanged; only Lmax moves to the fractional
    /// crossing.
    Refined,
}

/// Search configuration for a BIOSCREEN-AT solve.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Search strategy.
    pub mode: SearchMode,

    /// Maximum bisection iterations in [`SearchMode::Refined`].
    pub max_iters: usize,

    /// Absolute tolerance on the crossing distance.
    pub x_tol: f64,

    /// Absolute tolerance on the concentration residual (`C(x) − Cthres`).
    pub residual_tol: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: SearchMode::default(),
            max_iters: 100,
            x_tol: 1e-9,
            residual_tol: 0.0,
        }
    }
}

impl SearchConfig {
    /// Configuration for the refined search with default tolerances.
    #[must_use]
    pub fn refined() -> Self {
        Self {
            mode: SearchMode::Refined,
            ..Self::default()
        }
    }

    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.x_tol,
            x_rel_tol: 0.0,
            residual_tol: self.residual_tol,
        }
    }
}
