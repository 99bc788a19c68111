use std::f64::consts::PI;

use crate::support::constraint::{ConstraintResult, StrictlyPositive};

const NEWTON_TOL: f64 = 1e-15;
const NEWTON_MAX_ITERS: usize = 100;

/// An n-point Gauss-Legendre rule on the reference interval `[-1, 1]`.
///
/// Nodes are stored in ascending order alongside their weights. The rule
/// integrates polynomials up to degree `2n - 1` exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussLegendre {
    nodes: Vec<f64>,
    weights: Vec<f64>,
}

impl GaussLegendre {
    /// Computes the nodes and weights of an `order`-point rule.
    ///
    /// Roots of the Legendre polynomial `P_n` are found by Newton iteration
    /// from Chebyshev-like initial guesses, evaluating `P_n` with the
    /// three-term recurrence. Only half the roots are computed; the rest
    /// follow from symmetry.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `order` is zero.
    pub fn new(order: usize) -> ConstraintResult<Self> {
        let n = StrictlyPositive::new(order)?.into_inner();
        let n_f = n as f64;

        let mut nodes = vec![0.0; n];
        let mut weights = vec![0.0; n];

        for i in 0..n.div_ceil(2) {
            let mut x = (PI * (i as f64 + 0.75) / (n_f + 0.5)).cos();
            let mut dp = legendre(n, x).1;

            for _ in 0..NEWTON_MAX_ITERS {
                let (p, d) = legendre(n, x);
                dp = d;
                let dx = p / d;
                x -= dx;
                if dx.abs() <= NEWTON_TOL {
                    break;
                }
            }

            let w = 2.0 / ((1.0 - x * x) * dp * dp);
            nodes[i] = -x;
            nodes[n - 1 - i] = x;
            weights[i] = w;
            weights[n - 1 - i] = w;
        }

        Ok(Self { nodes, weights })
    }

    /// Number of points in the rule.
    #[must_use]
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Nodes on `[-1, 1]`, ascending.
    #[must_use]
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    /// Weights matching [`nodes`](Self::nodes).
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Maps the rule onto `[a, b]`.
    ///
    /// Yields `(node, weight)` pairs with `node = (t·(b − a) + b + a) / 2` and
    /// `weight = w·(b − a) / 2` for each reference pair `(t, w)`.
    pub fn on_interval(&self, a: f64, b: f64) -> impl Iterator<Item = (f64, f64)> + '_ {
        let half = (b - a) / 2.0;
        self.nodes
            .iter()
            .zip(&self.weights)
            .map(move |(&t, &w)| ((t * (b - a) + b + a) / 2.0, w * half))
    }
}

/// Evaluates `P_n(x)` and its derivative `P_n'(x)`.
fn legendre(n: usize, x: f64) -> (f64, f64) {
    let mut p1 = 1.0;
    let mut p2 = 0.0;
    for j in 0..n {
        let j = j as f64;
        let p3 = p2;
        p2 = p1;
        p1 = ((2.0 * j + 1.0) * x * p2 - j * p3) / (j + 1.0);
    }
    let d = n as f64 * (x * p1 - p2) / (x * x - 1.0);
    (p1, d)
}
