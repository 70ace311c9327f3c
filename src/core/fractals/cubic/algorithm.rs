use crate::core::actions::compute_basin_map::ports::basin_classifier::BasinClassifier;
use crate::core::actions::solve_newton::ports::complex_function::ComplexFunction;
use crate::core::actions::solve_newton::solve_newton::{SolveOutcome, solve_newton};
use crate::core::data::basin::{Basin, BasinClassification};
use crate::core::data::complex::Complex;
use crate::core::data::root_set::{RootIndex, RootSet};
use crate::core::fractals::cubic::params::NewtonParams;

/// Newton's method for the cubic `(z - r1)(z - r2)(z - r3)` with explicit roots.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubicNewton {
    roots: RootSet,
    params: NewtonParams,
    // derivative coefficients: f'(z) = 3z² - 2·sum·z + pairwise
    sum: Complex,
    pairwise: Complex,
}

impl CubicNewton {
    #[must_use]
    pub fn new(roots: RootSet, params: NewtonParams) -> Self {
        Self {
            roots,
            params,
            sum: roots.sum(),
            pairwise: roots.pairwise_product_sum(),
        }
    }

    #[must_use]
    pub fn roots(&self) -> RootSet {
        self.roots
    }

    #[must_use]
    pub fn params(&self) -> NewtonParams {
        self.params
    }

    #[must_use]
    pub fn solve(&self, z0: Complex) -> SolveOutcome {
        solve_newton(
            z0,
            self,
            self.params.max_iteration(),
            self.params.epsilon(),
        )
    }

    /// First root (in [`RootIndex::ALL`] order) within epsilon of `value`.
    fn matching_root(&self, value: Complex) -> Option<RootIndex> {
        RootIndex::ALL
            .into_iter()
            .find(|&index| (value - self.roots.root(index)).magnitude() < self.params.epsilon())
    }
}

impl ComplexFunction for CubicNewton {
    #[inline]
    fn value(&self, z: Complex) -> Complex {
        let [r1, r2, r3] = self.roots.roots();
        (z - r1) * (z - r2) * (z - r3)
    }

    #[inline]
    fn slope(&self, z: Complex) -> Complex {
        3.0 * z * z - 2.0 * self.sum * z + self.pairwise
    }
}

impl BasinClassifier for CubicNewton {
    fn classify(&self, z0: Complex) -> BasinClassification {
        let outcome = self.solve(z0);

        match outcome.solution().and_then(|value| self.matching_root(value)) {
            Some(index) => BasinClassification::new(Basin::from(index), outcome.iterations()),
            None => BasinClassification::unknown(outcome.iterations()),
        }
    }
}
