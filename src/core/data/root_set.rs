use crate::core::data::complex::Complex;
use std::f64::consts::PI;

/// Names one of the three roots of the target cubic.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RootIndex {
    First,
    Second,
    Third,
}

impl RootIndex {
    /// Classification order. Earlier entries win ties.
    pub const ALL: [RootIndex; 3] = [RootIndex::First, RootIndex::Second, RootIndex::Third];
}

/// The three roots `r1, r2, r3` of `f(z) = (z - r1)(z - r2)(z - r3)`.
///
/// Values are replaced wholesale; every `with_*` method returns a new set.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RootSet {
    first: Complex,
    second: Complex,
    third: Complex,
}

impl RootSet {
    #[must_use]
    pub const fn new(first: Complex, second: Complex, third: Complex) -> Self {
        Self {
            first,
            second,
            third,
        }
    }

    /// Roots of `z³ - 1`: one and the two primitive cube roots of unity.
    #[must_use]
    pub fn unity() -> Self {
        Self {
            first: Complex::ONE,
            second: Complex::from_polar(1.0, 2.0 * PI / 3.0),
            third: Complex::from_polar(1.0, -2.0 * PI / 3.0),
        }
    }

    #[must_use]
    pub fn root(&self, index: RootIndex) -> Complex {
        match index {
            RootIndex::First => self.first,
            RootIndex::Second => self.second,
            RootIndex::Third => self.third,
        }
    }

    #[must_use]
    pub fn roots(&self) -> [Complex; 3] {
        [self.first, self.second, self.third]
    }

    #[must_use]
    pub fn with_root(mut self, index: RootIndex, value: Complex) -> Self {
        match index {
            RootIndex::First => self.first = value,
            RootIndex::Second => self.second = value,
            RootIndex::Third => self.third = value,
        }
        self
    }

    #[must_use]
    pub fn with_real(self, index: RootIndex, real: f64) -> Self {
        let imag = self.root(index).imag;
        self.with_root(index, Complex::new(real, imag))
    }

    #[must_use]
    pub fn with_imag(self, index: RootIndex, imag: f64) -> Self {
        let real = self.root(index).real;
        self.with_root(index, Complex::new(real, imag))
    }

    #[must_use]
    pub fn sum(&self) -> Complex {
        self.first + self.second + self.third
    }

    /// `r1·r2 + r2·r3 + r3·r1`
    #[must_use]
    pub fn pairwise_product_sum(&self) -> Complex {
        self.first * self.second + self.second * self.third + self.third * self.first
    }
}

impl Default for RootSet {
    fn default() -> Self {
        Self::unity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unity_roots_cube_to_one() {
        for root in RootSet::unity().roots() {
            let cube = root * root * root;
            assert!((cube - Complex::ONE).magnitude() < 1e-14);
        }
    }

    #[test]
    fn test_unity_first_root_is_exactly_one() {
        assert_eq!(RootSet::unity().root(RootIndex::First), Complex::ONE);
    }

    #[test]
    fn test_unity_roots_are_conjugates() {
        let roots = RootSet::unity();
        let second = roots.root(RootIndex::Second);
        let third = roots.root(RootIndex::Third);

        assert_eq!(second.real, third.real);
        assert_eq!(second.imag, -third.imag);
    }

    #[test]
    fn test_with_root_replaces_only_that_root() {
        let roots = RootSet::unity().with_root(RootIndex::Second, Complex::new(5.0, 6.0));

        assert_eq!(roots.root(RootIndex::First), Complex::ONE);
        assert_eq!(roots.root(RootIndex::Second), Complex::new(5.0, 6.0));
        assert_eq!(roots.root(RootIndex::Third), RootSet::unity().root(RootIndex::Third));
    }

    #[test]
    fn test_component_setters_keep_other_component() {
        let roots = RootSet::new(Complex::new(1.0, 2.0), Complex::ZERO, Complex::ZERO)
            .with_real(RootIndex::First, -3.0)
            .with_imag(RootIndex::Third, 0.5);

        assert_eq!(roots.root(RootIndex::First), Complex::new(-3.0, 2.0));
        assert_eq!(roots.root(RootIndex::Third), Complex::new(0.0, 0.5));
    }

    #[test]
    fn test_symmetric_functions_of_unity_roots() {
        let roots = RootSet::unity();

        assert!(roots.sum().magnitude() < 1e-14);
        assert!(roots.pairwise_product_sum().magnitude() < 1e-14);
    }
}
