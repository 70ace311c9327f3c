use crate::core::data::complex::Complex;

/// A complex-valued function together with its derivative.
pub trait ComplexFunction {
    /// f(z)
    fn value(&self, z: Complex) -> Complex;

    /// f'(z)
    fn slope(&self, z: Complex) -> Complex;
}
