use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

// implement Complex instead of using the num-complex trait for learning
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    pub const ONE: Self = Self {
        real: 1.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        Self {
            real: radius * angle.cos(),
            imag: radius * angle.sin(),
        }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.real.hypot(self.imag)
    }

    /// Neither component is infinite or NaN.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            real: -self.real,
            imag: -self.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, scale: f64) -> Self {
        Self {
            real: self.real * scale,
            imag: self.imag * scale,
        }
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;

    fn mul(self, z: Complex) -> Complex {
        z * self
    }
}

// Plain textbook quotient. A zero divisor yields inf/NaN components on purpose;
// the solver relies on seeing them.
impl Div for Complex {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        let denominator = other.magnitude_squared();

        Self {
            real: (self.real * other.real + self.imag * other.imag) / denominator,
            imag: (self.imag * other.real - self.real * other.imag) / denominator,
        }
    }
}

/// Root label format, e.g. `+ 1.00 − 0.87 i`.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = |value: f64| if value >= 0.0 { '+' } else { '−' };

        write!(
            f,
            "{} {:.2} {} {:.2} i",
            sign(self.real),
            self.real.abs(),
            sign(self.imag),
            self.imag.abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_magnitude_squared() {
        let c = Complex::new(3.0, 4.0);
        assert_eq!(c.magnitude_squared(), 25.0); // 3² + 4² = 25
    }

    #[test]
    fn test_magnitude_negative_components() {
        let c = Complex::new(-3.0, -4.0);
        assert_eq!(c.magnitude(), 5.0);
    }

    #[test]
    fn test_magnitude_zero() {
        assert_eq!(Complex::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_add_and_sub() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(-3.0, -7.0);

        assert_eq!(a + b, Complex::new(-2.0, -5.0));
        assert_eq!(a - b, Complex::new(4.0, 9.0));
        assert_eq!(-a, Complex::new(-1.0, -2.0));
    }

    #[test]
    fn test_mul() {
        // (1 + 2i) * (3 + 4i) = 3 + 4i + 6i + 8i² = 3 + 10i - 8 = -5 + 10i
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, 4.0);
        assert_eq!(a * b, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_scalar_mul_commutes() {
        let z = Complex::new(1.5, -2.0);
        assert_eq!(z * 2.0, Complex::new(3.0, -4.0));
        assert_eq!(2.0 * z, z * 2.0);
    }

    #[test]
    fn test_div() {
        // (-5 + 10i) / (3 + 4i) = 1 + 2i
        let a = Complex::new(-5.0, 10.0);
        let b = Complex::new(3.0, 4.0);
        assert_eq!(a / b, Complex::new(1.0, 2.0));
    }

    #[test]
    fn test_div_by_zero_is_not_finite() {
        let z = Complex::new(1.0, 1.0) / Complex::ZERO;
        assert!(!z.is_finite());
    }

    #[test]
    fn test_is_finite() {
        assert!(Complex::new(1e300, -1e300).is_finite());
        assert!(!Complex::new(f64::INFINITY, 0.0).is_finite());
        assert!(!Complex::new(0.0, f64::NAN).is_finite());
    }

    #[test]
    fn test_from_polar_cube_root_of_unity() {
        let omega = Complex::from_polar(1.0, 2.0 * PI / 3.0);
        let cube = omega * omega * omega;

        assert!((cube - Complex::ONE).magnitude() < 1e-14);
    }

    #[test]
    fn test_display_root_label() {
        assert_eq!(Complex::new(1.0, 0.0).to_string(), "+ 1.00 + 0.00 i");
        assert_eq!(Complex::new(-0.5, -0.866).to_string(), "− 0.50 − 0.87 i");
    }
}
