use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

pub const DEFAULT_HALF_EXTENT: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// Axis-aligned region `[min.real, max.real] × [min.imag, max.imag]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    min: Complex,
    max: Complex,
}

impl ComplexRect {
    pub fn new(min: Complex, max: Complex) -> Result<Self, ComplexRectError> {
        let width = max.real - min.real;
        let height = max.imag - min.imag;

        // negated so that NaN extents are rejected too
        if !(width > 0.0) || !(height > 0.0) {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self { min, max })
    }

    /// Square region centred on the origin.
    pub fn centred_square(half_extent: f64) -> Result<Self, ComplexRectError> {
        Self::new(
            Complex::new(-half_extent, -half_extent),
            Complex::new(half_extent, half_extent),
        )
    }

    #[must_use]
    pub fn min(&self) -> Complex {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Complex {
        self.max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }
}

/// `[-2, 2] × [-2, 2]`
impl Default for ComplexRect {
    fn default() -> Self {
        Self {
            min: Complex::new(-DEFAULT_HALF_EXTENT, -DEFAULT_HALF_EXTENT),
            max: Complex::new(DEFAULT_HALF_EXTENT, DEFAULT_HALF_EXTENT),
        }
    }
}
