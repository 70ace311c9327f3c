use crate::core::fractals::cubic::errors::NewtonParamsError;

pub const DEFAULT_MAX_ITERATION: u32 = 32;
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Iteration cap and tolerance shared by every solve of a sweep.
///
/// `epsilon` bounds both `|f(z)|` for convergence and `|z - root|` when the
/// converged value is matched against the roots.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NewtonParams {
    max_iteration: u32,
    epsilon: f64,
}

impl NewtonParams {
    pub fn new(max_iteration: u32, epsilon: f64) -> Result<Self, NewtonParamsError> {
        if max_iteration == 0 {
            return Err(NewtonParamsError::ZeroMaxIterationError);
        }

        if !(epsilon > 0.0) || !epsilon.is_finite() {
            return Err(NewtonParamsError::InvalidEpsilon { epsilon });
        }

        Ok(Self {
            max_iteration,
            epsilon,
        })
    }

    #[must_use]
    pub fn max_iteration(&self) -> u32 {
        self.max_iteration
    }

    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Default for NewtonParams {
    fn default() -> Self {
        Self {
            max_iteration: DEFAULT_MAX_ITERATION,
            epsilon: DEFAULT_EPSILON,
        }
    }
}
