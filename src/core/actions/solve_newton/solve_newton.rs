use crate::core::actions::solve_newton::ports::complex_function::ComplexFunction;
use crate::core::data::complex::Complex;

/// How a single Newton solve ended.
///
/// `iterations` counts the updates applied before the solve stopped and is
/// never larger than the iteration cap.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SolveOutcome {
    /// `|f(value)|` dropped below epsilon.
    Converged { value: Complex, iterations: u32 },
    /// An update produced an infinite or NaN component.
    Diverged { iterations: u32 },
    /// The cap was reached without convergence.
    ExhaustedBudget { iterations: u32 },
}

impl SolveOutcome {
    #[must_use]
    pub fn iterations(&self) -> u32 {
        match *self {
            Self::Converged { iterations, .. }
            | Self::Diverged { iterations }
            | Self::ExhaustedBudget { iterations } => iterations,
        }
    }

    #[must_use]
    pub fn solution(&self) -> Option<Complex> {
        match *self {
            Self::Converged { value, .. } => Some(value),
            _ => None,
        }
    }
}

/// Newton iteration `z <- z - f(z) / f'(z)` from `initial_guess`.
///
/// Convergence is tested on `|f(z)|` before each update. A non-finite
/// iterate ends the solve at once; nothing is clamped or retried. A zero
/// derivative needs no special case since the IEEE quotient is non-finite.
pub fn solve_newton<F>(
    initial_guess: Complex,
    function: &F,
    max_iteration: u32,
    epsilon: f64,
) -> SolveOutcome
where
    F: ComplexFunction + ?Sized,
{
    let mut z = initial_guess;

    for iteration in 0..max_iteration {
        let fz = function.value(z);
        if fz.magnitude() < epsilon {
            return SolveOutcome::Converged {
                value: z,
                iterations: iteration,
            };
        }

        z = z - fz / function.slope(z);
        if !z.is_finite() {
            return SolveOutcome::Diverged {
                iterations: iteration,
            };
        }
    }

    SolveOutcome::ExhaustedBudget {
        iterations: max_iteration,
    }
}
