use std::{error::Error, fmt};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum NewtonParamsError {
    ZeroMaxIterationError,
    InvalidEpsilon { epsilon: f64 },
}

impl fmt::Display for NewtonParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationError => {
                write!(f, "Maximum iteration must be greater than zero")
            }
            Self::InvalidEpsilon { epsilon } => {
                write!(f, "Epsilon must be a positive finite number, got {}", epsilon)
            }
        }
    }
}

impl Error for NewtonParamsError {}
