use crate::core::data::complex_rect::ComplexRectError;
use crate::core::fractals::cubic::errors::NewtonParamsError;
use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum SessionError {
    Region(ComplexRectError),
    Params(NewtonParamsError),
    WorkerSpawn(io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Region(err) => write!(f, "invalid sample region: {}", err),
            Self::Params(err) => write!(f, "invalid newton parameters: {}", err),
            Self::WorkerSpawn(err) => write!(f, "failed to start sweep worker: {}", err),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Region(err) => Some(err),
            Self::Params(err) => Some(err),
            Self::WorkerSpawn(err) => Some(err),
        }
    }
}

impl From<ComplexRectError> for SessionError {
    fn from(err: ComplexRectError) -> Self {
        Self::Region(err)
    }
}

impl From<NewtonParamsError> for SessionError {
    fn from(err: NewtonParamsError) -> Self {
        Self::Params(err)
    }
}
