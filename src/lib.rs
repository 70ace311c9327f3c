mod controllers;
mod core;

pub use controllers::session::{
    ChannelPort, Session, SessionConfig, SessionError, SessionPort, SweepEvent,
};
pub use crate::core::actions::cancellation::{CancelToken, GenerationToken, NeverCancel};
pub use crate::core::actions::compute_basin_map::compute_basin_map::{
    MAX_PROGRESS_REPORTS, SweepOutcome, compute_basin_map, progress_stride,
};
pub use crate::core::actions::compute_basin_map::ports::basin_classifier::BasinClassifier;
pub use crate::core::actions::compute_basin_map::ports::progress_sink::ProgressSink;
pub use crate::core::actions::solve_newton::ports::complex_function::ComplexFunction;
pub use crate::core::actions::solve_newton::solve_newton::{SolveOutcome, solve_newton};
pub use crate::core::data::basin::{Basin, BasinClassification};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::root_set::{RootIndex, RootSet};
pub use crate::core::data::sample_grid::{BasinCounts, SampleGrid};
pub use crate::core::fractals::cubic::algorithm::CubicNewton;
pub use crate::core::fractals::cubic::errors::NewtonParamsError;
pub use crate::core::fractals::cubic::params::NewtonParams;
pub use crate::core::util::pixel_to_grid_index::{PixelToGridIndexError, pixel_to_grid_index};
