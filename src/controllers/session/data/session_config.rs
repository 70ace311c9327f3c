use crate::controllers::session::errors::SessionError;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::fractals::cubic::params::NewtonParams;

pub const DEFAULT_TICKS: u32 = 512;

/// Fixed sampling setup of a [`Session`](crate::Session): the region, its
/// resolution and the Newton parameters every sweep uses.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SessionConfig {
    region: ComplexRect,
    n_ticks_re: u32,
    n_ticks_im: u32,
    params: NewtonParams,
}

impl SessionConfig {
    #[must_use]
    pub fn new(region: ComplexRect, n_ticks_re: u32, n_ticks_im: u32, params: NewtonParams) -> Self {
        Self {
            region,
            n_ticks_re,
            n_ticks_im,
            params,
        }
    }

    /// Square region centred on the origin with `n_ticks` ticks per axis.
    pub fn square(
        half_extent: f64,
        n_ticks: u32,
        max_iteration: u32,
        epsilon: f64,
    ) -> Result<Self, SessionError> {
        let region = ComplexRect::centred_square(half_extent)?;
        let params = NewtonParams::new(max_iteration, epsilon)?;

        Ok(Self::new(region, n_ticks, n_ticks, params))
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    #[must_use]
    pub fn n_ticks_re(&self) -> u32 {
        self.n_ticks_re
    }

    #[must_use]
    pub fn n_ticks_im(&self) -> u32 {
        self.n_ticks_im
    }

    #[must_use]
    pub fn params(&self) -> NewtonParams {
        self.params
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            region: ComplexRect::default(),
            n_ticks_re: DEFAULT_TICKS,
            n_ticks_im: DEFAULT_TICKS,
            params: NewtonParams::default(),
        }
    }
}
