use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelToGridIndexError {
    ExtentTooSmall { extent: u32 },
    PixelOutsideExtent { pixel: u32, extent: u32 },
}

impl fmt::Display for PixelToGridIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExtentTooSmall { extent } => {
                write!(f, "display extent must be at least 2 pixels, got {}", extent)
            }
            Self::PixelOutsideExtent { pixel, extent } => {
                write!(f, "pixel {} is outside the display extent 0..{}", pixel, extent)
            }
        }
    }
}

impl Error for PixelToGridIndexError {}

/// Nearest-neighbour downsampling from a display axis to a grid axis.
///
/// Maps pixel `0` to tick `0` and pixel `extent - 1` to tick `n_ticks`,
/// truncating in between. Stateless; applied per axis by a renderer.
pub fn pixel_to_grid_index(
    pixel: u32,
    extent: u32,
    n_ticks: u32,
) -> Result<u32, PixelToGridIndexError> {
    if extent < 2 {
        return Err(PixelToGridIndexError::ExtentTooSmall { extent });
    }

    if pixel >= extent {
        return Err(PixelToGridIndexError::PixelOutsideExtent { pixel, extent });
    }

    let index = u64::from(pixel) * u64::from(n_ticks) / u64::from(extent - 1);
    Ok(index as u32)
}
