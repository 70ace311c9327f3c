use crate::core::data::basin::{Basin, BasinClassification};
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use std::sync::atomic::{AtomicU64, Ordering};

/// Per-basin cell totals, see [`SampleGrid::basin_counts`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct BasinCounts {
    pub unknown: usize,
    pub first: usize,
    pub second: usize,
    pub third: usize,
}

/// A regular `(n_ticks_re + 1) × (n_ticks_im + 1)` sample grid over a region.
///
/// Cells are independent atomic words, so a sweep can write while any number
/// of readers look at the grid without a lock. A reader may see a mix of old
/// and new cells mid-sweep; it never sees a torn cell. The buffer is only
/// reallocated through [`SampleGrid::resize`], which needs exclusive access
/// and therefore cannot overlap a sweep.
#[derive(Debug)]
pub struct SampleGrid {
    region: ComplexRect,
    n_ticks_re: u32,
    n_ticks_im: u32,
    cells: Box<[AtomicU64]>,
}

fn allocate_cells(n_ticks_re: u32, n_ticks_im: u32) -> Box<[AtomicU64]> {
    let len = (n_ticks_re as usize + 1) * (n_ticks_im as usize + 1);
    (0..len).map(|_| AtomicU64::new(0)).collect()
}

fn index_to_axis(index: u32, n_ticks: u32, min: f64, extent: f64) -> f64 {
    if n_ticks == 0 {
        return min;
    }
    extent * f64::from(index) / f64::from(n_ticks) + min
}

fn axis_to_nearest_index(value: f64, n_ticks: u32, min: f64, extent: f64) -> Option<u32> {
    let index = (f64::from(n_ticks) * (value - min) / extent).round();

    // also rejects NaN
    if (0.0..=f64::from(n_ticks)).contains(&index) {
        Some(index as u32)
    } else {
        None
    }
}

impl SampleGrid {
    #[must_use]
    pub fn new(region: ComplexRect, n_ticks_re: u32, n_ticks_im: u32) -> Self {
        Self {
            region,
            n_ticks_re,
            n_ticks_im,
            cells: allocate_cells(n_ticks_re, n_ticks_im),
        }
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

    /// Number of samples along the real axis.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.n_ticks_re as usize + 1
    }

    /// Number of samples along the imaginary axis.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.n_ticks_im as usize + 1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Changes the tick counts. The buffer is kept when they are unchanged;
    /// otherwise it is reallocated and every cell reads as unknown again.
    pub fn resize(&mut self, n_ticks_re: u32, n_ticks_im: u32) {
        if n_ticks_re == self.n_ticks_re && n_ticks_im == self.n_ticks_im {
            return;
        }

        self.n_ticks_re = n_ticks_re;
        self.n_ticks_im = n_ticks_im;
        self.cells = allocate_cells(n_ticks_re, n_ticks_im);
    }

    /// Linear map from grid indices to the sample point they stand for.
    /// A zero tick count pins that axis to the region minimum.
    #[must_use]
    pub fn index_to_complex(&self, ir: u32, ii: u32) -> Complex {
        let min = self.region.min();

        Complex::new(
            index_to_axis(ir, self.n_ticks_re, min.real, self.region.width()),
            index_to_axis(ii, self.n_ticks_im, min.imag, self.region.height()),
        )
    }

    /// Inverse of [`SampleGrid::index_to_complex`], rounded to the nearest tick.
    /// Returns `None` when the point rounds to a tick outside the grid.
    #[must_use]
    pub fn complex_to_nearest_indices(&self, z: Complex) -> Option<(u32, u32)> {
        let min = self.region.min();

        let ir = axis_to_nearest_index(z.real, self.n_ticks_re, min.real, self.region.width())?;
        let ii = axis_to_nearest_index(z.imag, self.n_ticks_im, min.imag, self.region.height())?;

        Some((ir, ii))
    }

    fn offset(&self, ir: u32, ii: u32) -> Option<usize> {
        if ir > self.n_ticks_re || ii > self.n_ticks_im {
            return None;
        }
        Some(ii as usize * self.columns() + ir as usize)
    }

    #[must_use]
    pub fn cell(&self, ir: u32, ii: u32) -> Option<BasinClassification> {
        let offset = self.offset(ir, ii)?;
        Some(BasinClassification::from_bits(
            self.cells[offset].load(Ordering::Relaxed),
        ))
    }

    /// Out-of-range indices are ignored.
    pub(crate) fn store(&self, ir: u32, ii: u32, classification: BasinClassification) {
        if let Some(offset) = self.offset(ir, ii) {
            self.cells[offset].store(classification.to_bits(), Ordering::Relaxed);
        }
    }

    /// One row of constant `ii`, ordered by `ir`.
    #[must_use]
    pub fn row(&self, ii: u32) -> Option<Vec<BasinClassification>> {
        let start = self.offset(0, ii)?;
        Some(
            self.cells[start..start + self.columns()]
                .iter()
                .map(|cell| BasinClassification::from_bits(cell.load(Ordering::Relaxed)))
                .collect(),
        )
    }

    /// Copy of every cell, row-major by `ii`.
    #[must_use]
    pub fn snapshot(&self) -> Vec<BasinClassification> {
        self.cells
            .iter()
            .map(|cell| BasinClassification::from_bits(cell.load(Ordering::Relaxed)))
            .collect()
    }

    #[must_use]
    pub fn basin_counts(&self) -> BasinCounts {
        self.snapshot()
            .into_iter()
            .fold(BasinCounts::default(), |mut counts, cell| {
                match cell.basin {
                    Basin::Unknown => counts.unknown += 1,
                    Basin::First => counts.first += 1,
                    Basin::Second => counts.second += 1,
                    Basin::Third => counts.third += 1,
                }
                counts
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square_grid(half_extent: f64, n_ticks: u32) -> SampleGrid {
        let region = ComplexRect::centred_square(half_extent).unwrap();
        SampleGrid::new(region, n_ticks, n_ticks)
    }

    #[test]
    fn test_dimensions_match_tick_counts() {
        let region = ComplexRect::centred_square(2.0).unwrap();
        let grid = SampleGrid::new(region, 4, 2);

        assert_eq!(grid.columns(), 5);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.len(), 15);
        assert!(grid.snapshot().iter().all(|c| *c == BasinClassification::default()));
    }

    #[test]
    fn test_index_to_complex_corners_and_centre() {
        let grid = square_grid(2.0, 4);

        assert_eq!(grid.index_to_complex(0, 0), Complex::new(-2.0, -2.0));
        assert_eq!(grid.index_to_complex(4, 4), Complex::new(2.0, 2.0));
        assert_eq!(grid.index_to_complex(2, 2), Complex::ZERO);
        assert_eq!(grid.index_to_complex(3, 1), Complex::new(1.0, -1.0));
    }

    #[test]
    fn test_zero_ticks_pin_axis_to_minimum() {
        let region = ComplexRect::centred_square(2.0).unwrap();
        let grid = SampleGrid::new(region, 0, 0);

        assert_eq!(grid.len(), 1);
        assert_eq!(grid.index_to_complex(0, 0), Complex::new(-2.0, -2.0));
        assert_eq!(grid.complex_to_nearest_indices(Complex::new(-2.0, -2.0)), Some((0, 0)));
    }

    #[test]
    fn test_nearest_indices_outside_region() {
        let grid = square_grid(2.0, 8);

        assert_eq!(grid.complex_to_nearest_indices(Complex::new(3.0, 0.0)), None);
        assert_eq!(grid.complex_to_nearest_indices(Complex::new(0.0, -2.5)), None);
        assert_eq!(grid.complex_to_nearest_indices(Complex::new(f64::NAN, 0.0)), None);
        // within half a tick of the edge still rounds onto the grid
        assert_eq!(grid.complex_to_nearest_indices(Complex::new(2.2, 0.0)), Some((8, 4)));
    }

    #[test]
    fn test_store_and_read_cell() {
        let grid = square_grid(1.0, 3);
        let classification = BasinClassification::new(Basin::Second, 7);

        grid.store(1, 2, classification);

        assert_eq!(grid.cell(1, 2), Some(classification));
        assert_eq!(grid.cell(2, 1), Some(BasinClassification::default()));
        assert_eq!(grid.row(2).unwrap()[1], classification);
        assert_eq!(grid.snapshot()[2 * 4 + 1], classification);
    }

    #[test]
    fn test_out_of_range_access_is_rejected() {
        let grid = square_grid(1.0, 3);

        grid.store(4, 0, BasinClassification::new(Basin::First, 1));

        assert_eq!(grid.cell(4, 0), None);
        assert_eq!(grid.cell(0, 4), None);
        assert_eq!(grid.row(4), None);
        assert_eq!(grid.basin_counts().unknown, 16);
    }

    #[test]
    fn test_resize_keeps_buffer_when_ticks_unchanged() {
        let mut grid = square_grid(1.0, 3);
        grid.store(0, 0, BasinClassification::new(Basin::Third, 2));

        grid.resize(3, 3);
        assert_eq!(grid.cell(0, 0), Some(BasinClassification::new(Basin::Third, 2)));

        grid.resize(5, 1);
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.cell(0, 0), Some(BasinClassification::default()));
    }

    #[test]
    fn test_basin_counts() {
        let grid = square_grid(1.0, 1);
        grid.store(0, 0, BasinClassification::new(Basin::First, 0));
        grid.store(1, 0, BasinClassification::new(Basin::First, 3));
        grid.store(0, 1, BasinClassification::new(Basin::Third, 1));

        assert_eq!(
            grid.basin_counts(),
            BasinCounts {
                unknown: 1,
                first: 2,
                second: 0,
                third: 1,
            }
        );
    }

    proptest! {
        #[test]
        fn index_mapping_round_trips(
            n_ticks_re in 0u32..700,
            n_ticks_im in 0u32..700,
            min_re in -10.0f64..10.0,
            min_im in -10.0f64..10.0,
            width in 0.01f64..20.0,
            height in 0.01f64..20.0,
            ir_seed in any::<u32>(),
            ii_seed in any::<u32>(),
        ) {
            let region = ComplexRect::new(
                Complex::new(min_re, min_im),
                Complex::new(min_re + width, min_im + height),
            ).unwrap();
            let grid = SampleGrid::new(region, n_ticks_re, n_ticks_im);

            let boundary = [
                (0, 0),
                (n_ticks_re, n_ticks_im),
                (ir_seed % (n_ticks_re + 1), ii_seed % (n_ticks_im + 1)),
            ];
            for (ir, ii) in boundary {
                let z = grid.index_to_complex(ir, ii);
                prop_assert_eq!(grid.complex_to_nearest_indices(z), Some((ir, ii)));
            }
        }
    }
}
