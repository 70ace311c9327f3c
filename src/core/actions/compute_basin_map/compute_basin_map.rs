use rayon::prelude::*;

use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::compute_basin_map::ports::basin_classifier::BasinClassifier;
use crate::core::actions::compute_basin_map::ports::progress_sink::ProgressSink;
use crate::core::data::sample_grid::SampleGrid;

/// Upper bound on the number of progress reports in one sweep.
pub const MAX_PROGRESS_REPORTS: usize = 100;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SweepOutcome {
    /// Every row was classified.
    Completed,
    /// Cancellation was observed before row `rows_completed`; that row and
    /// all later ones still hold whatever the previous sweep wrote.
    Cancelled { rows_completed: u32 },
}

/// Rows between two progress reports: `ceil(rows / 100)`.
#[must_use]
pub fn progress_stride(rows: usize) -> usize {
    rows.div_ceil(MAX_PROGRESS_REPORTS).max(1)
}

/// Classifies every point of `grid` in place, one row of constant `ii` at a time.
///
/// Before each row the cancel token is polled and, every [`progress_stride`]
/// rows, the fraction of rows done so far is reported. Cells within a row are
/// classified in parallel on rayon's pool; the row is complete before the next
/// poll. `None` is reported once the row loop exits, cancelled or not.
pub fn compute_basin_map<Cls, P, C>(
    grid: &SampleGrid,
    classifier: &Cls,
    progress: &P,
    cancel: &C,
) -> SweepOutcome
where
    Cls: BasinClassifier + Sync,
    P: ProgressSink + ?Sized,
    C: CancelToken + ?Sized,
{
    let rows = grid.rows();
    let stride = progress_stride(rows);
    let mut outcome = SweepOutcome::Completed;

    for ii in 0..=grid.n_ticks_im() {
        if cancel.is_cancelled() {
            outcome = SweepOutcome::Cancelled { rows_completed: ii };
            break;
        }

        if ii as usize % stride == 0 {
            progress.report(Some(ii as f64 / rows as f64));
        }

        (0..=grid.n_ticks_re()).into_par_iter().for_each(|ir| {
            let z0 = grid.index_to_complex(ir, ii);
            grid.store(ir, ii, classifier.classify(z0));
        });
    }

    progress.report(None);
    outcome
}
