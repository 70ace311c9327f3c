use crate::core::actions::compute_basin_map::compute_basin_map::SweepOutcome;
use std::time::Duration;

/// Notifications a [`Session`](crate::Session) sends to its port.
///
/// Every event carries the generation of the root change that started the
/// sweep, so a consumer can ignore events from superseded sweeps.
#[derive(Debug, Clone, PartialEq)]
pub enum SweepEvent {
    /// `Some(fraction)` while rows are being classified, then `None` once
    /// the row loop has exited.
    Progress {
        generation: u64,
        progress: Option<f64>,
    },
    /// The background sweep has fully terminated.
    Finished {
        generation: u64,
        outcome: SweepOutcome,
        duration: Duration,
    },
}

impl SweepEvent {
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Self::Progress { generation, .. } | Self::Finished { generation, .. } => *generation,
        }
    }
}
