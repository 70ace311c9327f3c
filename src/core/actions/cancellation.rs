use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Cooperative cancellation signal polled by long-running sweeps.
///
/// Polling is best-effort: a sweep checks once per grid row, so work already
/// under way for the current row always finishes.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

/// For one-off sweeps that must run to the last row.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Cancelled as soon as `current` moves past the generation the sweep was
/// started for, or `shutdown` is raised.
#[derive(Debug, Clone, Copy)]
pub struct GenerationToken<'a> {
    generation: u64,
    current: &'a AtomicU64,
    shutdown: &'a AtomicBool,
}

impl<'a> GenerationToken<'a> {
    #[must_use]
    pub fn new(generation: u64, current: &'a AtomicU64, shutdown: &'a AtomicBool) -> Self {
        Self {
            generation,
            current,
            shutdown,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl CancelToken for GenerationToken<'_> {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.shutdown.load(Ordering::Relaxed)
            || self.current.load(Ordering::Relaxed) != self.generation
    }
}
