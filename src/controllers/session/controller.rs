use crate::controllers::session::data::session_config::SessionConfig;
use crate::controllers::session::errors::SessionError;
use crate::controllers::session::events::sweep_event::SweepEvent;
use crate::controllers::session::ports::session_port::SessionPort;
use crate::core::actions::cancellation::GenerationToken;
use crate::core::actions::compute_basin_map::compute_basin_map::{
    SweepOutcome, compute_basin_map,
};
use crate::core::data::complex::Complex;
use crate::core::data::root_set::{RootIndex, RootSet};
use crate::core::data::sample_grid::SampleGrid;
use crate::core::fractals::cubic::algorithm::CubicNewton;
use crate::core::fractals::cubic::params::NewtonParams;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

#[derive(Debug, Copy, Clone)]
struct SweepRequest {
    generation: u64,
    roots: RootSet,
}

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<SweepRequest>>,
    wake: Condvar,
    shutdown: AtomicBool,
    grid: Arc<SampleGrid>,
    params: NewtonParams,
    port: Arc<dyn SessionPort>,
}

impl SharedState {
    /// Reports a request that was replaced or cancelled before the worker
    /// picked it up. Called with the request lock held so it is ordered
    /// before any event of the request that replaced it.
    fn present_dropped(&self, dropped: Option<SweepRequest>) {
        if let Some(SweepRequest { generation, .. }) = dropped {
            tracing::trace!(generation, "pending sweep dropped");
            self.port.present(SweepEvent::Finished {
                generation,
                outcome: SweepOutcome::Cancelled { rows_completed: 0 },
                duration: Duration::ZERO,
            });
        }
    }

    fn lock_request(&self) -> MutexGuard<'_, Option<SweepRequest>> {
        self.latest_request.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("sweep request lock poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

/// Owns the current roots and the sample grid, and keeps one background
/// worker sweeping the grid for the newest roots.
///
/// Every root change bumps a generation counter. A running sweep treats a
/// generation change as its cancellation signal and stops after its current
/// row; the worker then starts the newest request. Nothing here blocks on
/// the old sweep finishing.
pub struct Session {
    shared: Arc<SharedState>,
    roots: RootSet,
    worker: Option<JoinHandle<()>>,
}

impl Session {
    /// Builds the grid, starts the worker and schedules a sweep for the
    /// default roots.
    pub fn new(config: SessionConfig, port: Arc<dyn SessionPort>) -> Result<Self, SessionError> {
        let grid = SampleGrid::new(config.region(), config.n_ticks_re(), config.n_ticks_im());

        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            grid: Arc::new(grid),
            params: config.params(),
            port,
        });

        let worker_shared = Arc::clone(&shared);
        let worker = thread::Builder::new()
            .name("basin-sweep".into())
            .spawn(move || Self::worker_loop(&worker_shared))
            .map_err(SessionError::WorkerSpawn)?;

        let mut session = Self {
            shared,
            roots: RootSet::default(),
            worker: Some(worker),
        };
        session.restore_defaults();

        Ok(session)
    }

    #[must_use]
    pub fn roots(&self) -> RootSet {
        self.roots
    }

    #[must_use]
    pub fn params(&self) -> NewtonParams {
        self.shared.params
    }

    /// The grid being swept. Cells may be read at any time; mid-sweep they
    /// are a mix of the previous and the current sweep.
    #[must_use]
    pub fn grid(&self) -> Arc<SampleGrid> {
        Arc::clone(&self.shared.grid)
    }

    /// Replaces the roots, cancels the running sweep and schedules a new one.
    /// Returns the generation of the new sweep.
    ///
    /// Every generation returned here gets exactly one `Finished` event while
    /// the session is running. A request superseded before the worker starts
    /// it finishes as `Cancelled { rows_completed: 0 }` without progress
    /// events.
    pub fn set_roots(&mut self, roots: RootSet) -> u64 {
        self.roots = roots;
        self.submit(roots)
    }

    pub fn set_root(&mut self, index: RootIndex, value: Complex) -> u64 {
        self.set_roots(self.roots.with_root(index, value))
    }

    pub fn set_root_real(&mut self, index: RootIndex, real: f64) -> u64 {
        self.set_roots(self.roots.with_real(index, real))
    }

    pub fn set_root_imag(&mut self, index: RootIndex, imag: f64) -> u64 {
        self.set_roots(self.roots.with_imag(index, imag))
    }

    /// Back to the roots of `z³ - 1`, with a fresh sweep.
    pub fn restore_defaults(&mut self) -> u64 {
        self.set_roots(RootSet::default())
    }

    /// Cancels the running sweep and drops any pending one without
    /// scheduling a replacement.
    pub fn cancel(&self) {
        self.shared.generation.fetch_add(1, Ordering::SeqCst);

        let mut pending = self.shared.lock_request();
        self.shared.present_dropped(pending.take());
    }

    /// Generation of the most recent root change or cancellation.
    #[must_use]
    pub fn current_generation(&self) -> u64 {
        self.shared.generation.load(Ordering::Acquire)
    }

    /// Generation of the last sweep that classified every row; 0 if none has.
    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    /// Stops the worker after its current row and joins it. A request still
    /// pending at this point never runs and gets no events.
    pub fn shutdown(&mut self) {
        {
            // under the lock so the worker cannot miss it between check and wait
            let _pending = self.shared.lock_request();
            self.shared.shutdown.store(true, Ordering::Release);
        }
        self.shared.wake.notify_all();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                tracing::warn!("sweep worker panicked");
            }
        }
    }

    fn submit(&self, roots: RootSet) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut pending = self.shared.lock_request();
            let dropped = pending.replace(SweepRequest { generation, roots });
            self.shared.present_dropped(dropped);
        }
        self.shared.wake.notify_one();

        tracing::trace!(generation, "sweep requested");
        generation
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let request = {
                let mut guard = shared.lock_request();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(request) = guard.take() {
                        break request;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            Self::run_sweep(shared, request);
        }
    }

    fn run_sweep(shared: &SharedState, request: SweepRequest) {
        let SweepRequest { generation, roots } = request;

        let cancel_token = GenerationToken::new(generation, &shared.generation, &shared.shutdown);
        let report_progress = |progress: Option<f64>| {
            tracing::trace!(generation, ?progress, "sweep progress");
            shared
                .port
                .present(SweepEvent::Progress { generation, progress });
        };

        tracing::debug!(
            generation,
            rows = shared.grid.rows(),
            columns = shared.grid.columns(),
            "sweep started"
        );

        let newton = CubicNewton::new(roots, shared.params);
        let start = Instant::now();
        let outcome = compute_basin_map(&shared.grid, &newton, &report_progress, &cancel_token);
        let duration = start.elapsed();

        if outcome == SweepOutcome::Completed {
            shared
                .last_completed_generation
                .store(generation, Ordering::Release);
        }

        tracing::debug!(generation, ?outcome, ?duration, "sweep finished");

        shared.port.present(SweepEvent::Finished {
            generation,
            outcome,
            duration,
        });
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.shutdown();
    }
}
