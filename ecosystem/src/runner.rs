// runner.rs - Cancellable repeating step task on a tokio runtime
//
// Stopping is strict: `RunHandle::stop` clears the running flag under the
// engine lock and aborts the task. A step that already holds the lock
// finishes and counts; no step starts after `stop` returns.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::engine::Ecosystem;
use crate::error::{EcosystemError, Result};

pub type SharedEcosystem = Arc<Mutex<Ecosystem>>;

pub fn shared(ecosystem: Ecosystem) -> SharedEcosystem {
    Arc::new(Mutex::new(ecosystem))
}

/// Locks the engine, recovering from poisoning. Engine operations validate
/// before mutating, so a panicking holder cannot leave a half-written grid.
pub fn lock(engine: &SharedEcosystem) -> MutexGuard<'_, Ecosystem> {
    engine.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle to a running step loop.
pub struct RunHandle {
    engine: SharedEcosystem,
    task: JoinHandle<()>,
}

impl RunHandle {
    pub fn stop(self) {
        lock(&self.engine).set_running(false);
        self.task.abort();
        info!("simulation stopped");
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Marks the engine running and steps it every `period` until stopped.
/// The first step happens one full period after the call.
///
/// Returns `None` when the engine is already running: the loop driving it
/// keeps going and no second loop is spawned.
pub fn start(engine: &SharedEcosystem, period: Duration, runtime: &Handle) -> Result<Option<RunHandle>> {
    if period.is_zero() {
        return Err(EcosystemError::invalid("step interval must be positive"));
    }
    {
        let mut eco = lock(engine);
        if eco.is_running() {
            debug!("start ignored, already running");
            return Ok(None);
        }
        eco.set_running(true);
    }
    info!(period_ms = period.as_millis() as u64, "simulation started");

    let task = runtime.spawn(step_loop(Arc::clone(engine), period));
    Ok(Some(RunHandle { engine: Arc::clone(engine), task }))
}

async fn step_loop(engine: SharedEcosystem, period: Duration) {
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let stepped = {
            let mut eco = lock(&engine);
            let stepped = eco.tick();
            if stepped {
                debug!(generation = eco.generation(), active = eco.active_count(), "generation advanced");
            }
            stepped
        };

        if !stepped {
            break;
        }
    }
}

/// Owns at most one step loop for an engine, making start and stop idempotent.
pub struct Runner {
    engine: SharedEcosystem,
    period: Duration,
    runtime: Handle,
    active: Option<RunHandle>,
}

impl Runner {
    pub fn new(engine: SharedEcosystem, period: Duration, runtime: Handle) -> Result<Self> {
        if period.is_zero() {
            return Err(EcosystemError::invalid("step interval must be positive"));
        }
        Ok(Self { engine, period, runtime, active: None })
    }

    pub fn engine(&self) -> &SharedEcosystem {
        &self.engine
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        lock(&self.engine).is_running()
    }

    pub fn start(&mut self) -> Result<()> {
        if self.active.as_ref().is_some_and(|run| !run.is_finished()) && self.is_running() {
            return Ok(());
        }
        if let Some(stale) = self.active.take() {
            stale.stop();
        }
        self.active = start(&self.engine, self.period, &self.runtime)?;
        Ok(())
    }

    pub fn stop(&mut self) {
        match self.active.take() {
            Some(run) => run.stop(),
            None => lock(&self.engine).set_running(false),
        }
    }

    /// Start when stopped, stop when running.
    pub fn toggle(&mut self) -> Result<()> {
        if self.is_running() {
            self.stop();
            Ok(())
        } else {
            self.start()
        }
    }
}

impl Drop for Runner {
    fn drop(&mut self) {
        if let Some(run) = self.active.take() {
            run.stop();
        }
    }
}
