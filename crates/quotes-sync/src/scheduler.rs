//! Periodic and on-demand reconciliation.

use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::engine::{SyncEngine, SyncOutcome};

/// Scheduler lifecycle. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchedulerState {
    Idle,
    Running,
    Stopped,
}

/// Result of asking for a pass.
#[derive(Debug)]
pub enum TriggerResult {
    /// The pass ran to completion
    Completed(SyncOutcome),
    /// Another pass was in flight, so this one was dropped
    Coalesced,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("Scheduler can only start from Idle, current state is {0:?}")]
    InvalidTransition(SchedulerState),

    #[error("Sync interval must be greater than zero")]
    ZeroInterval,
}

const OUTCOME_CAPACITY: usize = 16;

/// Drives a [`SyncEngine`] on a fixed delay.
///
/// At most one pass runs at a time: a periodic tick or a manual trigger that
/// arrives while a pass is in flight is dropped. Every completed pass is
/// published to [`Scheduler::outcomes`] subscribers.
pub struct Scheduler {
    engine: Arc<SyncEngine>,
    state: watch::Sender<SchedulerState>,
    in_flight: Arc<AtomicBool>,
    outcomes: broadcast::Sender<SyncOutcome>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl Scheduler {
    pub fn new(engine: Arc<SyncEngine>) -> Self {
        let (state, _) = watch::channel(SchedulerState::Idle);
        let (outcomes, _) = broadcast::channel(OUTCOME_CAPACITY);
        Self {
            engine,
            state,
            in_flight: Arc::new(AtomicBool::new(false)),
            outcomes,
            task: Mutex::new(None),
        }
    }

    /// Receive the outcome of every pass completed from now on.
    pub fn outcomes(&self) -> broadcast::Receiver<SyncOutcome> {
        self.outcomes.subscribe()
    }

    pub fn state(&self) -> SchedulerState {
        *self.state.borrow()
    }

    /// Start periodic passes.
    ///
    /// The first pass runs one `interval` after the call and each following
    /// pass one `interval` after the previous one finished.
    pub fn start(&self, interval: Duration) -> Result<(), SchedulerError> {
        if interval.is_zero() {
            return Err(SchedulerError::ZeroInterval);
        }

        let started = self.state.send_if_modified(|state| {
            if *state == SchedulerState::Idle {
                *state = SchedulerState::Running;
                true
            } else {
                false
            }
        });
        if !started {
            return Err(SchedulerError::InvalidTransition(self.state()));
        }

        let handle = tokio::spawn(run_loop(
            self.engine.clone(),
            self.in_flight.clone(),
            self.outcomes.clone(),
            self.state.subscribe(),
            interval,
        ));
        *self.task.lock().unwrap_or_else(|e| e.into_inner()) = Some(handle);

        info!("Sync scheduler started ({}s interval)", interval.as_secs_f64());
        Ok(())
    }

    /// Stop scheduling passes.
    ///
    /// A pass already in flight runs to completion. No-op unless running.
    pub fn stop(&self) {
        let stopped = self.state.send_if_modified(|state| {
            if *state == SchedulerState::Running {
                *state = SchedulerState::Stopped;
                true
            } else {
                false
            }
        });
        if stopped {
            info!("Sync scheduler stopped");
        }
    }

    /// Stop and wait for the loop, including any in-flight pass, to finish.
    pub async fn shutdown(&self) {
        self.stop();
        let handle = self.task.lock().unwrap_or_else(|e| e.into_inner()).take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                warn!("Sync scheduler task ended abnormally: {}", e);
            }
        }
    }

    /// Run a pass now, outside the periodic schedule.
    ///
    /// Works in any state and leaves the periodic timer alone.
    pub async fn trigger_once(&self) -> TriggerResult {
        run_exclusive(&self.engine, &self.in_flight, &self.outcomes).await
    }
}

async fn run_loop(
    engine: Arc<SyncEngine>,
    in_flight: Arc<AtomicBool>,
    outcomes: broadcast::Sender<SyncOutcome>,
    mut state: watch::Receiver<SchedulerState>,
    interval: Duration,
) {
    loop {
        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            changed = state.changed() => {
                // Sender gone means the scheduler was dropped
                if changed.is_err() {
                    break;
                }
            }
        }
        if *state.borrow() != SchedulerState::Running {
            break;
        }

        match run_exclusive(&engine, &in_flight, &outcomes).await {
            TriggerResult::Completed(outcome) if outcome.failed => {
                debug!("Scheduled pass failed: {:?}", outcome.error_kind);
            }
            TriggerResult::Completed(outcome) => {
                debug!("Scheduled pass admitted {} quotes", outcome.admitted_count);
            }
            TriggerResult::Coalesced => {}
        }
    }
    debug!("Sync scheduler loop exited");
}

async fn run_exclusive(
    engine: &SyncEngine,
    in_flight: &AtomicBool,
    outcomes: &broadcast::Sender<SyncOutcome>,
) -> TriggerResult {
    if in_flight
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_err()
    {
        debug!("Pass already in flight, dropping trigger");
        return TriggerResult::Coalesced;
    }
    let _guard = InFlight(in_flight);
    let outcome = engine.run_once().await;
    // No subscribers is fine
    let _ = outcomes.send(outcome.clone());
    TriggerResult::Completed(outcome)
}

/// Clears the in-flight flag on drop, including when the pass is cancelled.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
