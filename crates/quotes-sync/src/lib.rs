//! Reconciliation of the local quote collection against the remote one.
//!
//! - [`reconcile`] decides which remote quotes are new
//! - [`SyncEngine`] runs one read, merge and persist pass
//! - [`Scheduler`] drives the engine on a fixed delay and on demand

mod engine;
mod merge;
mod scheduler;

#[cfg(test)]
pub(crate) mod testing;

pub use engine::{AddOutcome, SyncConfig, SyncEngine, SyncErrorKind, SyncOutcome};
pub use merge::{reconcile, MergeResult};
pub use scheduler::{Scheduler, SchedulerError, SchedulerState, TriggerResult};
