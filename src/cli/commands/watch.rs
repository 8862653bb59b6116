//! Periodic sync until Ctrl-C.

use anyhow::{Context, Result};
use quotes_monitor::render_outcome;
use quotes_sync::Scheduler;
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use crate::cli::context::AppContext;
use crate::cli::WatchArgs;

pub async fn run(args: WatchArgs, ctx: &AppContext) -> Result<()> {
    let interval = args
        .interval
        .map(Duration::from_secs)
        .unwrap_or_else(|| ctx.config.sync.interval());

    let scheduler = Scheduler::new(ctx.engine.clone());
    let mut outcomes = scheduler.outcomes();

    scheduler
        .start(interval)
        .context("Failed to start sync scheduler")?;
    if ctx.config.sync.sync_on_start {
        scheduler.trigger_once().await;
    }

    println!(
        "Syncing with {} every {}s. Press Ctrl-C to stop.",
        ctx.config.remote.endpoint,
        interval.as_secs()
    );

    loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    warn!("Could not listen for Ctrl-C: {}", e);
                }
                break;
            }
            received = outcomes.recv() => match received {
                Ok(outcome) => {
                    if outcome.failed || outcome.admitted_count > 0 {
                        println!("{}", render_outcome(&outcome));
                    }
                }
                Err(RecvError::Lagged(missed)) => {
                    warn!("Missed {} sync notifications", missed);
                }
                Err(RecvError::Closed) => break,
            }
        }
    }

    info!("Stopping sync scheduler");
    scheduler.shutdown().await;
    println!("Stopped.");
    Ok(())
}
