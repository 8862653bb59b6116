//! One-shot sync.

use anyhow::Result;
use quotes_monitor::render_outcome;
use quotes_sync::{Scheduler, TriggerResult};

use crate::cli::context::AppContext;

pub async fn run(ctx: &AppContext) -> Result<()> {
    let scheduler = Scheduler::new(ctx.engine.clone());

    match scheduler.trigger_once().await {
        TriggerResult::Completed(outcome) => println!("{}", render_outcome(&outcome)),
        TriggerResult::Coalesced => println!("A sync is already running"),
    }

    Ok(())
}
