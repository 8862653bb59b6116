//! Export quotes.

use anyhow::{Context, Result};
use quotes_store::export_json;
use tracing::info;

use crate::cli::context::AppContext;
use crate::cli::ExportArgs;

pub async fn run(args: ExportArgs, ctx: &AppContext) -> Result<()> {
    let (json, count) = {
        let store = ctx.store().lock().await;
        (export_json(store.quotes())?, store.len())
    };

    match &args.out {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Exported {} quotes to {:?}", count, path);
            println!("Exported {} quotes to {}", count, path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
