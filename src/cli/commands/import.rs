//! Import quotes.

use anyhow::{Context, Result};
use quotes_store::import_json;

use crate::cli::context::AppContext;
use crate::cli::ImportArgs;

pub async fn run(args: ImportArgs, ctx: &AppContext) -> Result<()> {
    let raw = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let count = {
        let mut store = ctx.store().lock().await;
        import_json(&mut store, &raw)?
    };

    println!("Quotes imported successfully! ({} added)", count);
    Ok(())
}
