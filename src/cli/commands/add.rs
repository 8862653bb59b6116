//! Add a quote.

use anyhow::{Context, Result};
use quotes_core::types::Quote;

use crate::cli::context::AppContext;
use crate::cli::AddArgs;

pub async fn run(args: AddArgs, ctx: &AppContext) -> Result<()> {
    let quote = Quote::new(&args.text, &args.category)
        .context("Please enter both a quote and a category")?;

    let outcome = ctx.engine.add_quote(quote).await?;
    println!("Quote added successfully!");

    if let Some(e) = outcome.submit_error {
        println!("Saved locally, but the server did not accept it: {}", e);
    }

    Ok(())
}
