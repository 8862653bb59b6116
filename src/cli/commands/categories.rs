//! List categories.

use anyhow::Result;
use quotes_monitor::render_categories;

use crate::cli::context::AppContext;

pub async fn run(ctx: &AppContext) -> Result<()> {
    let categories = ctx.store().lock().await.categories();

    println!("Categories");
    println!("═══════════════════════════════════════════════════════════");
    println!("{}", render_categories(&categories));

    Ok(())
}
