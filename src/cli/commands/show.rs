//! Show a random quote.

use anyhow::Result;
use quotes_monitor::{render_quote, EMPTY_COLLECTION};
use rand::seq::SliceRandom;
use tracing::warn;

use crate::cli::context::AppContext;
use crate::cli::ShowArgs;

pub async fn run(args: ShowArgs, ctx: &AppContext) -> Result<()> {
    if args.last {
        if let Some(quote) = ctx.last_viewed.get() {
            println!("{}", render_quote(&quote));
            return Ok(());
        }
    }

    let picked = {
        let store = ctx.store().lock().await;
        let pool: Vec<_> = match &args.category {
            Some(category) => store.by_category(category),
            None => store.quotes().iter().collect(),
        };
        pool.choose(&mut rand::thread_rng()).map(|q| (*q).clone())
    };

    let Some(quote) = picked else {
        match &args.category {
            Some(category) => println!("No quotes in category '{}'.", category),
            None => println!("{}", EMPTY_COLLECTION),
        }
        return Ok(());
    };

    println!("{}", render_quote(&quote));
    if let Err(e) = ctx.last_viewed.set(&quote) {
        warn!("Could not remember last viewed quote: {}", e);
    }

    Ok(())
}
