use anyhow::Result;
use clap::Args;

use crate::output::{print_cache_stats, print_json, OutputFormat};
use crate::App;

#[derive(Args)]
pub struct CacheArgs {
    /// Remove every cached entry
    #[arg(long)]
    pub clear: bool,

    /// Remove entries tagged with this category (match, league, team, squad, search)
    #[arg(long)]
    pub clear_category: Option<String>,

    /// Remove entries whose key contains this substring
    #[arg(long)]
    pub clear_pattern: Option<String>,
}

pub fn run(args: &CacheArgs, app: &App, format: &OutputFormat) -> Result<()> {
    if args.clear {
        app.cache.clear(None);
    }
    if let Some(category) = &args.clear_category {
        app.cache.clear_by_category(category);
    }
    if let Some(pattern) = &args.clear_pattern {
        app.cache.invalidate_pattern(pattern);
    }

    let stats = app.cache.stats();
    match format {
        OutputFormat::Table => print_cache_stats(&stats),
        OutputFormat::Json => {
            print_json(&serde_json::json!({
                "size": stats.size,
                "categories": stats.categories,
            }))?;
        }
    }
    Ok(())
}
