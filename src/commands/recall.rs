//! `scrollkeep recall` command - rank scrolls against a query
//!
//! Returned scrolls get their access bookkeeping updated, which the caller
//! persists.

use crate::cli::RecallArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json, truncate_text};
use scrollkeep_core::engine::{MemoryEngine, RecallHit};
use scrollkeep_core::error::Result;
use scrollkeep_core::glyph::glyph;
use tracing::debug;

fn hits_to_json(query: &str, at: &str, hits: &[RecallHit]) -> serde_json::Value {
    serde_json::json!({
        "query": query,
        "at": at,
        "count": hits.len(),
        "results": hits,
    })
}

/// Execute the recall command
pub fn execute(
    ctx: &CommandContext,
    engine: &mut MemoryEngine,
    args: &RecallArgs,
    at: &str,
) -> Result<()> {
    let hits = engine.recall(&args.query, args.top, at, args.theme.as_deref());
    debug!(query = %args.query, hits = hits.len(), "recall_command");

    output_by_format_result!(ctx.cli.format,
        json => print_json(&hits_to_json(&args.query, at, &hits)),
        human => {
            if hits.is_empty() && !ctx.cli.quiet {
                println!("No scrolls found");
            }
            for (rank, hit) in hits.iter().enumerate() {
                let scroll = &hit.scroll;
                println!(
                    "{}. scroll {} {} [{}] attention={:.3} relevance={:.3} decay={:.3}",
                    rank + 1,
                    scroll.id.unwrap_or_default(),
                    glyph(scroll, Some(hit.meta.decay)),
                    scroll.theme(),
                    hit.meta.attention,
                    hit.meta.relevance,
                    hit.meta.decay
                );
                if !ctx.cli.quiet {
                    for fragment in &scroll.essence {
                        println!("   {}", truncate_text(fragment, 100));
                    }
                }
            }
        }
    )
}
