//! `scrollkeep show` command - display one scroll

use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json};
use scrollkeep_core::engine::MemoryEngine;
use scrollkeep_core::error::{Result, ScrollError};
use scrollkeep_core::glyph::glyph;

/// Execute the show command
pub fn execute(ctx: &CommandContext, engine: &MemoryEngine, id: usize) -> Result<()> {
    let scroll = engine
        .scroll(id)
        .ok_or(ScrollError::ScrollNotFound { id })?;

    output_by_format_result!(ctx.cli.format,
        json => print_json(&serde_json::to_value(scroll)?),
        human => {
            println!("Scroll {} {}", id, glyph(scroll, None));
            println!("Theme: {} ({})", scroll.theme(), scroll.themes.join(", "));
            println!("Created: {}", scroll.timestamp);
            println!(
                "Last accessed: {} ({} recalls)",
                scroll.last_accessed, scroll.access_count
            );
            println!(
                "TCS: {:.3} {} {} (retention {:.3}, efficiency {:.3}, richness {:.3})",
                scroll.tcs.score,
                scroll.tcs.grade.symbol(),
                scroll.tcs.grade,
                scroll.tcs.components.importance_retention,
                scroll.tcs.components.compression_efficiency,
                scroll.tcs.components.term_richness
            );
            println!(
                "Importance: {:.2}  signal: {:.2}  ratio: {:.2}",
                scroll.total_importance, scroll.signal, scroll.compression_ratio
            );
            if !scroll.preserved_terms.is_empty() {
                println!("Preserved: {}", scroll.preserved_terms.join(" "));
            }
            println!();
            for (fragment, weight) in scroll.essence.iter().zip(&scroll.weights) {
                println!("  [{:.1}] {}", weight, fragment);
            }
        }
    )
}
