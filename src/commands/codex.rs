//! `scrollkeep codex` command - per-theme aggregates

use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json};
use scrollkeep_core::engine::MemoryEngine;
use scrollkeep_core::error::Result;
use scrollkeep_core::glyph::theme_marker;

/// Execute the codex command
pub fn execute(ctx: &CommandContext, engine: &MemoryEngine) -> Result<()> {
    let codex = engine.codex();

    output_by_format_result!(ctx.cli.format,
        json => print_json(&serde_json::to_value(codex)?),
        human => {
            if codex.is_empty() && !ctx.cli.quiet {
                println!("Codex is empty");
            }
            for (theme, entry) in codex.iter() {
                let ids: Vec<String> = entry.scrolls.iter().map(|id| id.to_string()).collect();
                println!(
                    "{} {:<12} {:>3} scrolls  importance {:.2}  last {}",
                    theme_marker(theme),
                    theme,
                    entry.scrolls.len(),
                    entry.cumulative_importance,
                    entry.last_accessed
                );
                if !ctx.cli.quiet {
                    println!("    ids: {}", ids.join(", "));
                }
            }
        }
    )
}
