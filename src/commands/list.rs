//! `scrollkeep list` command - list stored scrolls in insertion order

use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json, truncate_text};
use scrollkeep_core::engine::MemoryEngine;
use scrollkeep_core::error::Result;
use scrollkeep_core::glyph::{glyph, glyph_summary};
use scrollkeep_core::scroll::Scroll;

fn scroll_summary(scroll: &Scroll) -> serde_json::Value {
    serde_json::json!({
        "id": scroll.id,
        "glyph": glyph(scroll, None),
        "theme": scroll.theme(),
        "themes": scroll.themes,
        "timestamp": scroll.timestamp,
        "last_accessed": scroll.last_accessed,
        "access_count": scroll.access_count,
        "tcs": scroll.tcs.score,
        "grade": scroll.tcs.grade,
        "total_importance": scroll.total_importance,
        "essence_fragments": scroll.essence_fragment_count,
    })
}

/// Execute the list command
pub fn execute(ctx: &CommandContext, engine: &MemoryEngine) -> Result<()> {
    let scrolls = engine.scrolls();

    output_by_format_result!(ctx.cli.format,
        json => print_json(&serde_json::Value::Array(
            scrolls.iter().map(scroll_summary).collect()
        )),
        human => {
            if scrolls.is_empty() {
                if !ctx.cli.quiet {
                    println!("No scrolls stored");
                }
            } else {
                for scroll in scrolls {
                    let first = scroll.essence.first().map(String::as_str).unwrap_or("");
                    println!(
                        "{:>4} {} {} {:<12} {}",
                        scroll.id.unwrap_or_default(),
                        glyph(scroll, None),
                        scroll.tcs.grade.symbol(),
                        scroll.theme(),
                        truncate_text(first, 60)
                    );
                }
                if !ctx.cli.quiet {
                    println!();
                    println!("{}", glyph_summary(scrolls));
                }
            }
        }
    )
}
