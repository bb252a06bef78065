//! `scrollkeep stats` command - store diagnostics

use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json};
use scrollkeep_core::engine::MemoryEngine;
use scrollkeep_core::error::Result;

/// Execute the stats command
pub fn execute(ctx: &CommandContext, engine: &MemoryEngine, at: &str) -> Result<()> {
    let stats = engine.stats(at);

    output_by_format_result!(ctx.cli.format,
        json => {
            let mut value = serde_json::to_value(&stats)?;
            if let Some(obj) = value.as_object_mut() {
                obj.insert("at".to_string(), serde_json::json!(at));
                obj.insert("config".to_string(), serde_json::to_value(engine.config())?);
            }
            print_json(&value)
        },
        human => {
            println!("Scrolls: {}", stats.scroll_count);
            println!("Themes: {}", stats.theme_count);
            println!("Vocabulary: {} terms", stats.vocabulary_size);
            println!("Retained terms: {}", stats.retained_terms);
            println!("Total importance: {:.2}", stats.total_importance);
            println!("Vitality at {}: {:.2}", at, stats.total_vitality);
            println!("Recalls: {}", stats.total_access_count);
            println!("Breath factor: {:.4}", stats.breath_factor);
        }
    )
}
