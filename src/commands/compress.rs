//! `scrollkeep compress` command - compress a segment and store the scroll
//!
//! Messages come from repeated `--message` flags, or one per non-empty stdin
//! line when none are given.

use std::io::{self, BufRead};

use crate::cli::CompressArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json};
use scrollkeep_core::engine::MemoryEngine;
use scrollkeep_core::error::{Result, ScrollError};
use scrollkeep_core::glyph::glyph;
use scrollkeep_core::scroll::ScrollContext;

/// Collect non-empty, trimmed lines as messages
pub fn read_messages<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut messages = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            messages.push(trimmed.to_string());
        }
    }
    Ok(messages)
}

/// Execute the compress command
pub fn execute(
    ctx: &CommandContext,
    engine: &mut MemoryEngine,
    args: &CompressArgs,
    timestamp: &str,
) -> Result<()> {
    let messages = if args.message.is_empty() {
        read_messages(io::stdin().lock())?
    } else {
        args.message.clone()
    };

    if messages.is_empty() {
        return Err(ScrollError::UsageError(
            "nothing to compress: pass --message or pipe lines on stdin".to_string(),
        ));
    }

    let context = match &args.theme {
        Some(theme) => ScrollContext::with_theme(theme.clone()),
        None => ScrollContext::new(),
    };

    let scroll = engine.remember(&messages, timestamp, context);
    let id = scroll.id.unwrap_or_default();

    output_by_format_result!(ctx.cli.format,
        json => print_json(&serde_json::to_value(scroll)?),
        human => {
            if ctx.cli.quiet {
                println!("{}", id);
            } else {
                println!(
                    "Stored scroll {} {} [{}] {} {:.3}",
                    id,
                    glyph(scroll, None),
                    scroll.theme(),
                    scroll.tcs.grade,
                    scroll.tcs.score
                );
                println!(
                    "  essence {}/{} fragments, themes: {}",
                    scroll.essence_fragment_count,
                    scroll.original_fragment_count,
                    scroll.themes.join(", ")
                );
            }
        }
    )
}
