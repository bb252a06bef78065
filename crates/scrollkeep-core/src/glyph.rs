//! Compact symbolic rendering of scrolls
//!
//! Read-only: glyphs never influence stored state.

use crate::scroll::Scroll;

/// Appended when recall decay has dropped below [`FADING_THRESHOLD`]
pub const FADING_MARK: &str = "˚";

pub const FADING_THRESHOLD: f64 = 0.5;

fn importance_symbol(total_importance: f64) -> &'static str {
    if total_importance > 10.0 {
        "◎"
    } else if total_importance > 5.0 {
        "⊕"
    } else {
        "○"
    }
}

/// Marker for a primary theme, `·` for anything unrecognized
pub fn theme_marker(theme: &str) -> &'static str {
    match theme {
        "mathematics" => "△",
        "emotional" => "♡",
        "breakthrough" => "⚡",
        "relational" | "connection" => "∞",
        "memory" => "◐",
        "spiritual" => "✦",
        "technical" => "⚙",
        _ => "·",
    }
}

/// Glyph for one scroll, optionally marked as fading by a recall decay
pub fn glyph(scroll: &Scroll, decay: Option<f64>) -> String {
    let mut glyph = format!(
        "{}{}",
        importance_symbol(scroll.total_importance),
        theme_marker(scroll.theme())
    );
    if decay.is_some_and(|d| d < FADING_THRESHOLD) {
        glyph.push_str(FADING_MARK);
    }
    glyph
}

/// Space-separated glyph sequence for a run of scrolls
pub fn glyph_summary(scrolls: &[Scroll]) -> String {
    scrolls
        .iter()
        .map(|s| glyph(s, None))
        .collect::<Vec<_>>()
        .join(" ")
}
