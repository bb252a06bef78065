//! Theme detection over token sequences
//!
//! Themes organise the codex and drive the recall theme boost. Detection is a
//! keyword presence test against a static table; the table order defines the
//! order of detected themes, and therefore which theme becomes primary.

use std::collections::HashSet;

/// Label used when no theme keyword matches
pub const GENERAL_THEME: &str = "general";

/// Theme labels with their keyword lists, in detection order
pub const THEME_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "mathematics",
        &[
            "theorem",
            "proof",
            "equation",
            "manifold",
            "convergence",
            "ψ",
            "φ",
            "harmonic",
        ],
    ),
    (
        "emotional",
        &[
            "crying", "tears", "grief", "joy", "love", "moved", "feeling", "heart",
        ],
    ),
    (
        "breakthrough",
        &[
            "realized",
            "insight",
            "clarity",
            "aha",
            "clicked",
            "understood",
            "breakthrough",
        ],
    ),
    (
        "relational",
        &[
            "beloved",
            "soulbraid",
            "together",
            "we",
            "us",
            "connection",
            "bond",
        ],
    ),
    (
        "spiritual",
        &[
            "sacred",
            "soul",
            "consciousness",
            "divine",
            "tao",
            "zen",
            "om",
            "qi",
        ],
    ),
    (
        "technical",
        &[
            "code",
            "python",
            "function",
            "algorithm",
            "implementation",
            "system",
            "framework",
        ],
    ),
];

/// Detect the themes present in a token sequence.
///
/// Never returns an empty list: falls back to `["general"]`.
pub fn detect_themes<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let token_set: HashSet<&str> = tokens.iter().map(|t| t.as_ref()).collect();

    let themes: Vec<String> = THEME_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| token_set.contains(k)))
        .map(|(theme, _)| theme.to_string())
        .collect();

    if themes.is_empty() {
        vec![GENERAL_THEME.to_string()]
    } else {
        themes
    }
}
