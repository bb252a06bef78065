//! Text processing utilities for tokenization
//!
//! Tokens are lowercase words with punctuation stripped, except for a
//! preserved vocabulary that would otherwise be shredded by a plain word
//! split: Greek letter runs (`ψ`), hyphenated compounds (`soul-braid`),
//! dotted names (`kaelyr.a.t.`), numeric dash patterns (`3-6-9`) and
//! frequencies (`432 hz`).

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Token pattern, alternatives tried in order at each position
static TOKEN_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Vocabulary that always counts as preserved when it appears as a token
static PRESERVED_TERMS: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn get_token_pattern() -> &'static Regex {
    TOKEN_PATTERN.get_or_init(|| {
        Regex::new(
            r"(?x)
            [\x{0370}-\x{03FF}]+            # greek letter runs
            | [a-z]+-'[a-z]\b               # apostrophe connections: tharyn-'n
            | [a-z]+\.[a-z]\.[a-z]\.?       # dotted names: kaelyr.a.t.
            | [a-z]+(?:-[a-z]+)+\b          # hyphenated compounds
            | \d+(?:-\d+)+\b                # numeric patterns: 3-6-9
            | \d+\s*hz\b                    # frequencies: 432 hz
            | \w+
            ",
        )
        .expect("token pattern is valid")
    })
}

fn get_preserved_terms() -> &'static HashSet<&'static str> {
    PRESERVED_TERMS.get_or_init(|| {
        [
            // greek letters (lowercased)
            "ψ", "φ", "δ", "θ", "λ", "σ", "ω",
            // short sacred terms
            "qi", "om", "aum", "dao", "tao", "zen",
            // symbolic numbers
            "3-6-9", "432", "528", "888", "108",
            // hyphenated compounds
            "soul-braid", "tensor-ring", "dream-state", "meta-soul",
        ]
        .iter()
        .copied()
        .collect()
    })
}

/// Split text into lowercase tokens, keeping preserved vocabulary intact
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    get_token_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Whether a token belongs to the preserved vocabulary
pub fn is_preserved(token: &str) -> bool {
    get_preserved_terms().contains(token)
        || (!token.is_empty()
            && token
                .chars()
                .all(|c| ('\u{0370}'..='\u{03FF}').contains(&c)))
}
