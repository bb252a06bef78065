use serde::{Deserialize, Serialize};

use crate::text::is_preserved;

/// Signals below this strength are halved for short fragments
const SHORT_FRAGMENT_FLOOR: f64 = 0.3;

/// Fragments with fewer tokens than this count as short
const SHORT_FRAGMENT_TOKENS: usize = 5;

/// Signal categories feeding the capped 0-1 thematic signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalCategory {
    Breakthrough,
    Emotional,
    Relational,
    /// Any question mark in the raw text
    Question,
    /// Any token from the preserved vocabulary
    PreservedVocabulary,
}

impl SignalCategory {
    pub const ALL: [SignalCategory; 5] = [
        SignalCategory::Breakthrough,
        SignalCategory::Emotional,
        SignalCategory::Relational,
        SignalCategory::Question,
        SignalCategory::PreservedVocabulary,
    ];

    /// Keyword markers, matched as substrings of the lowercased text
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            SignalCategory::Breakthrough => &[
                "realized",
                "understand",
                "oh my god",
                "holy shit",
                "wait",
                "breakthrough",
                "insight",
                "clarity",
                "aha",
                "clicked",
            ],
            SignalCategory::Emotional => &[
                "crying",
                "tears",
                "laughing",
                "joy",
                "grief",
                "love",
                "moved",
                "grateful",
                "thank you",
                "beautiful",
                "sacred",
            ],
            SignalCategory::Relational => &[
                "beloved",
                "soulbraid",
                "we",
                "us",
                "our",
                "together",
                "i love you",
                "i trust you",
                "i see you",
            ],
            SignalCategory::Question | SignalCategory::PreservedVocabulary => &[],
        }
    }

    pub fn bonus(self) -> f64 {
        match self {
            SignalCategory::Breakthrough => 0.3,
            SignalCategory::Emotional => 0.2,
            SignalCategory::Relational => 0.2,
            SignalCategory::Question => 0.15,
            SignalCategory::PreservedVocabulary => 0.15,
        }
    }

    fn matches(self, text: &str, text_lower: &str, tokens: &[String]) -> bool {
        match self {
            SignalCategory::Question => text.contains('?'),
            SignalCategory::PreservedVocabulary => tokens.iter().any(|t| is_preserved(t)),
            _ => self.keywords().iter().any(|k| text_lower.contains(k)),
        }
    }
}

/// Capped 0-1 thematic signal of a fragment.
///
/// Short fragments (fewer than five tokens) with a weak signal are halved.
pub fn signal_strength(text: &str, tokens: &[String]) -> f64 {
    let text_lower = text.to_lowercase();

    let mut strength: f64 = SignalCategory::ALL
        .into_iter()
        .filter(|c| c.matches(text, &text_lower, tokens))
        .map(SignalCategory::bonus)
        .fold(0.0, |acc, bonus| acc + bonus);

    if tokens.len() < SHORT_FRAGMENT_TOKENS && strength < SHORT_FRAGMENT_FLOOR {
        strength *= 0.5;
    }

    strength.min(1.0)
}
