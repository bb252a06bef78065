//! Fragment importance scoring
//!
//! Two distinct scorers live here and must not be conflated:
//!
//! - [`essence_weight`]: unbounded additive weight starting at 1.0, used to rank
//!   fragments for essence selection and summed into a scroll's
//!   `total_importance`.
//! - [`signal_strength`]: capped 0-1 thematic signal, used for compression
//!   quality (importance retention) and the scroll's thematic signal.
//!
//! Both are pure functions over the text and static keyword tables. Each
//! category contributes its bonus at most once per call.

mod signal;

pub use signal::{signal_strength, SignalCategory};

use serde::{Deserialize, Serialize};

/// Base weight every fragment starts from
pub const BASE_WEIGHT: f64 = 1.0;

/// Keyword categories feeding the additive essence weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCategory {
    /// Emotional peaks: tears, grief, joy
    Emotional,
    /// Mathematical milestones: theorems, proofs, simulations
    Mathematical,
    /// Relational depth: witnessing, connection, resonance
    Relational,
    /// Phase shifts: realizations, discoveries, breakthroughs
    Insight,
    /// Technical devices and builds: algorithms, prototypes, circuits
    TechnicalDevice,
}

impl KeywordCategory {
    /// All categories, in scoring order
    pub const ALL: [KeywordCategory; 5] = [
        KeywordCategory::Emotional,
        KeywordCategory::Mathematical,
        KeywordCategory::Relational,
        KeywordCategory::Insight,
        KeywordCategory::TechnicalDevice,
    ];

    /// Lowercase markers matched as substrings of the lowercased text
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            KeywordCategory::Emotional => &[
                "tears",
                "love",
                "beloved",
                "honored",
                "blessed",
                "heartbreak",
                "grief",
                "joy",
                "beautiful",
            ],
            KeywordCategory::Mathematical => &[
                "theorem",
                "proven",
                "verified",
                "simulation",
                "convergence",
                "equation",
            ],
            KeywordCategory::Relational => &[
                "see you",
                "witness",
                "soulbraid",
                "connection",
                "resonance",
                "braid",
            ],
            KeywordCategory::Insight => &[
                "realized",
                "realization",
                "understand",
                "see what",
                "ohh",
                "discovered",
                "breakthrough",
            ],
            KeywordCategory::TechnicalDevice => &[
                "algorithm",
                "implementation",
                "prototype",
                "compiler",
                "circuit",
                "device",
            ],
        }
    }

    /// Fixed bonus added when any keyword of the category is present
    pub fn bonus(self) -> f64 {
        match self {
            KeywordCategory::Emotional => 0.5,
            KeywordCategory::Mathematical => 0.3,
            KeywordCategory::Relational => 0.4,
            KeywordCategory::Insight => 0.6,
            KeywordCategory::TechnicalDevice => 0.3,
        }
    }

    /// Whether any keyword of this category occurs in already-lowercased text
    fn matches(self, text_lower: &str) -> bool {
        self.keywords().iter().any(|k| text_lower.contains(k))
    }
}

/// Categories whose keywords occur in the text
pub fn matched_categories(text: &str) -> Vec<KeywordCategory> {
    let text_lower = text.to_lowercase();
    KeywordCategory::ALL
        .into_iter()
        .filter(|c| c.matches(&text_lower))
        .collect()
}

/// Additive importance weight used to rank fragments for the essence.
///
/// Starts at [`BASE_WEIGHT`] and gains each matched category's bonus once.
/// No upper bound.
pub fn essence_weight(text: &str) -> f64 {
    BASE_WEIGHT
        + matched_categories(text)
            .into_iter()
            .map(KeywordCategory::bonus)
            .sum::<f64>()
}
