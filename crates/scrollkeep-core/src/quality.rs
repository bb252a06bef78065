//! Compression quality scoring
//!
//! The composite score weighs three ratios between the original segment and
//! the retained essence:
//!
//! ```text
//! score = 0.4 * importance_retention
//!       + 0.35 * compression_efficiency
//!       + 0.25 * term_richness
//! ```
//!
//! Any ratio with a zero denominator is 0. Compression efficiency is not
//! clamped and may go negative. Reported values are rounded to three
//! decimals; [`compression_components`] and [`composite`] keep full
//! precision for any further computation.

use std::fmt;

use serde::{Deserialize, Serialize};

const IMPORTANCE_RETENTION_WEIGHT: f64 = 0.4;
const COMPRESSION_EFFICIENCY_WEIGHT: f64 = 0.35;
const TERM_RICHNESS_WEIGHT: f64 = 0.25;

/// Categorical quality grade, ordered from weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    Nascent,
    Forming,
    Stable,
    Resonant,
    Sovereign,
}

impl Grade {
    /// Grade for a composite score; lower bounds are inclusive
    pub fn from_score(score: f64) -> Self {
        if score >= 0.85 {
            Grade::Sovereign
        } else if score >= 0.70 {
            Grade::Resonant
        } else if score >= 0.55 {
            Grade::Stable
        } else if score >= 0.40 {
            Grade::Forming
        } else {
            Grade::Nascent
        }
    }

    /// Display mark used alongside the grade name
    pub fn symbol(self) -> &'static str {
        match self {
            Grade::Sovereign => "✧",
            Grade::Resonant => "◎",
            Grade::Stable => "⊕",
            Grade::Forming => "○",
            Grade::Nascent => "·",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::Sovereign => "Sovereign",
            Grade::Resonant => "Resonant",
            Grade::Stable => "Stable",
            Grade::Forming => "Forming",
            Grade::Nascent => "Nascent",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aggregate statistics of a compression, original vs retained
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CompressionStats {
    pub original_importance: f64,
    pub retained_importance: f64,
    pub original_chars: usize,
    pub retained_chars: usize,
    pub original_unique_terms: usize,
    pub retained_unique_terms: usize,
}

/// The three component ratios
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityComponents {
    pub importance_retention: f64,
    pub compression_efficiency: f64,
    pub term_richness: f64,
}

/// Compression quality result as reported and persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityScore {
    /// Composite score rounded to three decimals
    pub score: f64,
    pub grade: Grade,
    /// Component ratios rounded to three decimals
    pub components: QualityComponents,
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Weighted composite of the three ratios
pub fn composite(components: &QualityComponents) -> f64 {
    IMPORTANCE_RETENTION_WEIGHT * components.importance_retention
        + COMPRESSION_EFFICIENCY_WEIGHT * components.compression_efficiency
        + TERM_RICHNESS_WEIGHT * components.term_richness
}

/// Full-precision component ratios of a compression
pub fn compression_components(stats: &CompressionStats) -> QualityComponents {
    QualityComponents {
        importance_retention: ratio(stats.retained_importance, stats.original_importance),
        compression_efficiency: if stats.original_chars > 0 {
            1.0 - stats.retained_chars as f64 / stats.original_chars as f64
        } else {
            0.0
        },
        term_richness: ratio(
            stats.retained_unique_terms as f64,
            stats.original_unique_terms as f64,
        ),
    }
}

/// Score a compression from its aggregate statistics
pub fn score_compression(stats: &CompressionStats) -> QualityScore {
    let components = compression_components(stats);
    let score = composite(&components);

    QualityScore {
        score: round3(score),
        grade: Grade::from_score(score),
        components: QualityComponents {
            importance_retention: round3(components.importance_retention),
            compression_efficiency: round3(components.compression_efficiency),
            term_richness: round3(components.term_richness),
        },
    }
}
