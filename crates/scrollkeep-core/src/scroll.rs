//! Scroll data model
//!
//! A [`Fragment`] is one input message, alive only while its segment is being
//! compressed. A [`Scroll`] is the persisted compressed record of a segment.
//! Scrolls are created once, never deleted, and only mutate their access
//! bookkeeping (`last_accessed`, `access_count`) during recall.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::importance::{essence_weight, signal_strength};
use crate::quality::QualityScore;
use crate::recall::temporal_decay;
use crate::text::tokenize;
use crate::themes::GENERAL_THEME;
use crate::time::parse_timestamp;

/// One input message within a segment being compressed
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub text: String,
    pub tokens: Vec<String>,
    /// Additive essence weight (ranking)
    pub weight: f64,
    /// Capped 0-1 thematic signal (quality)
    pub signal: f64,
    /// Length in characters
    pub chars: usize,
}

impl Fragment {
    /// Tokenize and score a message
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens = tokenize(&text);
        Fragment {
            weight: essence_weight(&text),
            signal: signal_strength(&text, &tokens),
            chars: text.chars().count(),
            tokens,
            text,
        }
    }
}

/// Free-form scroll context with a primary theme
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollContext {
    /// Primary theme; filled from detection when the caller leaves it empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Any other caller-provided context
    #[serde(flatten)]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl ScrollContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with an explicit primary theme
    pub fn with_theme(theme: impl Into<String>) -> Self {
        ScrollContext {
            theme: Some(theme.into()),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

/// A compressed conversation segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scroll {
    /// Position in the store; unset until the scroll is stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<usize>,

    /// Retained fragment texts in original order
    pub essence: Vec<String>,

    /// Essence weight of each retained fragment, parallel to `essence`
    #[serde(default)]
    pub weights: Vec<f64>,

    /// Creation time, immutable
    pub timestamp: String,

    /// Last creation or successful recall
    pub last_accessed: String,

    pub context: ScrollContext,

    /// Every theme detected for the segment, including the primary theme
    pub themes: Vec<String>,

    /// Compression quality
    pub tcs: QualityScore,

    /// Retained term occurrence counts
    #[serde(alias = "tokens")]
    pub term_frequencies: BTreeMap<String, usize>,

    /// Sum of essence weights over the whole original segment
    pub total_importance: f64,

    /// Mean thematic signal over the original segment
    #[serde(default)]
    pub signal: f64,

    /// Preserved-vocabulary tokens that survived compression
    #[serde(default)]
    pub preserved_terms: Vec<String>,

    #[serde(default)]
    pub original_fragment_count: usize,

    #[serde(default)]
    pub essence_fragment_count: usize,

    /// Original fragment count over the essence budget
    #[serde(default)]
    pub compression_ratio: f64,

    #[serde(default)]
    pub access_count: u64,
}

impl Scroll {
    /// Primary theme
    pub fn theme(&self) -> &str {
        self.context.theme.as_deref().unwrap_or(GENERAL_THEME)
    }

    /// Whether `theme` is among the scroll's detected themes
    pub fn has_theme(&self, theme: &str) -> bool {
        self.themes.iter().any(|t| t == theme)
    }

    /// Relevance decay since last access at `current_time`
    pub fn decay(&self, current_time: &str, gamma_decay: f64) -> f64 {
        temporal_decay(&self.last_accessed, current_time, gamma_decay)
    }

    /// Original importance scaled by decay since last access
    pub fn vitality(&self, current_time: &str, gamma_decay: f64) -> f64 {
        self.total_importance * self.decay(current_time, gamma_decay)
    }

    /// Record a successful recall at `current_time`.
    ///
    /// `last_accessed` only moves forward. A stored value that does not parse
    /// is replaced; an unparsable `current_time` is never written.
    pub fn record_access(&mut self, current_time: &str) {
        self.access_count += 1;

        let moves_forward = match (
            parse_timestamp(&self.last_accessed),
            parse_timestamp(current_time),
        ) {
            (Some(last), Some(now)) => now >= last,
            (None, Some(_)) => true,
            (_, None) => false,
        };
        if moves_forward {
            self.last_accessed = current_time.to_string();
        }
    }
}
