//! Relevance ranking for recall
//!
//! Every candidate scroll (after the optional theme filter) is scored as
//!
//! ```text
//! relevance = tfidf_cosine(query, scroll) * decay(last_accessed) * theme_multiplier
//! ```
//!
//! where the theme multiplier is `1 + theme_boost` when the query's detected
//! themes intersect the scroll's themes. A softmax with sharpness
//! `beta_focus` over all candidates yields attention weights; candidates are
//! ordered by attention (stable, so ties keep insertion order) and the first
//! `top_n` sharing at least one term with the query are returned. A matching
//! scroll whose decay has underflowed to zero is still returned, last.
//!
//! Ranking is pure. Applying the access updates is the caller's job.

mod attention;
mod decay;

pub use attention::attention_weights;
pub use decay::temporal_decay;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::EngineConfig;
use crate::index::TermIndex;
use crate::scroll::Scroll;
use crate::similarity::{term_frequencies, tfidf_similarity};
use crate::text::tokenize;
use crate::themes::detect_themes;

/// A recall request
#[derive(Debug, Clone, Copy)]
pub struct RecallQuery<'a> {
    pub text: &'a str,
    pub top_n: usize,
    pub current_time: &'a str,
    /// Keep only scrolls whose theme set contains this theme
    pub theme_filter: Option<&'a str>,
}

/// Per-result scoring breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecallMeta {
    /// Raw relevance: tfidf * decay * theme multiplier
    pub relevance: f64,
    pub tfidf: f64,
    pub decay: f64,
    pub theme_matched: bool,
    /// Softmax weight across all candidates
    pub attention: f64,
}

/// A scored candidate, referencing its scroll by store position
#[derive(Debug, Clone, PartialEq)]
pub struct RankedScroll {
    pub index: usize,
    pub meta: RecallMeta,
}

/// Score, normalize and order candidate scrolls for a query
pub fn rank_scrolls(
    scrolls: &[Scroll],
    term_index: &TermIndex,
    config: &EngineConfig,
    query: &RecallQuery<'_>,
) -> Vec<RankedScroll> {
    if scrolls.is_empty() || query.top_n == 0 {
        return Vec::new();
    }

    let query_tokens = tokenize(query.text);
    let query_tf = term_frequencies(&query_tokens);
    let query_themes = detect_themes(&query_tokens);
    let total_docs = scrolls.len();

    let mut candidates: Vec<RankedScroll> = scrolls
        .iter()
        .enumerate()
        .filter(|(_, scroll)| {
            query
                .theme_filter
                .map_or(true, |theme| scroll.has_theme(theme))
        })
        .map(|(index, scroll)| {
            let tfidf = tfidf_similarity(
                term_index,
                total_docs,
                &query_tf,
                &scroll.term_frequencies,
            );
            let decay = scroll.decay(query.current_time, config.gamma_decay);
            let theme_matched = query_themes.iter().any(|t| scroll.has_theme(t));
            let multiplier = if theme_matched {
                1.0 + config.theme_boost
            } else {
                1.0
            };
            let relevance = tfidf * decay * multiplier;

            trace!(index, tfidf, decay, theme_matched, relevance, "score_candidate");

            RankedScroll {
                index,
                meta: RecallMeta {
                    relevance,
                    tfidf,
                    decay,
                    theme_matched,
                    attention: 0.0,
                },
            }
        })
        .collect();

    let relevances: Vec<f64> = candidates.iter().map(|c| c.meta.relevance).collect();
    for (candidate, weight) in candidates
        .iter_mut()
        .zip(attention_weights(&relevances, config.beta_focus))
    {
        candidate.meta.attention = weight;
    }

    candidates.sort_by(|a, b| b.meta.attention.total_cmp(&a.meta.attention));
    candidates.retain(|c| c.meta.tfidf > 0.0);
    candidates.truncate(query.top_n);
    candidates
}
