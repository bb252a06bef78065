//! The memory engine: compression, storage and recall of scrolls
//!
//! One engine instance owns its scroll list, codex and term index; nothing is
//! shared between instances. Recall mutates access bookkeeping, so every
//! operation that changes state takes `&mut self`. Callers sharing an engine
//! across threads wrap it in a single `Mutex`.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codex::Codex;
use crate::config::EngineConfig;
use crate::essence::select_essence;
use crate::index::TermIndex;
use crate::quality::{score_compression, CompressionStats};
use crate::recall::{rank_scrolls, RecallMeta, RecallQuery};
use crate::scroll::{Fragment, Scroll, ScrollContext};
use crate::text::is_preserved;
use crate::themes::{detect_themes, GENERAL_THEME};
use crate::trace_time;

/// A recalled scroll with its scoring breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecallHit {
    /// The scroll after its access bookkeeping was updated
    pub scroll: Scroll,
    pub meta: RecallMeta,
}

/// Store-wide diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineStats {
    pub scroll_count: usize,
    pub theme_count: usize,
    pub vocabulary_size: usize,
    /// Retained term occurrences across all scrolls
    pub retained_terms: usize,
    pub total_importance: f64,
    /// Sum of per-scroll vitality at the requested time
    pub total_vitality: f64,
    pub total_access_count: u64,
    /// Free fraction of the configured capacity given the retained terms
    pub breath_factor: f64,
}

fn count_terms(tokens: &[&str]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Preserved-vocabulary terms, deduplicated and sorted
fn preserved_terms(terms: &HashSet<&str>) -> Vec<String> {
    terms
        .iter()
        .filter(|t| is_preserved(t))
        .map(|t| t.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// In-memory text retention and retrieval engine
#[derive(Debug, Clone, Default)]
pub struct MemoryEngine {
    pub(crate) config: EngineConfig,
    pub(crate) scrolls: Vec<Scroll>,
    pub(crate) codex: Codex,
    pub(crate) term_index: TermIndex,
}

impl MemoryEngine {
    /// Create an empty engine
    pub fn new(config: EngineConfig) -> Self {
        MemoryEngine {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace the tuning parameters; stored scrolls are left as they are
    pub fn set_config(&mut self, config: EngineConfig) {
        self.config = config;
    }

    pub fn scrolls(&self) -> &[Scroll] {
        &self.scrolls
    }

    pub fn scroll(&self, id: usize) -> Option<&Scroll> {
        self.scrolls.get(id)
    }

    pub fn codex(&self) -> &Codex {
        &self.codex
    }

    pub fn term_index(&self) -> &TermIndex {
        &self.term_index
    }

    pub fn len(&self) -> usize {
        self.scrolls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scrolls.is_empty()
    }

    /// Compress a segment into an unstored scroll (id unset).
    ///
    /// Fragments are scored, the essence is selected under `k_modes`,
    /// compression quality is measured and themes are detected over the
    /// retained tokens. A missing context theme defaults to the first
    /// detected theme.
    #[tracing::instrument(skip(self, fragments, context), fields(fragments = fragments.len()))]
    pub fn compress_to_scroll<S: AsRef<str>>(
        &self,
        fragments: &[S],
        timestamp: &str,
        mut context: ScrollContext,
    ) -> Scroll {
        let start = Instant::now();

        let fragments: Vec<Fragment> = fragments
            .iter()
            .map(|f| Fragment::new(f.as_ref()))
            .collect();
        let weights: Vec<f64> = fragments.iter().map(|f| f.weight).collect();
        let selected = select_essence(&weights, self.config.k_modes);

        let retained: Vec<&Fragment> = selected.iter().map(|&i| &fragments[i]).collect();
        let retained_tokens: Vec<&str> = retained
            .iter()
            .flat_map(|f| f.tokens.iter().map(String::as_str))
            .collect();

        let original_terms: HashSet<&str> = fragments
            .iter()
            .flat_map(|f| f.tokens.iter().map(String::as_str))
            .collect();
        let retained_terms: HashSet<&str> = retained_tokens.iter().copied().collect();

        let tcs = score_compression(&CompressionStats {
            original_importance: fragments.iter().map(|f| f.signal).sum(),
            retained_importance: retained.iter().map(|f| f.signal).sum(),
            original_chars: fragments.iter().map(|f| f.chars).sum(),
            retained_chars: retained.iter().map(|f| f.chars).sum(),
            original_unique_terms: original_terms.len(),
            retained_unique_terms: retained_terms.len(),
        });

        let mut themes = detect_themes(&retained_tokens);
        let theme = context
            .theme
            .get_or_insert_with(|| {
                themes
                    .first()
                    .cloned()
                    .unwrap_or_else(|| GENERAL_THEME.to_string())
            })
            .clone();
        if !themes.contains(&theme) {
            themes.push(theme);
        }

        let total_importance: f64 = weights.iter().sum();
        let signal = if fragments.is_empty() {
            0.0
        } else {
            fragments.iter().map(|f| f.signal).sum::<f64>() / fragments.len() as f64
        };
        let compression_ratio = if self.config.k_modes == 0 {
            0.0
        } else {
            fragments.len() as f64 / self.config.k_modes as f64
        };

        let scroll = Scroll {
            id: None,
            essence: retained.iter().map(|f| f.text.clone()).collect(),
            weights: retained.iter().map(|f| f.weight).collect(),
            timestamp: timestamp.to_string(),
            last_accessed: timestamp.to_string(),
            context,
            themes,
            tcs,
            term_frequencies: count_terms(&retained_tokens),
            total_importance,
            signal,
            preserved_terms: preserved_terms(&retained_terms),
            original_fragment_count: fragments.len(),
            essence_fragment_count: selected.len(),
            compression_ratio,
            access_count: 0,
        };

        debug!(
            essence = scroll.essence_fragment_count,
            original = scroll.original_fragment_count,
            tcs = scroll.tcs.score,
            grade = %scroll.tcs.grade,
            theme = scroll.theme(),
            "compress_to_scroll"
        );
        trace_time!(start, "compress_to_scroll");

        scroll
    }

    /// Store a compressed scroll and fold it into the term index and codex.
    ///
    /// Assigns `id` = current scroll count and resets access bookkeeping.
    /// Must be called exactly once per scroll.
    pub fn update_codex(&mut self, mut scroll: Scroll) -> &Scroll {
        let id = self.scrolls.len();
        scroll.id = Some(id);
        scroll.access_count = 0;
        scroll.last_accessed = scroll.timestamp.clone();

        self.term_index.add_document(scroll.term_frequencies.keys());
        self.codex.record(id, &scroll);

        debug!(id, theme = scroll.theme(), "update_codex");

        self.scrolls.push(scroll);
        &self.scrolls[id]
    }

    /// Compress a segment and store the resulting scroll
    pub fn remember<S: AsRef<str>>(
        &mut self,
        fragments: &[S],
        timestamp: &str,
        context: ScrollContext,
    ) -> &Scroll {
        let scroll = self.compress_to_scroll(fragments, timestamp, context);
        self.update_codex(scroll)
    }

    /// Rank stored scrolls against a query and mark the returned ones as
    /// accessed at `current_time`.
    ///
    /// Scrolls that were scored but not returned are left untouched.
    #[tracing::instrument(skip(self), fields(scrolls = self.scrolls.len()))]
    pub fn recall(
        &mut self,
        query: &str,
        top_n: usize,
        current_time: &str,
        theme_filter: Option<&str>,
    ) -> Vec<RecallHit> {
        let start = Instant::now();

        let ranked = rank_scrolls(
            &self.scrolls,
            &self.term_index,
            &self.config,
            &RecallQuery {
                text: query,
                top_n,
                current_time,
                theme_filter,
            },
        );

        let hits: Vec<RecallHit> = ranked
            .into_iter()
            .map(|ranked| {
                let scroll = &mut self.scrolls[ranked.index];
                scroll.record_access(current_time);
                RecallHit {
                    scroll: scroll.clone(),
                    meta: ranked.meta,
                }
            })
            .collect();

        debug!(hits = hits.len(), "recall");
        trace_time!(start, "recall");

        hits
    }

    /// Store-wide diagnostics at `current_time`
    pub fn stats(&self, current_time: &str) -> EngineStats {
        let retained_terms: usize = self
            .scrolls
            .iter()
            .map(|s| s.term_frequencies.values().sum::<usize>())
            .sum();

        EngineStats {
            scroll_count: self.scrolls.len(),
            theme_count: self.codex.len(),
            vocabulary_size: self.term_index.vocabulary_size(),
            retained_terms,
            total_importance: self.scrolls.iter().map(|s| s.total_importance).sum(),
            total_vitality: self
                .scrolls
                .iter()
                .map(|s| s.vitality(current_time, self.config.gamma_decay))
                .sum(),
            total_access_count: self.scrolls.iter().map(|s| s.access_count).sum(),
            breath_factor: self.config.breath_factor(retained_terms),
        }
    }
}
