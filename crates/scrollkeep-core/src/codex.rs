//! Theme-indexed aggregate over stored scrolls
//!
//! The codex is a denormalized cache: for each primary theme it records the
//! ids of its scrolls, their cumulative importance and the latest scroll
//! timestamp. It is only ever extended through [`Codex::record`] and can
//! always be rebuilt by replaying the scroll list in insertion order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scroll::Scroll;

/// Aggregate bookkeeping for one theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeEntry {
    /// Scroll ids in insertion order
    pub scrolls: Vec<usize>,
    pub cumulative_importance: f64,
    /// Timestamp of the most recently stored scroll with this theme
    pub last_accessed: String,
}

/// Theme label → aggregate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Codex {
    themes: BTreeMap<String, ThemeEntry>,
}

impl Codex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the aggregate from scrolls in insertion order
    pub fn rebuild(scrolls: &[Scroll]) -> Self {
        let mut codex = Codex::new();
        for (position, scroll) in scrolls.iter().enumerate() {
            codex.record(scroll.id.unwrap_or(position), scroll);
        }
        codex
    }

    /// Fold one stored scroll into its primary theme's aggregate.
    ///
    /// Not idempotent: recording the same scroll twice double-counts it.
    pub fn record(&mut self, id: usize, scroll: &Scroll) {
        let entry = self
            .themes
            .entry(scroll.theme().to_string())
            .or_insert_with(|| ThemeEntry {
                scrolls: Vec::new(),
                cumulative_importance: 0.0,
                last_accessed: scroll.timestamp.clone(),
            });

        entry.scrolls.push(id);
        entry.cumulative_importance += scroll.total_importance;
        entry.last_accessed = scroll.timestamp.clone();
    }

    pub fn get(&self, theme: &str) -> Option<&ThemeEntry> {
        self.themes.get(theme)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Iterate themes in label order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ThemeEntry)> {
        self.themes.iter().map(|(t, e)| (t.as_str(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MemoryEngine;
    use crate::scroll::ScrollContext;

    fn stored_engine() -> MemoryEngine {
        let mut engine = MemoryEngine::default();
        engine.remember(
            &["the theorem is proven", "equations converge"],
            "2025-03-01",
            ScrollContext::with_theme("mathematics"),
        );
        engine.remember(
            &["tears of joy", "so grateful"],
            "2025-03-02",
            ScrollContext::with_theme("emotional"),
        );
        engine.remember(
            &["another proof sketch", "the manifold theorem"],
            "2025-03-03",
            ScrollContext::with_theme("mathematics"),
        );
        engine
    }

    #[test]
    fn test_record_groups_by_primary_theme() {
        let engine = stored_engine();
        let codex = engine.codex();

        assert_eq!(codex.len(), 2);
        let maths = codex.get("mathematics").unwrap();
        assert_eq!(maths.scrolls, vec![0, 2]);
        assert_eq!(maths.last_accessed, "2025-03-03");

        let expected: f64 = [0, 2]
            .iter()
            .map(|&id| engine.scrolls()[id].total_importance)
            .sum();
        assert!((maths.cumulative_importance - expected).abs() < 1e-9);

        assert_eq!(codex.get("emotional").unwrap().scrolls, vec![1]);
    }

    #[test]
    fn test_rebuild_matches_incremental_codex() {
        let engine = stored_engine();
        assert_eq!(&Codex::rebuild(engine.scrolls()), engine.codex());
    }

    #[test]
    fn test_record_is_not_idempotent() {
        let engine = stored_engine();
        let mut codex = engine.codex().clone();
        codex.record(1, &engine.scrolls()[1]);
        assert_eq!(codex.get("emotional").unwrap().scrolls, vec![1, 1]);
    }

    #[test]
    fn test_empty_codex() {
        let codex = Codex::rebuild(&[]);
        assert!(codex.is_empty());
        assert!(codex.get("general").is_none());
    }
}
