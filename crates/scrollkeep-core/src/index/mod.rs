//! Term document-frequency index
//!
//! Counts, for every term, how many scrolls retain it. The index only grows:
//! there is no removal, matching the append-only scroll store. It is a cache
//! over the scroll list and can be rebuilt by replaying scrolls in order, but
//! an imported state keeps the frequencies exactly as persisted.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

/// Document frequency per term
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermIndex {
    term_df: BTreeMap<String, usize>,
}

impl TermIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one document: each distinct term gains exactly one count
    pub fn add_document<I, S>(&mut self, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        for term in terms {
            let term = term.as_ref();
            if seen.insert(term.to_string()) {
                *self.term_df.entry(term.to_string()).or_insert(0) += 1;
            }
        }
    }

    /// Number of documents containing `term` (0 when unseen)
    pub fn document_frequency(&self, term: &str) -> usize {
        self.term_df.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms seen
    pub fn vocabulary_size(&self) -> usize {
        self.term_df.len()
    }

    pub fn is_empty(&self) -> bool {
        self.term_df.is_empty()
    }

    /// Iterate terms with their document frequencies in term order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.term_df.iter().map(|(t, &df)| (t.as_str(), df))
    }
}

impl From<BTreeMap<String, usize>> for TermIndex {
    fn from(term_df: BTreeMap<String, usize>) -> Self {
        TermIndex { term_df }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unseen_term_has_zero_frequency() {
        let index = TermIndex::new();
        assert_eq!(index.document_frequency("theorem"), 0);
        assert!(index.is_empty());
    }

    #[test]
    fn test_repeats_within_one_document_count_once() {
        let mut index = TermIndex::new();
        index.add_document(["x", "x", "x", "y"]);
        assert_eq!(index.document_frequency("x"), 1);
        assert_eq!(index.document_frequency("y"), 1);
    }

    #[test]
    fn test_frequency_counts_documents() {
        let mut index = TermIndex::new();
        for n in 1..=4 {
            let mut terms = vec!["x".to_string(); n];
            terms.push(format!("unique-{n}"));
            index.add_document(&terms);
        }
        assert_eq!(index.document_frequency("x"), 4);
        assert_eq!(index.document_frequency("unique-2"), 1);
        assert_eq!(index.vocabulary_size(), 5);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut index = TermIndex::new();
        index.add_document(["b", "a"]);
        let json = serde_json::to_string(&index).unwrap();
        assert_eq!(json, r#"{"a":1,"b":1}"#);

        let back: TermIndex = serde_json::from_str(&json).unwrap();
        assert_eq!(back, index);
    }

    #[test]
    fn test_iter_in_term_order() {
        let mut index = TermIndex::new();
        index.add_document(["zen", "alpha"]);
        index.add_document(["alpha"]);
        let pairs: Vec<_> = index.iter().collect();
        assert_eq!(pairs, vec![("alpha", 2), ("zen", 1)]);
    }
}
