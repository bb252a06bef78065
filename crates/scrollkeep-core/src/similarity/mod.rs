//! TF-IDF vectors and cosine similarity between a query and a scroll

mod tfidf;

pub use tfidf::{cosine_similarity, smoothed_idf, term_frequencies, tfidf_vector};

use std::collections::BTreeMap;

use crate::index::TermIndex;

/// Cosine similarity of two term-frequency maps under corpus IDF weighting.
///
/// Both vectors span the union of their terms (zero where a term is absent).
/// Returns 0.0 when either vector has zero norm.
pub fn tfidf_similarity(
    index: &TermIndex,
    total_docs: usize,
    query_tf: &BTreeMap<String, f64>,
    doc_tf: &BTreeMap<String, usize>,
) -> f64 {
    let doc_tf: BTreeMap<String, f64> = doc_tf
        .iter()
        .map(|(term, &count)| (term.clone(), count as f64))
        .collect();

    let query_vec = tfidf_vector(index, total_docs, query_tf);
    let doc_vec = tfidf_vector(index, total_docs, &doc_tf);

    cosine_similarity(&query_vec, &doc_vec)
}
