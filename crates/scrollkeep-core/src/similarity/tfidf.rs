use crate::index::TermIndex;
use std::collections::BTreeMap;

/// Count occurrences of each token
pub fn term_frequencies<S: AsRef<str>>(tokens: &[S]) -> BTreeMap<String, f64> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.as_ref().to_string()).or_insert(0.0) += 1.0;
    }
    counts
}

/// Smoothed inverse document frequency: `ln((N + 1) / (1 + df)) + 1`
pub fn smoothed_idf(total_docs: usize, df: usize) -> f64 {
    ((total_docs as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0
}

pub fn cosine_similarity(vec_a: &BTreeMap<String, f64>, vec_b: &BTreeMap<String, f64>) -> f64 {
    let mut dot_product = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (term, weight) in vec_a {
        norm_a += weight * weight;
        if let Some(weight_b) = vec_b.get(term) {
            dot_product += weight * weight_b;
        }
    }

    for weight in vec_b.values() {
        norm_b += weight * weight;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a.sqrt() * norm_b.sqrt())
}

/// Weight each term frequency by its smoothed IDF.
///
/// Terms absent from a vector contribute nothing to the cosine, so only the
/// vector's own terms are materialized.
pub fn tfidf_vector(
    index: &TermIndex,
    total_docs: usize,
    term_freqs: &BTreeMap<String, f64>,
) -> BTreeMap<String, f64> {
    let mut vector = BTreeMap::new();

    for (term, &tf) in term_freqs {
        let idf = smoothed_idf(total_docs, index.document_frequency(term));
        vector.insert(term.clone(), tf * idf);
    }

    vector
}
