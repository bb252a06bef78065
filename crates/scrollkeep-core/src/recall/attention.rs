/// Softmax attention over raw relevance scores with sharpness `beta`.
///
/// Shifted by the maximum score for numerical stability. When every score is
/// zero, or the exponentials degenerate, the weights fall back to uniform.
pub fn attention_weights(scores: &[f64], beta: f64) -> Vec<f64> {
    if scores.is_empty() {
        return Vec::new();
    }

    let uniform = || vec![1.0 / scores.len() as f64; scores.len()];

    if scores.iter().all(|&s| s == 0.0) {
        return uniform();
    }

    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|&s| (beta * (s - max)).exp()).collect();
    let total: f64 = exps.iter().sum();

    if total == 0.0 || !total.is_finite() {
        return uniform();
    }

    exps.into_iter().map(|e| e / total).collect()
}
