//! Information-theoretic helper functions for the tell analyser.

/// Shannon entropy of a probability vector, in bits.
///
/// Terms with `p <= 0` contribute nothing (`0 * log2(0) = 0`). The input is
/// not renormalised; callers pass rows that are already stochastic.
pub fn shannon_entropy(probs: &[f64]) -> f64 {
    let s: f64 = probs
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| p * p.log2())
        .sum();
    // 0.0 - s keeps a deterministic row at +0.0 rather than -0.0
    0.0 - s
}

/// Maximum entropy of a distribution over `n` outcomes: `log2(n)`.
///
/// Returns 0.0 for `n <= 1`.
pub fn max_entropy(n: usize) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    (n as f64).log2()
}

/// Entropy as a percentage of the maximum, `100 * h / h_max`.
///
/// Returns 0.0 when `h_max` is zero (a single-state chain cannot vary).
pub fn entropy_ratio_pct(h: f64, h_max: f64) -> f64 {
    if h_max <= 0.0 {
        return 0.0;
    }
    100.0 * h / h_max
}

/// Weighted sum `sum(w[i] * x[i])` over the common prefix of both slices.
pub fn weighted_sum(weights: &[f64], values: &[f64]) -> f64 {
    weights.iter().zip(values).map(|(w, x)| w * x).sum()
}
