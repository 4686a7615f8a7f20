//! Shared numeric helpers for the signature engine.

/// Median of a set of values, over a freshly sorted copy.
///
/// The selection rule is load-bearing for quantization cutoffs and must not
/// change: a single element is returned as-is, an even count selects the
/// upper-middle element (never the average of the two middles), and an odd
/// count above one averages the two elements around the midpoint.
pub(crate) fn median(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty(), "median of an empty set is undefined");

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    if sorted.len() == 1 {
        return sorted[0];
    }

    let halfway = sorted.len() / 2;

    if sorted.len() % 2 == 0 {
        return sorted[halfway];
    }

    (sorted[halfway] + sorted[halfway - 1]) / 2.0
}

/// Euclidean length of an integer vector: `sqrt(sum(v_i^2))`.
pub(crate) fn euclidean_length(vector: &[i8]) -> f64 {
    vector
        .iter()
        .map(|&value| f64::from(value).powi(2))
        .sum::<f64>()
        .sqrt()
}
