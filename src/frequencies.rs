//! Helpers over frequency sequences treated as multisets.

/// Frequencies in ascending order.
///
/// Both renderers sum in this order, so their output is bit-identical for
/// every permutation of the same multiset.
pub fn canonical_order(freqs: &[f64]) -> Vec<f64> {
    let mut sorted = freqs.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Distinct frequencies in ascending order
pub fn distinct(freqs: &[f64]) -> Vec<f64> {
    let mut unique = canonical_order(freqs);
    unique.dedup();
    unique
}
