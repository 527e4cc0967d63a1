//! Ordering, ranking and correlation helpers

/// Indices that sort `values` ascending
///
/// The sort is stable and uses the IEEE total order, so ties keep their input
/// order and the result is fully deterministic.
pub fn ascending_order(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
    order
}

/// Indices of the `n` largest values: the last `n` entries of [`ascending_order`]
pub fn top_indices(values: &[f64], n: usize) -> Vec<usize> {
    let order = ascending_order(values);
    let start = order.len().saturating_sub(n);
    order[start..].to_vec()
}

/// 1-based ranks, with tied values sharing the mean of their positions
pub fn average_ranks(values: &[f64]) -> Vec<f64> {
    let order = ascending_order(values);
    let mut ranks = vec![0.0; values.len()];

    let mut start = 0;
    while start < order.len() {
        let mut end = start;
        while end + 1 < order.len() && values[order[end + 1]] == values[order[start]] {
            end += 1;
        }
        let rank = (start + end) as f64 / 2.0 + 1.0;
        for &index in &order[start..=end] {
            ranks[index] = rank;
        }
        start = end + 1;
    }

    ranks
}

/// Pearson correlation coefficient, `None` when it is undefined
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        numerator += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    let denominator = (sum_sq_x * sum_sq_y).sqrt();
    if denominator > 0.0 && denominator.is_finite() {
        Some(numerator / denominator)
    } else {
        None
    }
}
