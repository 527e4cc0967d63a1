//! Estimator trait for the number of missing studies

/// Estimates how many studies are missing from one side of the funnel
///
/// Implementations receive the signed centered deviations
/// `side_multiplier · (y_i − μ)` of the current working set and return the
/// raw estimate. The caller clamps it to `[0, k − 1]`.
pub trait MissingStudiesEstimator {
    /// Short estimator name used in logs
    fn name(&self) -> &'static str;

    /// Raw (unclamped) estimate of the number of missing studies
    fn estimate_missing(&self, deviations: &[f64]) -> i64;
}
