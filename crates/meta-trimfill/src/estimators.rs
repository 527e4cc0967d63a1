//! L0 and R0 estimators of the number of missing studies

use crate::traits::MissingStudiesEstimator;
use meta_core::ranking::{ascending_order, average_ranks};

/// Linear estimator (L0)
///
/// Sorts the deviations ascending, sums `r − (k+1)/2` over the positions `r`
/// holding positive deviations, scales by `k − 1` and returns
/// `floor((k − 1 − γ) / 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinearEstimator;

impl MissingStudiesEstimator for LinearEstimator {
    fn name(&self) -> &'static str {
        "L0"
    }

    fn estimate_missing(&self, deviations: &[f64]) -> i64 {
        let k = deviations.len() as f64;
        let middle_rank = (k + 1.0) / 2.0;

        let rank_sum: f64 = ascending_order(deviations)
            .into_iter()
            .enumerate()
            .filter(|&(_, index)| deviations[index] > 0.0)
            .map(|(position, _)| position as f64 + 1.0 - middle_rank)
            .sum();

        let gamma = if deviations.len() > 1 {
            rank_sum / (k - 1.0)
        } else {
            0.0
        };
        ((k - 1.0 - gamma) / 2.0).floor() as i64
    }
}

/// Rank-sum estimator (R0)
///
/// With average ranks, `T+` the rank sum and `k+` the count of positive
/// deviations: `floor((4·T+ − k+·(k+1)) / (2k − k+ + 2))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankEstimator;

impl MissingStudiesEstimator for RankEstimator {
    fn name(&self) -> &'static str {
        "R0"
    }

    fn estimate_missing(&self, deviations: &[f64]) -> i64 {
        let k = deviations.len() as f64;
        let ranks = average_ranks(deviations);

        let mut rank_sum = 0.0;
        let mut positives = 0usize;
        for (&deviation, &rank) in deviations.iter().zip(&ranks) {
            if deviation > 0.0 {
                rank_sum += rank;
                positives += 1;
            }
        }

        let k_plus = positives as f64;
        let numerator = 4.0 * rank_sum - k_plus * (k + 1.0);
        let denominator = 2.0 * k - k_plus + 2.0;
        (numerator / denominator).floor() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_l0_hand_computed() {
        // Positive deviations hold ranks 3, 4, 5 with middle rank 3: S = 3, γ = 0.75
        assert_eq!(LinearEstimator.estimate_missing(&[-2.0, -1.0, 1.0, 2.0, 3.0]), 1);
        // Unsorted input gives the same answer
        assert_eq!(LinearEstimator.estimate_missing(&[3.0, -1.0, 2.0, -2.0, 1.0]), 1);
        // S = 1, γ = 0.5, floor(0.75) = 0
        assert_eq!(LinearEstimator.estimate_missing(&[-1.0, 0.0, 1.0]), 0);
    }

    #[test]
    fn test_l0_single_study() {
        assert_eq!(LinearEstimator.estimate_missing(&[0.5]), 0);
    }

    #[test]
    fn test_r0_hand_computed() {
        // T+ = 3 + 4 + 5 = 12, k+ = 3: floor(30 / 9) = 3
        assert_eq!(RankEstimator.estimate_missing(&[-2.0, -1.0, 1.0, 2.0, 3.0]), 3);
        // No positive deviations
        assert_eq!(RankEstimator.estimate_missing(&[-1.0, -2.0, -3.0]), 0);
    }

    #[test]
    fn test_r0_ties_share_rank() {
        // Ranks 2.5, 2.5, 1: T+ = 5, k+ = 2, floor(12 / 6) = 2
        assert_eq!(RankEstimator.estimate_missing(&[1.0, 1.0, -1.0]), 2);
    }

    #[test]
    fn test_names() {
        assert_eq!(LinearEstimator.name(), "L0");
        assert_eq!(RankEstimator.name(), "R0");
    }
}
