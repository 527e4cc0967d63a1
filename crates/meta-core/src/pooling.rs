//! Inverse-variance pooling
//!
//! Both models weight each study by the reciprocal of a variance: the sampling
//! variance alone for the fixed-effect model, and the sampling variance plus
//! the between-study variance τ² for the random-effects model. Sums are
//! accumulated left to right so identical inputs always pool identically.

use crate::{Error, Result, StudyRecord};
use serde::{Deserialize, Serialize};

/// Result of pooling a set of studies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PooledEstimate {
    /// Weighted mean effect
    pub estimate: f64,
    /// Variance of the weighted mean (`1 / Σw`)
    pub variance: f64,
    /// Sum of the weights
    pub total_weight: f64,
    /// Number of pooled studies
    pub k: usize,
}

impl PooledEstimate {
    /// Standard error of the pooled estimate
    pub fn standard_error(&self) -> f64 {
        self.variance.sqrt()
    }

    /// Wald statistic `estimate / SE`
    pub fn z_statistic(&self) -> f64 {
        self.estimate / self.standard_error()
    }
}

/// Fixed-effect (common-effect) pooled estimate with weights `1/v`
pub fn fixed_effect(studies: &[StudyRecord]) -> Result<PooledEstimate> {
    pool_with(studies, |study| 1.0 / study.variance)
}

/// Random-effects pooled estimate with weights `1/(v + τ²)`
pub fn random_effects(studies: &[StudyRecord], tau_squared: f64) -> Result<PooledEstimate> {
    if !(tau_squared.is_finite() && tau_squared >= 0.0) {
        return Err(Error::InvalidParameter(format!(
            "tau-squared must be finite and non-negative, got {tau_squared}"
        )));
    }
    pool_with(studies, |study| 1.0 / (study.variance + tau_squared))
}

/// Weighted mean of the effects only, for callers that need just the center
pub fn fixed_effect_center(studies: &[StudyRecord]) -> Result<f64> {
    fixed_effect(studies).map(|pooled| pooled.estimate)
}

fn pool_with<W>(studies: &[StudyRecord], weight: W) -> Result<PooledEstimate>
where
    W: Fn(&StudyRecord) -> f64,
{
    if studies.is_empty() {
        return Err(Error::empty_input("pooling"));
    }

    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    for study in studies {
        let w = weight(study);
        weighted_sum += w * study.effect;
        total_weight += w;
    }

    if !(total_weight.is_finite() && total_weight > 0.0) {
        return Err(Error::Computation(format!(
            "sum of weights is not a finite positive number: {total_weight}"
        )));
    }

    let estimate = weighted_sum / total_weight;
    if !estimate.is_finite() {
        return Err(Error::non_finite("pooled estimate"));
    }

    Ok(PooledEstimate {
        estimate,
        variance: 1.0 / total_weight,
        total_weight,
        k: studies.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn studies(pairs: &[(f64, f64)]) -> Vec<StudyRecord> {
        pairs.iter().copied().map(StudyRecord::from).collect()
    }

    #[test]
    fn test_equal_weights_is_mean() {
        let set = studies(&[(0.1, 0.01), (0.2, 0.01), (0.3, 0.01)]);
        let pooled = fixed_effect(&set).unwrap();
        assert_abs_diff_eq!(pooled.estimate, 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(pooled.total_weight, 300.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pooled.standard_error(), (1.0f64 / 300.0).sqrt(), epsilon = 1e-12);
        assert_eq!(pooled.k, 3);
    }

    #[test]
    fn test_precise_study_dominates() {
        let set = studies(&[(0.0, 1.0), (1.0, 0.01)]);
        let pooled = fixed_effect(&set).unwrap();
        // weights 1 and 100
        assert_abs_diff_eq!(pooled.estimate, 100.0 / 101.0, epsilon = 1e-12);
    }

    #[test]
    fn test_random_effects_flattens_weights() {
        let set = studies(&[(0.0, 1.0), (1.0, 0.01)]);
        let fe = fixed_effect(&set).unwrap();
        let re = random_effects(&set, 10.0).unwrap();
        assert!(re.estimate < fe.estimate);
        assert!(re.variance > fe.variance);

        let re_zero = random_effects(&set, 0.0).unwrap();
        assert_eq!(re_zero, fe);
    }

    #[test]
    fn test_invalid_tau_squared() {
        let set = studies(&[(0.0, 1.0), (1.0, 0.01)]);
        assert!(random_effects(&set, -0.1).is_err());
        assert!(random_effects(&set, f64::NAN).is_err());
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            fixed_effect(&[]),
            Err(Error::InsufficientData { expected: 1, actual: 0 })
        ));
    }

    #[test]
    fn test_overflow_is_a_computation_error() {
        let set = studies(&[(1e300, 1e-10), (1e300, 1e-10), (-1e300, 1e-10)]);
        assert!(crate::validate_studies(&set, 3).is_ok());

        let err = fixed_effect(&set).unwrap_err();
        assert!(matches!(err, Error::Computation(_)));
        assert!(!err.is_validation());
    }
}
