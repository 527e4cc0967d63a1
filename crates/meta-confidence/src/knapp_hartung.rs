//! Knapp-Hartung adjusted intervals for random-effects estimates
//!
//! The Knapp-Hartung (Hartung-Knapp-Sidik-Jonkman) method rescales the
//! random-effects variance by the observed residual heterogeneity and uses a
//! t-distribution with `k - 1` degrees of freedom instead of the normal:
//!
//! ```text
//! w*      = 1 / (v + τ²)
//! Q*      = Σ w* (y - μ)²
//! var_KH  = (Q* / (k - 1)) / Σ w*
//! CI      = μ ± t_{k-1, 1-α/2} · sqrt(var_KH)
//! ```
//!
//! References: Knapp & Hartung (2003), Statistics in Medicine 22(17);
//! IntHout, Ioannidis & Borm (2014), BMC Medical Research Methodology 14(1).

use crate::{normal::z_test, ConfidenceInterval, ConfidenceLevel, NormalCI, ZTest};
use meta_core::{random_effects, Error, Heterogeneity, PooledEstimate, Result, StudyRecord};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};
use tracing::{debug, instrument};

/// Below this many studies the adjusted interval is the recommended primary result
pub const RECOMMENDED_BELOW_STUDIES: usize = 20;

/// Knapp-Hartung interval estimator
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KnappHartung {
    level: ConfidenceLevel,
}

/// Adjusted standard error, interval and t-test for one pooled estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KnappHartungResult {
    /// Adjusted standard error
    pub standard_error: f64,
    /// Adjusted variance `(Q*/df) / Σw*`
    pub variance: f64,
    /// Interval from the t-distribution
    pub interval: ConfidenceInterval,
    /// `μ / SE_KH`
    pub t_statistic: f64,
    /// t quantile used for the interval
    pub t_critical: f64,
    /// Degrees of freedom (`k - 1`)
    pub df: usize,
    /// Two-sided p-value from the t-distribution
    pub p_value: f64,
    /// Weighted residual sum of squares Q*
    pub q: f64,
}

impl KnappHartung {
    /// Create an estimator for the given confidence level
    pub fn new(level: ConfidenceLevel) -> Self {
        Self { level }
    }

    /// Confidence level of the produced intervals
    pub fn level(&self) -> ConfidenceLevel {
        self.level
    }

    /// Adjust the interval of an already pooled random-effects estimate
    ///
    /// `tau_squared` and `pooled_effect` must come from the same study set.
    pub fn adjust(
        &self,
        studies: &[StudyRecord],
        tau_squared: f64,
        pooled_effect: f64,
    ) -> Result<KnappHartungResult> {
        if studies.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: studies.len(),
            });
        }
        let df = studies.len() - 1;

        let mut sum_weights = 0.0;
        let mut q = 0.0;
        for study in studies {
            let w = 1.0 / (study.variance + tau_squared);
            sum_weights += w;
            q += w * (study.effect - pooled_effect).powi(2);
        }

        let variance = (q / df as f64) / sum_weights;
        let standard_error = variance.sqrt();
        if !(standard_error > 0.0 && standard_error.is_finite()) {
            return Err(Error::Computation(format!(
                "Knapp-Hartung standard error is degenerate ({standard_error}); \
                 the effects show no residual variation"
            )));
        }

        let t_dist = StudentsT::new(0.0, 1.0, df as f64).map_err(|e| {
            Error::Computation(format!("Failed to create t-distribution: {}", e))
        })?;
        let t_critical = t_dist.inverse_cdf(1.0 - self.level.tail_probability());
        let t_statistic = pooled_effect / standard_error;
        let p_value = 2.0 * (1.0 - t_dist.cdf(t_statistic.abs()));

        Ok(KnappHartungResult {
            standard_error,
            variance,
            interval: ConfidenceInterval::symmetric(
                pooled_effect,
                t_critical * standard_error,
                self.level.value(),
            ),
            t_statistic,
            t_critical,
            df,
            p_value,
            q,
        })
    }

    /// Full random-effects analysis with and without the adjustment
    ///
    /// τ² is estimated with DerSimonian-Laird; the unadjusted interval uses
    /// the exact normal quantile for this estimator's level.
    #[instrument(skip(self, studies), fields(k = studies.len()))]
    pub fn analyze(&self, studies: &[StudyRecord]) -> Result<KnappHartungAnalysis> {
        meta_core::validate_studies(studies, 2)?;

        let heterogeneity = Heterogeneity::dersimonian_laird(studies)?;
        let pooled = random_effects(studies, heterogeneity.tau_squared)?;
        let standard_interval =
            NormalCI::new(self.level)?.interval(pooled.estimate, pooled.standard_error())?;
        let standard_test = z_test(pooled.estimate, pooled.standard_error())?;
        let adjusted = self.adjust(studies, heterogeneity.tau_squared, pooled.estimate)?;

        debug!(
            tau_squared = heterogeneity.tau_squared,
            se_standard = pooled.standard_error(),
            se_adjusted = adjusted.standard_error,
            t_critical = adjusted.t_critical,
            "Knapp-Hartung adjustment computed"
        );

        Ok(KnappHartungAnalysis {
            heterogeneity,
            pooled,
            standard_interval,
            standard_test,
            adjusted,
        })
    }
}

/// Random-effects estimate with the standard and the adjusted inference side by side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KnappHartungAnalysis {
    /// Heterogeneity statistics, including the τ² used for weighting
    pub heterogeneity: Heterogeneity,
    /// Random-effects pooled estimate
    pub pooled: PooledEstimate,
    /// Normal-approximation interval
    pub standard_interval: ConfidenceInterval,
    /// Normal z-test of the pooled estimate
    pub standard_test: ZTest,
    /// Knapp-Hartung adjusted inference
    pub adjusted: KnappHartungResult,
}

impl KnappHartungAnalysis {
    /// Number of pooled studies
    pub fn k(&self) -> usize {
        self.pooled.k
    }

    /// Relative change in interval width, in percent (positive = wider)
    pub fn width_change_percent(&self) -> f64 {
        let standard = self.standard_interval.width();
        (self.adjusted.interval.width() - standard) / standard * 100.0
    }

    /// Whether the two tests disagree at significance level `alpha`
    pub fn significance_changed(&self, alpha: f64) -> bool {
        (self.standard_test.p_value < alpha) != (self.adjusted.p_value < alpha)
    }

    /// Whether the adjusted interval should be reported as primary
    pub fn is_recommended(&self) -> bool {
        self.k() < RECOMMENDED_BELOW_STUDIES
    }
}
