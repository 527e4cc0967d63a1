//! Duval-Tweedie trim-and-fill
//!
//! The estimator iterates a trim step until the estimated number of missing
//! studies `k0` stops changing:
//!
//! 1. Pool the current working set (fixed effect) to get the center `μ`
//! 2. Estimate `k0` from the signed deviations `side · (y − μ)`
//! 3. Rebuild the working set from the full set without the `k0` studies with
//!    the largest signed deviations
//!
//! The `k0` most extreme studies relative to the trimmed center are then
//! mirrored about that center, keeping their variances, and the original plus
//! mirrored studies are pooled again.
//!
//! References: Duval & Tweedie (2000), Biometrics 56(2);
//! Duval & Tweedie (2000), JASA 95(449).

use crate::config::{Estimator, TrimFillConfig};
use crate::estimators::{LinearEstimator, RankEstimator};
use crate::result::{TrimFillResult, TrimFillWarning};
use crate::side::resolve_side;
use crate::traits::MissingStudiesEstimator;
use meta_confidence::NormalCI;
use meta_core::{
    fixed_effect, fixed_effect_center, top_indices, validate_studies, Result, StudyRecord,
};
use tracing::{debug, instrument, warn};

/// Fewest studies a trim-and-fill analysis accepts
pub const MIN_STUDIES: usize = 3;

/// Trim-and-fill estimator configured once and applied to many study sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrimFill {
    config: TrimFillConfig,
}

impl TrimFill {
    pub fn new(config: TrimFillConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrimFillConfig {
        &self.config
    }

    /// Run the analysis on `studies`
    ///
    /// Fails before any computation when the configuration is invalid, fewer
    /// than three studies are given, or any study has a non-finite effect or a
    /// variance that is not a finite positive number. Hitting the iteration
    /// cap is not an error: the result reports `converged() == false` and
    /// carries a [`TrimFillWarning::NonConvergence`].
    #[instrument(skip(self, studies), fields(k = studies.len(), estimator = %self.config.estimator))]
    pub fn estimate(&self, studies: &[StudyRecord]) -> Result<TrimFillResult> {
        self.config.validate()?;
        validate_studies(studies, MIN_STUDIES)?;

        let mut warnings = Vec::new();
        let estimator = missing_studies_estimator(self.config.estimator);
        if self.config.estimator != self.config.estimator.effective() {
            warn!(
                requested = %self.config.estimator,
                used = estimator.name(),
                "estimator is not implemented distinctly"
            );
            warnings.push(TrimFillWarning::EstimatorSubstituted {
                requested: self.config.estimator,
                used: self.config.estimator.effective(),
            });
        }

        let original = fixed_effect(studies)?;
        let side_resolution = resolve_side(self.config.side, studies, original.estimate);
        let multiplier = side_resolution.side.multiplier();
        debug!(
            side = %side_resolution.side,
            auto_detected = side_resolution.auto_detected,
            mean_deviation = side_resolution.mean_deviation,
            "side resolved"
        );

        let mut working = studies.to_vec();
        let mut k0 = 0;
        let mut converged = false;
        let mut iterations = 0;

        for iteration in 1..=self.config.max_iterations {
            iterations = iteration;
            let center = fixed_effect_center(&working)?;
            let deviations = signed_deviations(&working, center, multiplier);
            let k0_new = clamp_missing(estimator.estimate_missing(&deviations), working.len());

            debug!(iteration, k_current = working.len(), center, k0_new, "trim iteration");

            if k0_new == k0 {
                converged = true;
                break;
            }
            k0 = k0_new;
            working = trim(studies, center, multiplier, k0);
        }

        if !converged {
            warn!(
                max_iterations = self.config.max_iterations,
                last_k0 = k0,
                "trim-and-fill did not converge"
            );
            warnings.push(TrimFillWarning::NonConvergence {
                max_iterations: self.config.max_iterations,
                last_k0: k0,
            });
        }

        let trimmed = fixed_effect(&working)?;
        let mirrored_indices = top_indices(
            &signed_deviations(studies, trimmed.estimate, multiplier),
            k0,
        );
        let imputed_studies: Vec<StudyRecord> = mirrored_indices
            .iter()
            .map(|&i| studies[i].mirrored(trimmed.estimate))
            .collect();

        let combined: Vec<StudyRecord> = studies.iter().chain(&imputed_studies).copied().collect();
        let filled = fixed_effect(&combined)?;

        let ci = NormalCI::conventional();
        let ci_original = ci.interval(original.estimate, original.standard_error())?;
        let ci_filled = ci.interval(filled.estimate, filled.standard_error())?;

        debug!(
            k0,
            converged,
            iterations,
            pooled_original = original.estimate,
            pooled_trimmed = trimmed.estimate,
            pooled_filled = filled.estimate,
            "trim-and-fill complete"
        );

        Ok(TrimFillResult {
            k0,
            side_resolution,
            estimator: self.config.estimator,
            original,
            ci_original,
            trimmed,
            filled,
            ci_filled,
            imputed_studies,
            mirrored_indices,
            converged,
            iterations,
            warnings,
        })
    }
}

/// Run a trim-and-fill analysis with the given configuration
pub fn trim_and_fill(studies: &[StudyRecord], config: TrimFillConfig) -> Result<TrimFillResult> {
    TrimFill::new(config).estimate(studies)
}

fn missing_studies_estimator(estimator: Estimator) -> &'static dyn MissingStudiesEstimator {
    match estimator.effective() {
        Estimator::R0 => &RankEstimator,
        _ => &LinearEstimator,
    }
}

fn signed_deviations(studies: &[StudyRecord], center: f64, multiplier: f64) -> Vec<f64> {
    studies
        .iter()
        .map(|study| multiplier * (study.effect - center))
        .collect()
}

fn clamp_missing(raw: i64, k_current: usize) -> usize {
    let upper = k_current.saturating_sub(1) as i64;
    raw.clamp(0, upper) as usize
}

/// Full set without the `k0` largest signed deviations, input order preserved
fn trim(studies: &[StudyRecord], center: f64, multiplier: f64, k0: usize) -> Vec<StudyRecord> {
    let mut removed = vec![false; studies.len()];
    for index in top_indices(&signed_deviations(studies, center, multiplier), k0) {
        removed[index] = true;
    }
    studies
        .iter()
        .zip(removed)
        .filter(|(_, is_removed)| !is_removed)
        .map(|(study, _)| *study)
        .collect()
}
