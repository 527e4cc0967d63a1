//! Result record of a trim-and-fill analysis

use crate::config::{Estimator, ResolvedSide};
use crate::report::TrimFillReport;
use crate::sensitivity::SensitivityAssessment;
use crate::side::SideResolution;
use meta_confidence::ConfidenceInterval;
use meta_core::{PooledEstimate, StudyRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-fatal condition raised during an analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TrimFillWarning {
    /// The iteration cap was reached before `k0` stabilised
    NonConvergence { max_iterations: usize, last_k0: usize },
    /// The requested estimator ran as a different one
    EstimatorSubstituted { requested: Estimator, used: Estimator },
}

impl fmt::Display for TrimFillWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrimFillWarning::NonConvergence {
                max_iterations,
                last_k0,
            } => write!(
                f,
                "did not converge within {max_iterations} iterations (last k0 = {last_k0})"
            ),
            TrimFillWarning::EstimatorSubstituted { requested, used } => {
                write!(f, "{requested} is not implemented distinctly; ran {used}")
            }
        }
    }
}

/// Immutable outcome of one trim-and-fill analysis
///
/// Pooled values come from fixed-effect inverse-variance pooling, intervals
/// are `estimate ± 1.96·SE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrimFillResult {
    pub(crate) k0: usize,
    pub(crate) side_resolution: SideResolution,
    pub(crate) estimator: Estimator,
    pub(crate) original: PooledEstimate,
    pub(crate) ci_original: ConfidenceInterval,
    pub(crate) trimmed: PooledEstimate,
    pub(crate) filled: PooledEstimate,
    pub(crate) ci_filled: ConfidenceInterval,
    pub(crate) imputed_studies: Vec<StudyRecord>,
    pub(crate) mirrored_indices: Vec<usize>,
    pub(crate) converged: bool,
    pub(crate) iterations: usize,
    pub(crate) warnings: Vec<TrimFillWarning>,
}

impl TrimFillResult {
    /// Estimated number of missing studies
    pub fn k0(&self) -> usize {
        self.k0
    }

    /// Side that was trimmed and filled
    pub fn side(&self) -> ResolvedSide {
        self.side_resolution.side
    }

    pub fn side_resolution(&self) -> &SideResolution {
        &self.side_resolution
    }

    /// Estimator requested in the configuration
    pub fn estimator(&self) -> Estimator {
        self.estimator
    }

    pub fn k_original(&self) -> usize {
        self.original.k
    }

    /// `k_original + k0`
    pub fn k_filled(&self) -> usize {
        self.original.k + self.imputed_studies.len()
    }

    pub fn pooled_original(&self) -> f64 {
        self.original.estimate
    }

    pub fn se_original(&self) -> f64 {
        self.original.standard_error()
    }

    pub fn ci_original(&self) -> &ConfidenceInterval {
        &self.ci_original
    }

    /// Pooled estimate of the trimmed working set, the center of the mirror
    pub fn pooled_trimmed(&self) -> f64 {
        self.trimmed.estimate
    }

    pub fn pooled_filled(&self) -> f64 {
        self.filled.estimate
    }

    pub fn se_filled(&self) -> f64 {
        self.filled.standard_error()
    }

    pub fn ci_filled(&self) -> &ConfidenceInterval {
        &self.ci_filled
    }

    /// Full pooling detail for the original set
    pub fn original(&self) -> &PooledEstimate {
        &self.original
    }

    /// Full pooling detail for the trimmed working set
    pub fn trimmed(&self) -> &PooledEstimate {
        &self.trimmed
    }

    /// Full pooling detail for the original plus imputed studies
    pub fn filled(&self) -> &PooledEstimate {
        &self.filled
    }

    /// Imputed mirror-image studies
    pub fn imputed_studies(&self) -> &[StudyRecord] {
        &self.imputed_studies
    }

    /// Indices into the original set of the studies that were mirrored,
    /// aligned with [`imputed_studies`](Self::imputed_studies)
    pub fn mirrored_indices(&self) -> &[usize] {
        &self.mirrored_indices
    }

    /// Whether `k0` stabilised before the iteration cap
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Number of trim iterations run
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn warnings(&self) -> &[TrimFillWarning] {
        &self.warnings
    }

    /// Original studies followed by the imputed ones
    pub fn combined_studies(&self, original: &[StudyRecord]) -> Vec<StudyRecord> {
        original
            .iter()
            .chain(&self.imputed_studies)
            .copied()
            .collect()
    }

    /// `pooled_filled − pooled_original`
    pub fn pooled_change(&self) -> f64 {
        self.filled.estimate - self.original.estimate
    }

    /// `|pooled_filled − pooled_original| / |pooled_original|` in percent
    ///
    /// Zero when nothing was imputed; `None` when the original estimate is
    /// exactly zero and studies were imputed.
    pub fn percent_change(&self) -> Option<f64> {
        if self.k0 == 0 {
            Some(0.0)
        } else if self.original.estimate == 0.0 {
            None
        } else {
            Some((self.pooled_change() / self.original.estimate).abs() * 100.0)
        }
    }

    /// Whether the original and filled intervals disagree on excluding zero
    pub fn significance_changed(&self) -> bool {
        self.ci_original.excludes_zero() != self.ci_filled.excludes_zero()
    }

    /// Robustness interpretation of this result
    pub fn sensitivity(&self) -> SensitivityAssessment {
        SensitivityAssessment::from_result(self)
    }

    /// Comparison table and interpretation, rendered with `Display`
    pub fn report(&self) -> TrimFillReport<'_> {
        TrimFillReport::new(self)
    }

    /// Flat record of the headline numbers
    pub fn summary(&self) -> TrimFillSummary {
        TrimFillSummary {
            k0: self.k0,
            side: self.side(),
            estimator: self.estimator,
            k_original: self.k_original(),
            k_filled: self.k_filled(),
            pooled_original: self.pooled_original(),
            pooled_filled: self.pooled_filled(),
            se_original: self.se_original(),
            se_filled: self.se_filled(),
            ci_original: [self.ci_original.lower, self.ci_original.upper],
            ci_filled: [self.ci_filled.lower, self.ci_filled.upper],
            percent_change: self.percent_change(),
            converged: self.converged,
        }
    }
}

/// Serializable headline numbers of a trim-and-fill analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrimFillSummary {
    pub k0: usize,
    pub side: ResolvedSide,
    pub estimator: Estimator,
    pub k_original: usize,
    pub k_filled: usize,
    pub pooled_original: f64,
    pub pooled_filled: f64,
    pub se_original: f64,
    pub se_filled: f64,
    /// `[lower, upper]`
    pub ci_original: [f64; 2],
    /// `[lower, upper]`
    pub ci_filled: [f64; 2],
    pub percent_change: Option<f64>,
    pub converged: bool,
}
