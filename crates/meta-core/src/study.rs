//! Per-study effect size records and input validation

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One independent observation: an effect size estimate and its sampling variance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudyRecord {
    /// Effect size estimate (`y`)
    pub effect: f64,
    /// Sampling variance of the estimate (`v`, must be > 0 for analysis)
    pub variance: f64,
}

impl StudyRecord {
    /// Create a new study record
    ///
    /// No validation happens here; analyses validate the whole set up front
    /// with [`validate_studies`].
    pub fn new(effect: f64, variance: f64) -> Self {
        Self { effect, variance }
    }

    /// Standard error of the effect estimate
    pub fn standard_error(&self) -> f64 {
        self.variance.sqrt()
    }

    /// Inverse-variance weight
    pub fn weight(&self) -> f64 {
        1.0 / self.variance
    }

    /// Reflect the effect about `center`, keeping the variance
    pub fn mirrored(&self, center: f64) -> Self {
        Self {
            effect: 2.0 * center - self.effect,
            variance: self.variance,
        }
    }

    /// Whether the record can take part in an inverse-variance analysis
    pub fn is_usable(&self) -> bool {
        self.effect.is_finite()
            && self.variance.is_finite()
            && self.variance > 0.0
            && self.weight().is_finite()
    }
}

impl From<(f64, f64)> for StudyRecord {
    fn from((effect, variance): (f64, f64)) -> Self {
        Self::new(effect, variance)
    }
}

impl fmt::Display for StudyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = {:.4}, v = {:.4}", self.effect, self.variance)
    }
}

/// Zip parallel effect and variance columns into study records
pub fn studies_from_columns(effects: &[f64], variances: &[f64]) -> Result<Vec<StudyRecord>> {
    if effects.len() != variances.len() {
        return Err(Error::size_mismatch(
            effects.len(),
            variances.len(),
            "variance column",
        ));
    }

    Ok(effects
        .iter()
        .zip(variances)
        .map(|(&effect, &variance)| StudyRecord::new(effect, variance))
        .collect())
}

/// Validate a study set before any computation
///
/// The count is checked first, then each study in order: a non-finite effect
/// is `InvalidInput`, a variance that is not a finite positive number (or whose
/// weight overflows) is `InvalidVariance`.
pub fn validate_studies(studies: &[StudyRecord], min_studies: usize) -> Result<()> {
    if studies.len() < min_studies {
        return Err(Error::InsufficientData {
            expected: min_studies,
            actual: studies.len(),
        });
    }

    for (index, study) in studies.iter().enumerate() {
        if !study.effect.is_finite() {
            return Err(Error::non_finite_input(&format!("effect size of study {index}")));
        }
        if !(study.variance.is_finite() && study.variance > 0.0 && study.weight().is_finite()) {
            return Err(Error::InvalidVariance {
                index,
                variance: study.variance,
            });
        }
    }

    Ok(())
}
