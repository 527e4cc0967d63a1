//! Between-study heterogeneity statistics

use crate::{fixed_effect, Error, Result, StudyRecord};
use serde::{Deserialize, Serialize};

/// Cochran's Q, I² and the DerSimonian-Laird τ² for a study set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Heterogeneity {
    /// Cochran's Q around the fixed-effect estimate
    pub q: f64,
    /// Degrees of freedom (`k - 1`)
    pub df: usize,
    /// Proportion of total variation due to heterogeneity, in [0, 1]
    pub i_squared: f64,
    /// Method-of-moments between-study variance, truncated at zero
    pub tau_squared: f64,
}

impl Heterogeneity {
    /// DerSimonian-Laird method-of-moments estimator
    ///
    /// `τ² = max(0, (Q - df) / C)` with `C = Σw - Σw²/Σw`.
    pub fn dersimonian_laird(studies: &[StudyRecord]) -> Result<Self> {
        if studies.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: studies.len(),
            });
        }

        let pooled = fixed_effect(studies)?;
        let mut q = 0.0;
        let mut sum_w_squared = 0.0;
        for study in studies {
            let w = study.weight();
            q += w * (study.effect - pooled.estimate).powi(2);
            sum_w_squared += w * w;
        }

        let df = studies.len() - 1;
        let c = pooled.total_weight - sum_w_squared / pooled.total_weight;
        let excess = q - df as f64;

        let tau_squared = if c > 0.0 { (excess / c).max(0.0) } else { 0.0 };
        let i_squared = if q > 0.0 { (excess / q).max(0.0) } else { 0.0 };

        Ok(Self {
            q,
            df,
            i_squared,
            tau_squared,
        })
    }
}
