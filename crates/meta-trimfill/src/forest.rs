//! Forest-plot data for original and imputed studies
//!
//! Only the data is produced here; rendering is left to the caller.

use crate::result::TrimFillResult;
use meta_confidence::{ConfidenceInterval, NormalCI};
use meta_core::{Error, Result, StudyRecord};
use serde::{Deserialize, Serialize};

/// Whether a row is an observed or an imputed study
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudyOrigin {
    Original,
    Imputed,
}

/// One study row of a forest plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestRow {
    /// `Study i` or `Filled i`, 1-based within its origin
    pub label: String,
    pub origin: StudyOrigin,
    pub effect: f64,
    pub standard_error: f64,
    /// `effect ± 1.96·SE`
    pub interval: ConfidenceInterval,
}

/// Rows sorted by effect (largest first) and the pooled summary intervals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestPlotData {
    pub rows: Vec<ForestRow>,
    pub pooled_original: ConfidenceInterval,
    /// Present only when studies were imputed
    pub pooled_filled: Option<ConfidenceInterval>,
}

impl ForestPlotData {
    /// Build plot rows from the analysed studies and their result
    ///
    /// `studies` must be the set the result was computed from.
    pub fn new(studies: &[StudyRecord], result: &TrimFillResult) -> Result<Self> {
        if studies.len() != result.k_original() {
            return Err(Error::size_mismatch(
                result.k_original(),
                studies.len(),
                "forest plot studies",
            ));
        }

        let ci = NormalCI::conventional();
        let labelled = studies
            .iter()
            .enumerate()
            .map(|(i, s)| (format!("Study {}", i + 1), StudyOrigin::Original, s))
            .chain(
                result
                    .imputed_studies()
                    .iter()
                    .enumerate()
                    .map(|(i, s)| (format!("Filled {}", i + 1), StudyOrigin::Imputed, s)),
            );

        let mut rows = Vec::with_capacity(result.k_filled());
        for (label, origin, study) in labelled {
            let standard_error = study.standard_error();
            rows.push(ForestRow {
                label,
                origin,
                effect: study.effect,
                standard_error,
                interval: ci.interval(study.effect, standard_error)?,
            });
        }
        rows.sort_by(|a, b| b.effect.total_cmp(&a.effect));

        let pooled_filled = (result.k0() > 0).then(|| *result.ci_filled());

        Ok(Self {
            rows,
            pooled_original: *result.ci_original(),
            pooled_filled,
        })
    }

    /// Rows of imputed studies only
    pub fn imputed_rows(&self) -> impl Iterator<Item = &ForestRow> {
        self.rows
            .iter()
            .filter(|row| row.origin == StudyOrigin::Imputed)
    }
}
