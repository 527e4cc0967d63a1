//! Extension trait for meta-analytic sensitivity analyses on Polars DataFrames

use crate::Result;
use meta_confidence::KnappHartungAnalysis;
use meta_core::StudyRecord;
use meta_trimfill::{TrimFillConfig, TrimFillResult};
use polars::prelude::*;

/// Sensitivity analyses over one row per study
///
/// Every method reads an effect-size column and a sampling-variance column.
/// Integer and `Float32` columns are cast to `Float64`. Rows with a missing
/// or NaN effect or variance, and rows with a variance ≤ 0, are dropped
/// before analysis.
pub trait MetaAnalysisExt {
    /// Clean the two columns into study records
    fn study_records(&self, effect_col: &str, var_col: &str) -> Result<Vec<StudyRecord>>;

    /// Run trim-and-fill on the cleaned studies
    fn trim_and_fill(
        &self,
        effect_col: &str,
        var_col: &str,
        config: TrimFillConfig,
    ) -> Result<TrimFillResult>;

    /// Trim-and-fill headline numbers as a single-row DataFrame
    ///
    /// # Returns
    /// Columns `k0`, `side`, `estimator`, `k_original`, `k_filled`,
    /// `pooled_original`, `pooled_filled`, `se_original`, `se_filled`,
    /// `ci_lower_original`, `ci_upper_original`, `ci_lower_filled`,
    /// `ci_upper_filled`, `percent_change`, `converged`
    fn trim_and_fill_summary(
        &self,
        effect_col: &str,
        var_col: &str,
        config: TrimFillConfig,
    ) -> Result<DataFrame>;

    /// Cleaned studies followed by the imputed ones
    ///
    /// # Returns
    /// Columns `{effect_col}`, `{var_col}`, `standard_error`, `imputed` and
    /// `mirrored_from` (row of the cleaned study that was mirrored, null for
    /// observed studies)
    fn trim_and_fill_filled(
        &self,
        effect_col: &str,
        var_col: &str,
        config: TrimFillConfig,
    ) -> Result<DataFrame>;

    /// Random-effects analysis with and without the Knapp-Hartung adjustment
    fn knapp_hartung(
        &self,
        effect_col: &str,
        var_col: &str,
        confidence_level: f64,
    ) -> Result<KnappHartungAnalysis>;

    /// Standard and adjusted inference side by side
    ///
    /// # Returns
    /// Two rows (`standard`, `knapp_hartung`) with columns `method`,
    /// `estimate`, `standard_error`, `ci_lower`, `ci_upper`, `p_value`,
    /// `significance`
    fn knapp_hartung_table(
        &self,
        effect_col: &str,
        var_col: &str,
        confidence_level: f64,
    ) -> Result<DataFrame>;
}
