//! `MetaAnalysisExt` implementation for `DataFrame`

mod columns;
mod knapp_hartung;
mod trimfill;

use crate::{MetaAnalysisExt, Result};
use meta_confidence::KnappHartungAnalysis;
use meta_core::StudyRecord;
use meta_trimfill::{TrimFillConfig, TrimFillResult};
use polars::prelude::*;

impl MetaAnalysisExt for DataFrame {
    fn study_records(&self, effect_col: &str, var_col: &str) -> Result<Vec<StudyRecord>> {
        columns::clean_studies(self, effect_col, var_col)
    }

    fn trim_and_fill(
        &self,
        effect_col: &str,
        var_col: &str,
        config: TrimFillConfig,
    ) -> Result<TrimFillResult> {
        let studies = self.study_records(effect_col, var_col)?;
        Ok(meta_trimfill::trim_and_fill(&studies, config)?)
    }

    fn trim_and_fill_summary(
        &self,
        effect_col: &str,
        var_col: &str,
        config: TrimFillConfig,
    ) -> Result<DataFrame> {
        let result = self.trim_and_fill(effect_col, var_col, config)?;
        trimfill::summary_frame(&result)
    }

    fn trim_and_fill_filled(
        &self,
        effect_col: &str,
        var_col: &str,
        config: TrimFillConfig,
    ) -> Result<DataFrame> {
        let studies = self.study_records(effect_col, var_col)?;
        let result = meta_trimfill::trim_and_fill(&studies, config)?;
        trimfill::filled_frame(&studies, &result, effect_col, var_col)
    }

    fn knapp_hartung(
        &self,
        effect_col: &str,
        var_col: &str,
        confidence_level: f64,
    ) -> Result<KnappHartungAnalysis> {
        let estimator = meta_confidence::knapp_hartung(confidence_level)?;
        let studies = self.study_records(effect_col, var_col)?;
        Ok(estimator.analyze(&studies)?)
    }

    fn knapp_hartung_table(
        &self,
        effect_col: &str,
        var_col: &str,
        confidence_level: f64,
    ) -> Result<DataFrame> {
        let analysis = self.knapp_hartung(effect_col, var_col, confidence_level)?;
        knapp_hartung::comparison_frame(&analysis)
    }
}
