//! Trim-and-fill result frames

use crate::Result;
use meta_core::StudyRecord;
use meta_trimfill::TrimFillResult;
use polars::prelude::*;

pub(super) fn summary_frame(result: &TrimFillResult) -> Result<DataFrame> {
    let summary = result.summary();
    let df = df![
        "k0" => [summary.k0 as u32],
        "side" => [summary.side.to_string()],
        "estimator" => [summary.estimator.to_string()],
        "k_original" => [summary.k_original as u32],
        "k_filled" => [summary.k_filled as u32],
        "pooled_original" => [summary.pooled_original],
        "pooled_filled" => [summary.pooled_filled],
        "se_original" => [summary.se_original],
        "se_filled" => [summary.se_filled],
        "ci_lower_original" => [summary.ci_original[0]],
        "ci_upper_original" => [summary.ci_original[1]],
        "ci_lower_filled" => [summary.ci_filled[0]],
        "ci_upper_filled" => [summary.ci_filled[1]],
        "percent_change" => [summary.percent_change],
        "converged" => [summary.converged],
    ]?;
    Ok(df)
}

pub(super) fn filled_frame(
    studies: &[StudyRecord],
    result: &TrimFillResult,
    effect_col: &str,
    var_col: &str,
) -> Result<DataFrame> {
    let combined = result.combined_studies(studies);
    let effects: Vec<f64> = combined.iter().map(|s| s.effect).collect();
    let variances: Vec<f64> = combined.iter().map(|s| s.variance).collect();
    let standard_errors: Vec<f64> = combined.iter().map(StudyRecord::standard_error).collect();

    let mut imputed = vec![false; studies.len()];
    imputed.resize(combined.len(), true);

    let mut mirrored_from: Vec<Option<u32>> = vec![None; studies.len()];
    mirrored_from.extend(result.mirrored_indices().iter().map(|&i| Some(i as u32)));

    let columns: Vec<Column> = vec![
        Series::new(effect_col.into(), effects).into(),
        Series::new(var_col.into(), variances).into(),
        Series::new("standard_error".into(), standard_errors).into(),
        Series::new("imputed".into(), imputed).into(),
        Series::new("mirrored_from".into(), mirrored_from).into(),
    ];
    Ok(DataFrame::new(columns)?)
}
