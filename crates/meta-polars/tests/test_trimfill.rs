//! Tests for trim-and-fill on DataFrames

mod common;

use approx::assert_abs_diff_eq;
use common::*;
use meta_polars::{Estimator, MetaAnalysisExt, Side, TrimFillConfig};
use polars::prelude::*;

fn count_true(flags: &BooleanChunked) -> usize {
    flags.into_iter().filter(|flag| *flag == Some(true)).count()
}

fn r0() -> TrimFillConfig {
    TrimFillConfig::default().with_estimator(Estimator::R0)
}

#[test]
fn test_trim_and_fill_matches_slice_api() {
    let df = precise_large_effects_df();
    let from_df = df.trim_and_fill("yi", "vi", r0()).unwrap();

    let studies = df.study_records("yi", "vi").unwrap();
    let direct = meta_trimfill::trim_and_fill(&studies, r0()).unwrap();

    assert_eq!(from_df, direct);
    assert_eq!(from_df.k0(), 3);
}

#[test]
fn test_summary_frame() {
    let df = precise_large_effects_df();
    let summary = df.trim_and_fill_summary("yi", "vi", r0()).unwrap();

    assert_eq!(summary.height(), 1);
    assert_eq!(summary.width(), 15);
    assert_eq!(summary.column("k0").unwrap().u32().unwrap().get(0), Some(3));
    assert_eq!(summary.column("k_filled").unwrap().u32().unwrap().get(0), Some(13));
    assert_eq!(summary.column("side").unwrap().str().unwrap().get(0), Some("right"));
    assert_eq!(summary.column("estimator").unwrap().str().unwrap().get(0), Some("R0"));
    assert_eq!(summary.column("converged").unwrap().bool().unwrap().get(0), Some(true));

    assert_abs_diff_eq!(extract_f64(&summary, "pooled_original", 0), 1.2045454545, epsilon = 1e-9);
    assert_abs_diff_eq!(extract_f64(&summary, "pooled_filled", 0), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(extract_f64(&summary, "percent_change", 0), 100.0, epsilon = 1e-9);
    assert!(extract_f64(&summary, "ci_lower_filled", 0) < 0.0);
}

#[test]
fn test_filled_frame() {
    let df = precise_large_effects_df();
    let filled = df.trim_and_fill_filled("yi", "vi", r0()).unwrap();

    assert_eq!(filled.height(), 13);
    let imputed = filled.column("imputed").unwrap().bool().unwrap();
    assert_eq!(count_true(imputed), 3);
    assert_eq!(imputed.get(0), Some(false));
    assert_eq!(imputed.get(12), Some(true));

    let mirrored = filled.column("mirrored_from").unwrap();
    assert_eq!(mirrored.null_count(), 10);
    assert_eq!(mirrored.u32().unwrap().get(10), Some(7));

    assert_abs_diff_eq!(extract_f64(&filled, "yi", 12), -2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(extract_f64(&filled, "vi", 12), 0.01, epsilon = 1e-15);
    assert_abs_diff_eq!(extract_f64(&filled, "standard_error", 12), 0.1, epsilon = 1e-12);
}

#[test]
fn test_symmetric_frame_has_nothing_to_fill() {
    let df = df![
        "effect" => [0.1, 0.2, 0.3],
        "variance" => [0.01, 0.01, 0.01],
    ]
    .unwrap();

    let filled = df
        .trim_and_fill_filled("effect", "variance", TrimFillConfig::default())
        .unwrap();
    assert_eq!(filled.height(), 3);
    assert_eq!(count_true(filled.column("imputed").unwrap().bool().unwrap()), 0);

    let summary = df
        .trim_and_fill_summary("effect", "variance", TrimFillConfig::default())
        .unwrap();
    assert_eq!(summary.column("k0").unwrap().u32().unwrap().get(0), Some(0));
    assert_abs_diff_eq!(extract_f64(&summary, "percent_change", 0), 0.0);
}

#[test]
fn test_explicit_side() {
    let df = df![
        "yi" => [-0.3, -0.2, -0.1, 0.0, 0.1, 0.2, 0.3, 1.5, 1.8, 2.0],
        "vi" => [0.04, 0.02, 0.01, 0.01, 0.01, 0.02, 0.04, 0.09, 0.1, 0.12],
    ]
    .unwrap();

    let config = TrimFillConfig::default().with_side(Side::Right);
    let result = df.trim_and_fill("yi", "vi", config).unwrap();
    assert_eq!(result.k0(), 2);
    assert!(result.pooled_filled() < result.pooled_original());
}

#[test]
fn test_knapp_hartung_table() {
    let df = df![
        "yi" => [0.10, 0.35, 0.42, 0.05, 0.60],
        "vi" => [0.04, 0.02, 0.05, 0.03, 0.06],
    ]
    .unwrap();

    let analysis = df.knapp_hartung("yi", "vi", 0.95).unwrap();
    let table = df.knapp_hartung_table("yi", "vi", 0.95).unwrap();

    assert_eq!(table.height(), 2);
    let methods = table.column("method").unwrap().str().unwrap();
    assert_eq!(methods.get(0), Some("standard"));
    assert_eq!(methods.get(1), Some("knapp_hartung"));

    assert_abs_diff_eq!(extract_f64(&table, "estimate", 0), analysis.pooled.estimate);
    assert_abs_diff_eq!(extract_f64(&table, "estimate", 1), analysis.pooled.estimate);
    assert_abs_diff_eq!(extract_f64(&table, "ci_lower", 1), analysis.adjusted.interval.lower);
    assert_abs_diff_eq!(extract_f64(&table, "p_value", 1), analysis.adjusted.p_value);
    assert_eq!(analysis.adjusted.df, 4);
}
