//! Common test utilities for meta-polars tests

#![allow(dead_code)]

use polars::prelude::*;

/// Seven imprecise symmetric studies plus three precise large effects
pub fn precise_large_effects_df() -> DataFrame {
    df![
        "yi" => [-0.3, -0.2, -0.1, 0.0, 0.1, 0.2, 0.3, 1.5, 1.8, 2.0],
        "vi" => [0.05, 0.05, 0.05, 0.05, 0.05, 0.05, 0.05, 0.01, 0.01, 0.01],
    ]
    .unwrap()
}

/// Helper function to extract a single value from a result DataFrame
pub fn extract_f64(df: &DataFrame, col_name: &str, row: usize) -> f64 {
    df.column(col_name)
        .unwrap()
        .f64()
        .unwrap()
        .get(row)
        .unwrap()
}
