//! Tests for edge cases and error handling

mod common;

use meta_polars::{Error, MetaAnalysisExt, TrimFillConfig};
use polars::prelude::*;

#[test]
fn test_rows_without_usable_values_are_dropped() {
    let df = DataFrame::new(vec![
        Series::new(
            PlSmallStr::from("yi"),
            vec![Some(0.1), None, Some(0.3), Some(f64::NAN), Some(0.5), Some(0.6)],
        )
        .into(),
        Series::new(
            PlSmallStr::from("vi"),
            vec![Some(0.01), Some(0.02), Some(0.0), Some(0.02), Some(-0.1), None],
        )
        .into(),
    ])
    .unwrap();

    let studies = df.study_records("yi", "vi").unwrap();
    assert_eq!(studies.len(), 1);
    assert_eq!(studies[0].effect, 0.1);
}

#[test]
fn test_integer_columns_are_cast() {
    let df = df![
        "yi" => [1i64, 2, 3, 4],
        "vi" => [1.0f32, 0.5, 0.25, 2.0],
    ]
    .unwrap();

    let studies = df.study_records("yi", "vi").unwrap();
    assert_eq!(studies.len(), 4);
    assert_eq!(studies[2].effect, 3.0);
    assert_eq!(studies[2].variance, 0.25);
}

#[test]
fn test_invalid_column_error() {
    let df = df!["yi" => [0.1, 0.2, 0.3], "vi" => [0.01, 0.01, 0.01]].unwrap();

    let result = df.trim_and_fill("effect", "vi", TrimFillConfig::default());
    assert!(matches!(result, Err(Error::InvalidColumn(name)) if name == "effect"));
}

#[test]
fn test_non_numeric_column_error() {
    let df = df!["yi" => ["a", "b", "c"], "vi" => [0.01, 0.01, 0.01]].unwrap();

    let result = df.study_records("yi", "vi");
    assert!(matches!(result, Err(Error::TypeMismatch { .. })));
}

#[test]
fn test_too_few_rows_after_cleaning() {
    let df = df![
        "yi" => [0.1, 0.2, 0.3],
        "vi" => [0.01, 0.0, 0.01],
    ]
    .unwrap();

    let result = df.trim_and_fill("yi", "vi", TrimFillConfig::default());
    assert!(matches!(
        result,
        Err(Error::Core(meta_core::Error::InsufficientData { expected: 3, actual: 2 }))
    ));
}

#[test]
fn test_invalid_confidence_level() {
    let df = df!["yi" => [0.1, 0.4, 0.3], "vi" => [0.01, 0.02, 0.01]].unwrap();

    let result = df.knapp_hartung("yi", "vi", 1.5);
    assert!(matches!(
        result,
        Err(Error::Core(meta_core::Error::InvalidParameter(_)))
    ));
}

#[test]
fn test_empty_frame() {
    let df = DataFrame::new(vec![
        Series::new(PlSmallStr::from("yi"), Vec::<f64>::new()).into(),
        Series::new(PlSmallStr::from("vi"), Vec::<f64>::new()).into(),
    ])
    .unwrap();

    assert!(df.study_records("yi", "vi").unwrap().is_empty());
    assert!(df
        .trim_and_fill("yi", "vi", TrimFillConfig::default())
        .is_err());
}
