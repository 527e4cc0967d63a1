//! Column extraction and cleaning

use crate::{Error, Result};
use meta_core::StudyRecord;
use polars::prelude::*;
use tracing::debug;

/// Values of a numeric column as `f64`, nulls kept as `None`
fn float_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = df
        .column(name)
        .map_err(|_| Error::InvalidColumn(name.to_string()))?;

    let column = match column.dtype() {
        DataType::Float64 => column.clone(),
        DataType::Float32
        | DataType::Int64
        | DataType::Int32
        | DataType::UInt64
        | DataType::UInt32 => column.cast(&DataType::Float64)?,
        dt => {
            return Err(Error::TypeMismatch {
                expected: "numeric".to_string(),
                got: format!("{:?}", dt),
            });
        }
    };

    Ok(column.f64()?.iter().collect())
}

/// Studies from the rows that carry a usable effect and variance
pub(super) fn clean_studies(
    df: &DataFrame,
    effect_col: &str,
    var_col: &str,
) -> Result<Vec<StudyRecord>> {
    let effects = float_values(df, effect_col)?;
    let variances = float_values(df, var_col)?;

    let studies: Vec<StudyRecord> = effects
        .into_iter()
        .zip(variances)
        .filter_map(|row| match row {
            (Some(effect), Some(variance)) if !effect.is_nan() && variance > 0.0 => {
                Some(StudyRecord::new(effect, variance))
            }
            _ => None,
        })
        .collect();

    let dropped = df.height() - studies.len();
    if dropped > 0 {
        debug!(
            dropped,
            kept = studies.len(),
            effect_col,
            var_col,
            "dropped rows without a usable effect and variance"
        );
    }

    Ok(studies)
}
